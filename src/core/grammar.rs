//! Cognitive grammar of a prime-bounded alphabet
//!
//! Treating the primes up to a bound as an alphabet, each letter carries
//! the persona of its index. The analysis groups letters by lineage and
//! states which compositions the alphabet can express.

use crate::core::persona::{PersonaType, get_index_persona};
use crate::core::primes::Primes;
use crate::utils::error::{AppError, AppResult};
use serde::Serialize;

/// A prime in the alphabet, tagged with its index persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letter {
    pub index: u64,
    pub prime: u64,
    pub persona: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarAnalysis {
    pub prime_bound: u64,
    pub alphabet_size: usize,
    pub primes: Vec<u64>,
    pub capabilities: Vec<String>,
    pub pure_binary: Vec<Letter>,
    pub squared: Vec<Letter>,
    pub mixed: Vec<Letter>,
    pub ternary_based: Vec<Letter>,
    pub grammatical_expressiveness: usize,
}

pub fn analyze_cognitive_grammar(prime_bound: u64) -> AppResult<GrammarAnalysis> {
    if prime_bound < 2 {
        return Err(AppError::invalid(format!(
            "prime bound must be >= 2, got {}",
            prime_bound
        )));
    }

    let primes: Vec<u64> = Primes::new().take_while(|&p| p <= prime_bound).collect();

    let mut pure_binary = Vec::new();
    let mut squared = Vec::new();
    let mut mixed = Vec::new();
    let mut ternary_based = Vec::new();

    for (i, &prime) in primes.iter().enumerate() {
        let index = i as u64 + 1;
        let persona = get_index_persona(index)?;
        let letter = Letter {
            index,
            prime,
            persona: persona.character.clone(),
        };

        // 6 = 2×3 belongs to both the binary and the ternary lineage
        if is_power_of(index, 2) || index == 6 {
            pure_binary.push(letter.clone());
        }
        if persona.kind == PersonaType::PrimePower {
            squared.push(letter.clone());
        }
        if matches!(persona.kind, PersonaType::SquarefreeComposite | PersonaType::Mixed) {
            mixed.push(letter.clone());
        }
        if is_power_of(index, 3) || index == 6 {
            ternary_based.push(letter);
        }
    }

    let mut capabilities = vec![format!("Binary depths: {} levels", pure_binary.len())];
    if !squared.is_empty() {
        capabilities.push(format!("Squared structures: {} types", squared.len()));
    }
    if !mixed.is_empty() {
        capabilities.push(format!("Mixed ensembles: {} compositions", mixed.len()));
        if mixed.iter().any(|l| l.index == 6) {
            capabilities.push("Can mix binary and ternary (2×3 ensemble)".to_string());
        }
    }
    if !ternary_based.is_empty() {
        capabilities.push(format!("Ternary operations: {} forms", ternary_based.len()));
        if ternary_based.iter().any(|l| l.index == 9) {
            capabilities.push("Can invoke squared-ternary (3²)".to_string());
        }
    }

    Ok(GrammarAnalysis {
        prime_bound,
        alphabet_size: primes.len(),
        primes,
        grammatical_expressiveness: capabilities.len(),
        capabilities,
        pure_binary,
        squared,
        mixed,
        ternary_based,
    })
}

/// True for `base^k` with `k >= 1`.
fn is_power_of(mut n: u64, base: u64) -> bool {
    if n < base {
        return false;
    }
    while n % base == 0 {
        n /= base;
    }
    n == 1
}

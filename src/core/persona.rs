//! Index personas: a qualitative reading of an index's factorization shape
//!
//! The category is decided by the factorization alone. The human-readable
//! character adds flavor for small indices and the binary/ternary lineages.

use crate::core::divisors::{Factorization, prime_factorization};
use crate::core::matula::number_to_matula;
use crate::core::primes::nth_prime;
use crate::utils::error::{AppResult, require_positive};
use serde::Serialize;
use std::fmt;

/// Factorization shape of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaType {
    /// n = 1
    Unit,
    /// a single prime factor with exponent 1
    Prime,
    /// a single prime factor with exponent above 1
    PrimePower,
    /// two or more distinct primes, all exponents 1
    SquarefreeComposite,
    /// two or more distinct primes, some exponent above 1
    Mixed,
}

impl PersonaType {
    pub fn classify(factorization: &Factorization) -> Self {
        match (factorization.distinct(), factorization.is_squarefree()) {
            (0, _) => PersonaType::Unit,
            (1, true) => PersonaType::Prime,
            (1, false) => PersonaType::PrimePower,
            (_, true) => PersonaType::SquarefreeComposite,
            (_, false) => PersonaType::Mixed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaType::Unit => "unit",
            PersonaType::Prime => "prime",
            PersonaType::PrimePower => "prime_power",
            PersonaType::SquarefreeComposite => "squarefree_composite",
            PersonaType::Mixed => "mixed",
        }
    }

    /// True when some prime divides the index more than once.
    pub fn has_repeated_factor(&self) -> bool {
        matches!(self, PersonaType::PrimePower | PersonaType::Mixed)
    }
}

impl fmt::Display for PersonaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persona of an index, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPersona {
    pub index: u64,
    pub structure: String,
    pub factorization: Factorization,
    pub character: String,
    #[serde(rename = "type")]
    pub kind: PersonaType,
    pub factors: Vec<u64>,
    pub unique_factors: Vec<u64>,
}

/// One line of the persona table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaRow {
    pub prime: u64,
    pub index: u64,
    pub structure: String,
    pub persona: String,
    #[serde(rename = "type")]
    pub kind: PersonaType,
}

pub fn get_index_persona(n: u64) -> AppResult<IndexPersona> {
    require_positive(n, "index")?;

    let factorization = prime_factorization(n)?;
    let kind = PersonaType::classify(&factorization);
    let character = describe(n, kind, &factorization);

    Ok(IndexPersona {
        index: n,
        structure: number_to_matula(n)?,
        factors: factorization.factors(),
        unique_factors: factorization.primes(),
        factorization,
        character,
        kind,
    })
}

/// Personas of `1..=max_index`, each paired with the prime at that index.
pub fn generate_index_persona_table(max_index: u64) -> AppResult<Vec<PersonaRow>> {
    require_positive(max_index, "max_index")?;

    (1..=max_index)
        .map(|index| -> AppResult<PersonaRow> {
            let persona = get_index_persona(index)?;
            Ok(PersonaRow {
                prime: nth_prime(index)?,
                index,
                structure: persona.structure,
                persona: persona.character,
                kind: persona.kind,
            })
        })
        .collect()
}

fn describe(n: u64, kind: PersonaType, factorization: &Factorization) -> String {
    match n {
        1 => return "unit/identity: the ur-shell".to_string(),
        3 => return "nested binary: phi's home".to_string(),
        5 => return "triple nesting: deep recursion".to_string(),
        6 => return "first mixed ensemble: 2×3".to_string(),
        7 => return "inherits 7's 'squared binary'".to_string(),
        10 => return "2×5: binary-fibonacci liaison".to_string(),
        _ => {}
    }

    let primes = factorization.primes();
    match kind {
        PersonaType::Unit => "unit/identity: the ur-shell".to_string(),
        PersonaType::Prime if n == 2 => "pure binary: the first recursion".to_string(),
        PersonaType::Prime => format!("pure {}-adic", n),
        PersonaType::PrimePower => {
            let prime = primes[0];
            let power = factorization.total();
            match (prime, power) {
                (2, 2) => "binary squared: first composite index".to_string(),
                (2, 3) => "binary cubed: pure 2³".to_string(),
                (2, _) => format!("binary to power {}", power),
                (3, 2) => "ternary squared: 3²".to_string(),
                (3, _) => format!("ternary to power {}", power),
                _ => format!("{} to power {}", prime, power),
            }
        }
        PersonaType::SquarefreeComposite | PersonaType::Mixed => {
            if primes.contains(&2) && primes.contains(&3) {
                "binary-ternary mix".to_string()
            } else {
                format!("heterogeneous mixing of {:?}", primes)
            }
        }
    }
}

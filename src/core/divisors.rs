//! Divisors and prime-power factorization

use crate::utils::error::{AppResult, require_positive};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Prime factor to exponent, ordered by ascending prime.
///
/// The empty factorization is the factorization of 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Factorization {
    powers: BTreeMap<u64, u32>,
}

impl Factorization {
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.powers.iter().map(|(&p, &e)| (p, e))
    }

    pub fn exponent(&self, prime: u64) -> u32 {
        self.powers.get(&prime).copied().unwrap_or(0)
    }

    /// Prime factors with multiplicity, ascending: 12 gives `[2, 2, 3]`.
    pub fn factors(&self) -> Vec<u64> {
        self.iter()
            .flat_map(|(p, e)| std::iter::repeat_n(p, e as usize))
            .collect()
    }

    /// Distinct prime factors, ascending.
    pub fn primes(&self) -> Vec<u64> {
        self.powers.keys().copied().collect()
    }

    /// Number of distinct prime factors.
    pub fn distinct(&self) -> usize {
        self.powers.len()
    }

    /// Number of prime factors counted with multiplicity.
    pub fn total(&self) -> u32 {
        self.powers.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    pub fn is_squarefree(&self) -> bool {
        self.powers.values().all(|&e| e == 1)
    }

    /// Multiply the factorization back out. Never overflows for a
    /// factorization produced from a `u64`.
    pub fn product(&self) -> u64 {
        self.iter().map(|(p, e)| p.pow(e)).product()
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        let terms: Vec<String> = self
            .iter()
            .map(|(p, e)| if e == 1 { p.to_string() } else { format!("{}^{}", p, e) })
            .collect();
        write!(f, "{}", terms.join(" × "))
    }
}

/// All divisors of `n`, ascending.
pub fn divisors(n: u64) -> AppResult<Vec<u64>> {
    require_positive(n, "n")?;

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d <= n / d {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    Ok(small)
}

/// Prime-power factorization by repeated division by the smallest factor.
pub fn prime_factorization(n: u64) -> AppResult<Factorization> {
    require_positive(n, "n")?;

    let mut powers = BTreeMap::new();
    let mut rest = n;
    let mut d = 2;
    while d <= rest / d {
        while rest % d == 0 {
            *powers.entry(d).or_insert(0) += 1;
            rest /= d;
        }
        d += 1;
    }
    if rest > 1 {
        *powers.entry(rest).or_insert(0) += 1;
    }
    Ok(Factorization { powers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::primes::is_prime;

    #[test]
    fn test_divisors() {
        assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(7).unwrap(), vec![1, 7]);
        assert_eq!(divisors(1).unwrap(), vec![1]);
        assert_eq!(divisors(36).unwrap(), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
    }

    #[test]
    fn test_divisors_are_closed_under_complement() {
        for n in 1..=300 {
            let ds = divisors(n).unwrap();
            assert_eq!(ds.first(), Some(&1));
            assert_eq!(ds.last(), Some(&n));
            for &d in &ds {
                assert!(ds.contains(&(n / d)), "{} missing complement of {}", n, d);
            }
        }
    }

    #[test]
    fn test_prime_factorization() {
        assert_eq!(prime_factorization(12).unwrap().factors(), vec![2, 2, 3]);
        assert_eq!(prime_factorization(7).unwrap().factors(), vec![7]);
        assert!(prime_factorization(1).unwrap().is_empty());

        let f = prime_factorization(360).unwrap();
        assert_eq!(f.exponent(2), 3);
        assert_eq!(f.exponent(3), 2);
        assert_eq!(f.exponent(5), 1);
        assert_eq!(f.exponent(7), 0);
        assert_eq!(f.distinct(), 3);
        assert_eq!(f.total(), 6);
    }

    #[test]
    fn test_factorization_product_is_identity() {
        for n in 1..=1000 {
            let f = prime_factorization(n).unwrap();
            assert_eq!(f.product(), n);
            assert!(f.primes().iter().all(|&p| is_prime(p)));
        }
    }

    #[test]
    fn test_factorization_display() {
        assert_eq!(prime_factorization(1).unwrap().to_string(), "1");
        assert_eq!(prime_factorization(12).unwrap().to_string(), "2^2 × 3");
        assert_eq!(prime_factorization(30).unwrap().to_string(), "2 × 3 × 5");
    }

    #[test]
    fn test_factorization_serializes_as_map() {
        let json = serde_json::to_string(&prime_factorization(12).unwrap()).unwrap();
        assert_eq!(json, r#"{"2":2,"3":1}"#);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(divisors(0).is_err());
        assert!(prime_factorization(0).is_err());
    }
}

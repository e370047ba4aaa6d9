//! Primality testing and the ascending prime sequence
//!
//! Everything here is plain trial division. Indices in the tens or hundreds
//! are the target range, so no sieve is kept around between calls.

use crate::utils::error::{AppError, AppResult, require_positive};
use tracing::debug;

/// Trial-division primality test over `2..=floor(sqrt(n))`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    let mut d = 2;
    // d <= n / d avoids squaring past u64::MAX
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Ascending stream of primes starting at 2.
///
/// The stream ends (returns `None`) only if the next candidate would
/// exceed `u64::MAX`.
#[derive(Debug, Clone)]
pub struct Primes {
    next: Option<u64>,
}

impl Primes {
    pub fn new() -> Self {
        Self { next: Some(2) }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let mut candidate = self.next?;
        while !is_prime(candidate) {
            candidate = match candidate.checked_add(1) {
                Some(c) => c,
                None => {
                    self.next = None;
                    return None;
                }
            };
        }
        self.next = candidate.checked_add(1);
        Some(candidate)
    }
}

/// The nth prime, 1-indexed: `nth_prime(1) == 2`.
pub fn nth_prime(n: u64) -> AppResult<u64> {
    require_positive(n, "n")?;
    debug!(n, "scanning for nth prime");

    let mut count = 0u64;
    for p in Primes::new() {
        count += 1;
        if count == n {
            return Ok(p);
        }
    }
    Err(AppError::overflow(format!("the {}th prime does not fit in 64 bits", n)))
}

/// Position of `p` in the prime sequence, so that `nth_prime(prime_index(p)) == p`.
pub fn prime_index(p: u64) -> AppResult<u64> {
    if !is_prime(p) {
        return Err(AppError::invalid(format!("{} is not prime", p)));
    }
    let index = (2..=p).filter(|&k| is_prime(k)).count() as u64;
    Ok(index)
}

/// The first `count` primes paired with their 1-based index.
pub fn generate_prime_sequence(count: u64) -> AppResult<Vec<(u64, u64)>> {
    require_positive(count, "count")?;

    let sequence: Vec<(u64, u64)> = Primes::new()
        .take(count as usize)
        .enumerate()
        .map(|(i, p)| (i as u64 + 1, p))
        .collect();

    if (sequence.len() as u64) < count {
        return Err(AppError::overflow(format!("cannot enumerate {} primes in 64 bits", count)));
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMES_BELOW_100: [u64; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];

    fn sieve(limit: usize) -> Vec<bool> {
        let mut flags = vec![true; limit + 1];
        flags[0] = false;
        flags[1] = false;
        let mut i = 2;
        while i * i <= limit {
            if flags[i] {
                let mut j = i * i;
                while j <= limit {
                    flags[j] = false;
                    j += i;
                }
            }
            i += 1;
        }
        flags
    }

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        for p in PRIMES_BELOW_100 {
            assert!(is_prime(p), "{} should be prime", p);
        }
    }

    #[test]
    fn test_is_prime_matches_sieve_up_to_1000() {
        let flags = sieve(1000);
        for k in 1..=1000u64 {
            assert_eq!(is_prime(k), flags[k as usize], "disagreement at {}", k);
        }
    }

    #[test]
    fn test_nth_prime_known_values() {
        assert_eq!(nth_prime(1), Ok(2));
        assert_eq!(nth_prime(2), Ok(3));
        assert_eq!(nth_prime(5), Ok(11));
        assert_eq!(nth_prime(7), Ok(17));
        assert_eq!(nth_prime(25), Ok(97));
        assert_eq!(nth_prime(100), Ok(541));
    }

    #[test]
    fn test_nth_prime_rejects_zero() {
        assert!(matches!(nth_prime(0), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_nth_prime_is_strictly_increasing() {
        let mut previous = 0;
        for n in 1..=60 {
            let p = nth_prime(n).unwrap();
            assert!(p > previous);
            previous = p;
        }
    }

    #[test]
    fn test_primes_iterator() {
        let first: Vec<u64> = Primes::new().take(25).collect();
        assert_eq!(first, PRIMES_BELOW_100.to_vec());
    }

    #[test]
    fn test_prime_index() {
        assert_eq!(prime_index(2), Ok(1));
        assert_eq!(prime_index(13), Ok(6));
        assert_eq!(prime_index(541), Ok(100));
        assert!(prime_index(1).is_err());
        assert!(prime_index(15).is_err());
    }

    #[test]
    fn test_generate_prime_sequence() {
        let sequence = generate_prime_sequence(5).unwrap();
        assert_eq!(sequence, vec![(1, 2), (2, 3), (3, 5), (4, 7), (5, 11)]);
        assert!(matches!(generate_prime_sequence(0), Err(AppError::InvalidArgument(_))));
    }
}

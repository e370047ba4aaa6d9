//! Rooted-tree counting and prime towers

use crate::core::primes::nth_prime;
use crate::utils::error::{AppError, AppResult, require_positive};
use tracing::debug;

/// Largest `n` whose A000081 term fits in a `u64`.
pub const MAX_ROOTED_TREES_NODES: u64 = 47;

/// Every tower level above 5 at least doubles, so deeper towers leave `u64`.
pub const MAX_TOWER_DEPTH: usize = 64;

/// Number of unlabeled rooted trees with `n` nodes (OEIS A000081).
///
/// Uses `a(n+1) = (1/n) * sum_{k=1..n} (sum_{d|k} d*a(d)) * a(n-k+1)`.
pub fn rooted_trees_count(n: u64) -> AppResult<u64> {
    require_positive(n, "n")?;

    let overflow = || AppError::overflow(format!("A000081({}) does not fit in 64 bits", n));
    if n > MAX_ROOTED_TREES_NODES {
        return Err(overflow());
    }

    // Partial sums reach n * a(n), so they are kept in u128.
    let size = n as usize;
    let mut a = vec![0u128; size + 1];
    a[1] = 1;

    for m in 1..size {
        let mut total: u128 = 0;
        for k in 1..=m {
            let mut inner: u128 = 0;
            for d in (1..=k).filter(|d| k % d == 0) {
                let term = (d as u128).checked_mul(a[d]).ok_or_else(overflow)?;
                inner = inner.checked_add(term).ok_or_else(overflow)?;
            }
            let term = inner.checked_mul(a[m - k + 1]).ok_or_else(overflow)?;
            total = total.checked_add(term).ok_or_else(overflow)?;
        }
        a[m + 1] = total / m as u128;
    }
    u64::try_from(a[size]).map_err(|_| overflow())
}

/// `[seed, p_seed, p_(p_seed), ...]`, applying `nth_prime` `depth` times.
pub fn prime_tower(seed: u64, depth: usize) -> AppResult<Vec<u64>> {
    require_positive(seed, "seed")?;
    if depth > MAX_TOWER_DEPTH {
        return Err(AppError::overflow(format!(
            "prime tower of depth {} does not fit in 64 bits",
            depth
        )));
    }

    let mut tower = Vec::with_capacity(depth + 1);
    tower.push(seed);
    let mut current = seed;
    for level in 0..depth {
        current = nth_prime(current)?;
        debug!(level, value = current, "prime tower level");
        tower.push(current);
    }
    Ok(tower)
}

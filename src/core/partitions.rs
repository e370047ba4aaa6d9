//! Integer partition enumeration
//!
//! Partitions are emitted with non-increasing parts, largest first part
//! first: `partitions(4)` is `[4], [3,1], [2,2], [2,1,1], [1,1,1,1]`.

use crate::utils::error::{AppError, AppResult, require_positive};
use tracing::trace;

/// Largest `n` whose partition count fits in a `u64`.
pub const MAX_PARTITION_COUNT_N: u64 = 416;

/// A multiset of positive parts, stored in non-increasing order.
pub type Partition = Vec<u64>;

/// All partitions of `n`.
pub fn partitions(n: u64) -> AppResult<Vec<Partition>> {
    require_positive(n, "n")?;

    let mut out = Vec::new();
    let mut prefix = Vec::new();
    fill(n, n, &mut prefix, &mut out);
    trace!(n, count = out.len(), "enumerated partitions");
    Ok(out)
}

/// Extend `prefix` with every partition of `remaining` whose parts are `<= max_part`.
fn fill(remaining: u64, max_part: u64, prefix: &mut Vec<u64>, out: &mut Vec<Partition>) {
    if remaining == 0 {
        out.push(prefix.clone());
        return;
    }
    for part in (1..=remaining.min(max_part)).rev() {
        prefix.push(part);
        fill(remaining - part, part, prefix, out);
        prefix.pop();
    }
}

/// p(n), the number of partitions of `n`, without materialising them.
pub fn partition_count(n: u64) -> AppResult<u64> {
    require_positive(n, "n")?;
    if n > MAX_PARTITION_COUNT_N {
        return Err(AppError::overflow(format!("p({}) does not fit in 64 bits", n)));
    }

    let ways = count_table(n as usize);
    Ok(ways[n as usize])
}

/// `[p(1), ..., p(n)]` in one pass; terms past 64 bits are `None`.
pub fn partition_counts(n: u64) -> AppResult<Vec<Option<u64>>> {
    require_positive(n, "n")?;

    let fitting = n.min(MAX_PARTITION_COUNT_N) as usize;
    let ways = count_table(fitting);
    let mut counts: Vec<Option<u64>> = ways[1..].iter().copied().map(Some).collect();
    counts.resize(n as usize, None);
    Ok(counts)
}

/// `ways[t]` is p(t) for `t <= size`; `size` must not exceed the 64-bit limit.
fn count_table(size: usize) -> Vec<u64> {
    let mut ways = vec![0u64; size + 1];
    ways[0] = 1;
    for part in 1..=size {
        for total in part..=size {
            ways[total] = ways[total].saturating_add(ways[total - part]);
        }
    }
    ways
}

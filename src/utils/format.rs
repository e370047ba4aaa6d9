//! Plain string helpers shared by the command handlers

use std::fmt::Display;

/// Render up to `max` items as `[a, b, c]`, noting how many were left out.
pub fn format_list<T: Display>(items: &[T], max: usize) -> String {
    let shown: Vec<String> = items.iter().take(max).map(|i| i.to_string()).collect();
    let mut out = format!("[{}]", shown.join(", "));
    if items.len() > max {
        out.push_str(&format!(" ... and {} more", items.len() - max));
    }
    out
}

/// Render a partition as `3 + 1`.
pub fn format_partition(parts: &[u64]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Truncate to `max_len` characters, ending in `...` when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[1, 2, 3], 10), "[1, 2, 3]");
        assert_eq!(format_list(&[1, 2, 3, 4], 2), "[1, 2] ... and 2 more");
        assert_eq!(format_list::<u64>(&[], 5), "[]");
    }

    #[test]
    fn test_format_partition() {
        assert_eq!(format_partition(&[3, 1]), "3 + 1");
        assert_eq!(format_partition(&[4]), "4");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("(()())", 15), "(()())");
        assert_eq!(truncate_string("abcdefghij", 6), "abc...");
        assert_eq!(truncate_string("first mixed ensemble: 2×3", 10), "first m...");
        assert_eq!(truncate_string("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.3), "30.00%");
        assert_eq!(format_percent(0.07), "7.00%");
    }
}

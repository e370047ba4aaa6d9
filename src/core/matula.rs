//! Matula codec: positive integers <-> unlabeled rooted trees
//!
//! A tree is written as balanced parentheses, one pair per node, with a
//! node's children nested inside it:
//!
//! ```text
//! 1 -> ()        2 -> (())      3 -> ((()))
//! 4 -> (()())    5 -> (((())))  6 -> (()(()))
//! ```
//!
//! The number of a tree is the product of `nth_prime(number(child))` over
//! its children, so a single node is 1. The canonical rendering orders
//! children by ascending Matula number; equal children are identical
//! subtrees, so the order is total. Any well-formed string decodes, and
//! re-encoding its number yields the canonical form.

use crate::core::divisors::prime_factorization;
use crate::core::primes::{nth_prime, prime_index};
use crate::utils::error::{AppError, AppResult, require_positive};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Deepest nesting the parser accepts. A path this long already has a
/// Matula number far past `u64`, so deeper input can only overflow.
pub const MAX_NESTING: usize = 32;

/// A rooted, unlabeled tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatulaTree {
    children: Vec<MatulaTree>,
}

impl MatulaTree {
    /// The single-node tree, number 1.
    pub fn leaf() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<MatulaTree>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[MatulaTree] {
        &self.children
    }

    /// Build the canonical tree for `n`.
    pub fn from_number(n: u64) -> AppResult<Self> {
        require_positive(n, "n")?;
        if n == 1 {
            return Ok(Self::leaf());
        }

        let mut children = Vec::new();
        // ascending primes have ascending indices, which keeps children canonical
        for (prime, exponent) in prime_factorization(n)?.iter() {
            let child = Self::from_number(prime_index(prime)?)?;
            for _ in 0..exponent {
                children.push(child.clone());
            }
        }
        trace!(n, children = children.len(), "encoded matula tree");
        Ok(Self { children })
    }

    /// The Matula number of this tree.
    pub fn number(&self) -> AppResult<u64> {
        let mut n: u64 = 1;
        for child in &self.children {
            let prime = nth_prime(child.number()?)?;
            n = n
                .checked_mul(prime)
                .ok_or_else(|| AppError::overflow("Matula number exceeds 64 bits"))?;
        }
        Ok(n)
    }

    /// The same tree with every level's children in canonical order.
    pub fn canonical(&self) -> AppResult<Self> {
        Self::from_number(self.number()?)
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MatulaTree::node_count).sum::<usize>()
    }

    /// Edges on the longest root-to-leaf path; a single node has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for MatulaTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, ")")
    }
}

impl FromStr for MatulaTree {
    type Err = AppError;

    /// Strict parser: only `(` and `)`, balanced, exactly one root.
    fn from_str(s: &str) -> AppResult<Self> {
        if s.is_empty() {
            return Err(AppError::parse("empty input, expected a tree such as ()"));
        }

        let mut open: Vec<Vec<MatulaTree>> = Vec::new();
        let mut root: Option<MatulaTree> = None;

        for (pos, ch) in s.char_indices() {
            match ch {
                '(' => {
                    if root.is_some() {
                        return Err(AppError::parse(format!(
                            "content after the root tree closed, at position {}",
                            pos
                        )));
                    }
                    if open.len() == MAX_NESTING {
                        return Err(AppError::overflow(format!(
                            "tree nests deeper than {} levels at position {}",
                            MAX_NESTING, pos
                        )));
                    }
                    open.push(Vec::new());
                }
                ')' => {
                    let children = open.pop().ok_or_else(|| {
                        AppError::parse(format!("unmatched ')' at position {}", pos))
                    })?;
                    let node = MatulaTree { children };
                    match open.last_mut() {
                        Some(parent) => parent.push(node),
                        None => root = Some(node),
                    }
                }
                other => {
                    return Err(AppError::parse(format!(
                        "unexpected character {:?} at position {}",
                        other, pos
                    )));
                }
            }
        }

        if !open.is_empty() {
            return Err(AppError::parse(format!("{} unclosed '('", open.len())));
        }
        root.ok_or_else(|| AppError::parse("no tree found"))
    }
}

/// Canonical tree notation for `n`.
pub fn number_to_matula(n: u64) -> AppResult<String> {
    Ok(MatulaTree::from_number(n)?.to_string())
}

/// Decode tree notation back to its number.
pub fn matula_to_number(s: &str) -> AppResult<u64> {
    s.parse::<MatulaTree>()?.number()
}

/// Reorder a well-formed tree string into canonical form.
pub fn canonicalize(s: &str) -> AppResult<String> {
    Ok(s.parse::<MatulaTree>()?.canonical()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trees::rooted_trees_count;

    #[test]
    fn test_known_encodings() {
        let expected = [
            (1, "()"),
            (2, "(())"),
            (3, "((()))"),
            (4, "(()())"),
            (5, "(((())))"),
            (6, "(()(()))"),
            (7, "((()()))"),
            (8, "(()()())"),
            (9, "((())(()))"),
        ];
        for (n, s) in expected {
            assert_eq!(number_to_matula(n).unwrap(), s, "encoding {}", n);
            assert_eq!(matula_to_number(s).unwrap(), n, "decoding {}", s);
        }
    }

    #[test]
    fn test_round_trip_from_numbers() {
        for n in 1..=500 {
            let s = number_to_matula(n).unwrap();
            assert_eq!(matula_to_number(&s).unwrap(), n);
        }
    }

    #[test]
    fn test_non_canonical_strings_canonicalize() {
        assert_eq!(matula_to_number("((())())").unwrap(), 6);
        assert_eq!(canonicalize("((())())").unwrap(), "(()(()))");

        let s = "(((()))(())())";
        let canonical = canonicalize(s).unwrap();
        assert_eq!(matula_to_number(&canonical).unwrap(), matula_to_number(s).unwrap());
        assert_eq!(canonicalize(&canonical).unwrap(), canonical);
    }

    #[test]
    fn test_canonical_strings_are_fixed_points() {
        for n in 1..=200 {
            let s = number_to_matula(n).unwrap();
            assert_eq!(canonicalize(&s).unwrap(), s);
        }
    }

    #[test]
    fn test_malformed_strings_are_parse_errors() {
        for bad in ["(()", "", "())", ")(", "()()", "(a)", " ()", "()\n", "((x))"] {
            assert!(
                matches!(matula_to_number(bad), Err(AppError::Parse(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_zero_is_invalid() {
        assert!(matches!(number_to_matula(0), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_tree_shape() {
        let tree: MatulaTree = "(()(()))".parse().unwrap();
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 2);
        assert_eq!(MatulaTree::leaf().node_count(), 1);
        assert_eq!(MatulaTree::leaf().depth(), 0);
    }

    #[test]
    fn test_with_children_builds_tree() {
        let tree = MatulaTree::with_children(vec![MatulaTree::leaf(), MatulaTree::leaf()]);
        assert_eq!(tree.to_string(), "(()())");
        assert_eq!(tree.number().unwrap(), 4);
    }

    #[test]
    fn test_every_small_tree_appears_once() {
        // the path on 7 nodes is 127, the largest number of any 7-node tree
        let mut by_size = [0u64; 8];
        for n in 1..=127 {
            let size = MatulaTree::from_number(n).unwrap().node_count();
            if size <= 7 {
                by_size[size] += 1;
            }
        }
        for (size, &count) in by_size.iter().enumerate().skip(1) {
            assert_eq!(count, rooted_trees_count(size as u64).unwrap(), "trees with {} nodes", size);
        }
    }

    #[test]
    fn test_decode_overflow_is_reported() {
        // 2^64 as sixty-four leaf children
        let s = format!("({})", "()".repeat(64));
        assert!(matches!(matula_to_number(&s), Err(AppError::Overflow(_))));
    }

    #[test]
    fn test_deep_nesting_is_rejected_before_recursing() {
        let deep = format!("{}{}", "(".repeat(1_000_000), ")".repeat(1_000_000));
        assert!(matches!(matula_to_number(&deep), Err(AppError::Overflow(_))));
        assert!(matches!(canonicalize(&deep), Err(AppError::Overflow(_))));

        let limit = format!("{}{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert!(limit.parse::<MatulaTree>().is_ok());
        let past = format!("({})", limit);
        assert!(matches!(past.parse::<MatulaTree>(), Err(AppError::Overflow(_))));

        assert_eq!(matula_to_number("(((((((())))))))").unwrap(), 709);
    }
}

//! Core number-theoretic layer
//!
//! Primes, partitions, divisors and the Matula codec, plus the persona,
//! egregore and grammar views built on top of them. Every function here is
//! pure: results depend only on the arguments.

pub mod divisors;
pub mod egregore;
pub mod grammar;
pub mod matula;
pub mod partitions;
pub mod persona;
pub mod primes;
pub mod trees;

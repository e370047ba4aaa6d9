//! e9 - Prime Eigenvalue Function
//!
//! The nth prime is read as the eigenvalue of the ensemble structure of its
//! index n. This library computes that prime together with the index's
//! partitions, divisors, factorization and Matula rooted-tree encoding, and
//! classifies the index into a persona.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export the computational surface for easier use
pub use crate::core::{
    divisors::{Factorization, divisors, prime_factorization},
    egregore::{
        CompositeStructure, Ensemble, PrimeEgregore, Projection, ProjectionAnalysis,
        analyze_prime_projection, generate_egregores, prime_eigenvalue,
    },
    grammar::{GrammarAnalysis, Letter, analyze_cognitive_grammar},
    matula::{MatulaTree, canonicalize, matula_to_number, number_to_matula},
    partitions::{Partition, partition_count, partition_counts, partitions},
    persona::{IndexPersona, PersonaRow, PersonaType, generate_index_persona_table, get_index_persona},
    primes::{Primes, generate_prime_sequence, is_prime, nth_prime, prime_index},
    trees::{prime_tower, rooted_trees_count},
};
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

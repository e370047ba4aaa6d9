//! The prime egregore: an index together with its prime eigenvalue
//!
//! `encapsulate` gathers the ensemble derived from the index, `purify`
//! yields the prime, and `project` spreads the prime over its multiples.

use crate::core::divisors::{Factorization, divisors, prime_factorization};
use crate::core::matula::number_to_matula;
use crate::core::partitions::{Partition, partitions};
use crate::core::persona::{IndexPersona, get_index_persona};
use crate::core::primes::nth_prime;
use crate::utils::error::{AppResult, require_positive};
use serde::Serialize;
use tracing::debug;

/// Index `n` paired with `nth_prime(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimeEgregore {
    index: u64,
    prime: u64,
}

/// Shape summary of the index's factorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeStructure {
    pub is_prime: bool,
    pub is_composite: bool,
    pub factor_count: u32,
    pub unique_factors: usize,
    /// Prime factors with multiplicity, ascending.
    pub factors: Vec<u64>,
}

impl CompositeStructure {
    fn of(n: u64, factorization: &Factorization) -> Self {
        let is_prime = factorization.total() == 1 && factorization.exponent(n) == 1;
        Self {
            is_prime,
            is_composite: factorization.total() > 1,
            factor_count: factorization.total(),
            unique_factors: factorization.distinct(),
            factors: factorization.factors(),
        }
    }
}

/// Everything `encapsulate` derives from the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ensemble {
    pub index: u64,
    pub partitions: Vec<Partition>,
    pub divisors: Vec<u64>,
    pub prime_factorization: Factorization,
    pub composite_structure: CompositeStructure,
    pub matula: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub multiples_count: usize,
    pub multiples: Vec<u64>,
    pub projection_density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionAnalysis {
    pub prime: u64,
    pub index: u64,
    pub purified_value: u64,
    pub ensemble_structure: Ensemble,
    pub projection: Projection,
}

/// Build the egregore for index `n`.
pub fn prime_eigenvalue(n: u64) -> AppResult<PrimeEgregore> {
    require_positive(n, "index")?;
    let prime = nth_prime(n)?;
    debug!(index = n, prime, "prime eigenvalue");
    Ok(PrimeEgregore { index: n, prime })
}

impl PrimeEgregore {
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn prime(&self) -> u64 {
        self.prime
    }

    pub fn encapsulate(&self) -> AppResult<Ensemble> {
        let factorization = prime_factorization(self.index)?;
        Ok(Ensemble {
            index: self.index,
            partitions: partitions(self.index)?,
            divisors: divisors(self.index)?,
            composite_structure: CompositeStructure::of(self.index, &factorization),
            prime_factorization: factorization,
            matula: number_to_matula(self.index)?,
        })
    }

    pub fn purify(&self) -> u64 {
        self.prime
    }

    /// Multiples of the prime up to and including `limit`; empty when
    /// `limit` is below the prime.
    pub fn project(&self, limit: u64) -> Vec<u64> {
        (1..=limit / self.prime).map(|k| k * self.prime).collect()
    }

    pub fn persona(&self) -> AppResult<IndexPersona> {
        get_index_persona(self.index)
    }

    pub fn structure_notation(&self) -> AppResult<String> {
        number_to_matula(self.index)
    }
}

/// The egregores for indices `1..=count`.
pub fn generate_egregores(count: u64) -> AppResult<Vec<PrimeEgregore>> {
    Ok(crate::core::primes::generate_prime_sequence(count)?
        .into_iter()
        .map(|(index, prime)| PrimeEgregore { index, prime })
        .collect())
}

pub fn analyze_prime_projection(egregore: &PrimeEgregore, limit: u64) -> AppResult<ProjectionAnalysis> {
    let multiples = egregore.project(limit);
    let projection_density = if limit > 0 {
        multiples.len() as f64 / limit as f64
    } else {
        0.0
    };

    Ok(ProjectionAnalysis {
        prime: egregore.prime,
        index: egregore.index,
        purified_value: egregore.purify(),
        ensemble_structure: egregore.encapsulate()?,
        projection: Projection {
            multiples_count: multiples.len(),
            multiples,
            projection_density,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;

    #[test]
    fn test_prime_eigenvalue() {
        let eg = prime_eigenvalue(5).unwrap();
        assert_eq!(eg.index(), 5);
        assert_eq!(eg.prime(), 11);
        assert_eq!(prime_eigenvalue(1).unwrap().prime(), 2);
        assert!(matches!(prime_eigenvalue(0), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_encapsulate() {
        let ensemble = prime_eigenvalue(4).unwrap().encapsulate().unwrap();
        assert_eq!(ensemble.index, 4);
        assert_eq!(ensemble.partitions.len(), 5);
        assert_eq!(ensemble.divisors, vec![1, 2, 4]);
        assert_eq!(ensemble.prime_factorization.factors(), vec![2, 2]);
        assert_eq!(ensemble.matula, "(()())");
        assert!(ensemble.composite_structure.is_composite);
        assert!(!ensemble.composite_structure.is_prime);
    }

    #[test]
    fn test_composite_structure_of_prime_index() {
        let ensemble = prime_eigenvalue(7).unwrap().encapsulate().unwrap();
        assert!(ensemble.composite_structure.is_prime);
        assert!(!ensemble.composite_structure.is_composite);
        assert_eq!(ensemble.composite_structure.factor_count, 1);

        let unit = prime_eigenvalue(1).unwrap().encapsulate().unwrap();
        assert!(!unit.composite_structure.is_prime);
        assert!(!unit.composite_structure.is_composite);
        assert!(unit.composite_structure.factors.is_empty());
    }

    #[test]
    fn test_composite_structure_lists_factors() {
        let ensemble = prime_eigenvalue(12).unwrap().encapsulate().unwrap();
        let structure = &ensemble.composite_structure;
        assert_eq!(structure.factors, vec![2, 2, 3]);
        assert_eq!(structure.factor_count, 3);
        assert_eq!(structure.unique_factors, 2);

        let json = serde_json::to_value(structure).unwrap();
        assert_eq!(json["factors"], serde_json::json!([2, 2, 3]));
    }

    #[test]
    fn test_purify_returns_prime() {
        assert_eq!(prime_eigenvalue(3).unwrap().purify(), 5);
    }

    #[test]
    fn test_project() {
        let eg = prime_eigenvalue(6).unwrap();
        assert_eq!(eg.project(100), vec![13, 26, 39, 52, 65, 78, 91]);
        assert_eq!(eg.project(13), vec![13]);
        assert!(eg.project(12).is_empty());
        assert!(eg.project(0).is_empty());
    }

    #[test]
    fn test_analyze_prime_projection() {
        let eg = prime_eigenvalue(2).unwrap();
        let analysis = analyze_prime_projection(&eg, 20).unwrap();
        assert_eq!(analysis.prime, 3);
        assert_eq!(analysis.index, 2);
        assert_eq!(analysis.purified_value, 3);
        assert_eq!(analysis.projection.multiples, vec![3, 6, 9, 12, 15, 18]);
        assert_eq!(analysis.projection.multiples_count, 6);
        assert!((analysis.projection.projection_density - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_generate_egregores() {
        let egregores = generate_egregores(5).unwrap();
        assert_eq!(egregores.len(), 5);
        for (i, eg) in egregores.iter().enumerate() {
            assert_eq!(eg.index(), i as u64 + 1);
            assert_eq!(*eg, prime_eigenvalue(eg.index()).unwrap());
        }
    }

    #[test]
    fn test_egregore_persona() {
        let eg = prime_eigenvalue(6).unwrap();
        assert_eq!(eg.persona().unwrap().index, 6);
        assert_eq!(eg.structure_notation().unwrap(), "(()(()))");
    }
}

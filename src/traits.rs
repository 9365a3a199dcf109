//! Shared contracts for objectives and swarm optimizers.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::{GoldenEagle, MothFlame, SalpSwarm};

/// A scalar minimization objective over a real vector.
///
/// Implementations must be pure and safe to call concurrently; population
/// fitness is evaluated from parallel tasks. Lower values are better.
///
/// The trait is blanket-implemented for plain functions and closures, so
/// the benchmark library functions can be passed directly:
///
/// ```
/// use enjambre::{benchmarks, Objective};
///
/// let value = benchmarks::sphere.evaluate(&[1.0, 2.0]).unwrap();
/// assert!((value - 5.0).abs() < 1e-12);
/// ```
pub trait Objective: Sync {
    /// Evaluate the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for vectors the objective cannot
    /// accept (non-finite elements, too few coordinates). The error
    /// propagates out of the optimizer run that triggered it.
    fn evaluate(&self, x: &[f64]) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> Result<f64> + Sync,
{
    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        self(x)
    }
}

/// Uniform capability set shared by the three swarm algorithms.
///
/// Replaces per-algorithm downcasting in the comparison driver: the harness
/// holds `Box<dyn SwarmOptimizer>` values built from [`Algorithm`] variants.
pub trait SwarmOptimizer: Send {
    /// Run the full iteration budget and return the best vector found.
    ///
    /// The returned vector always lies within the optimizer's bounds.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Error::InvalidInput`] raised by the objective;
    /// the run is aborted, never silently recovered.
    fn optimize(&mut self, objective: &dyn Objective) -> Result<Vec<f64>>;

    /// Objective evaluations performed after initialization.
    ///
    /// Cumulative per instance and monotonically non-decreasing; the initial
    /// full-population evaluation is not counted.
    fn evaluation_count(&self) -> u64;
}

/// Closed set of available swarm algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Salp chain with a leader tracking the food source.
    SalpSwarm,
    /// Moths spiralling around a shrinking set of flames.
    MothFlame,
    /// Eagles balancing social attraction and random exploration.
    GoldenEagle,
}

impl Algorithm {
    /// All algorithms, in comparison-report order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::SalpSwarm,
        Algorithm::MothFlame,
        Algorithm::GoldenEagle,
    ];

    /// Stable display name used in reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::SalpSwarm => "SalpSwarm",
            Algorithm::MothFlame => "MothFlame",
            Algorithm::GoldenEagle => "GoldenEagle",
        }
    }

    /// Construct a fresh optimizer instance for this algorithm.
    ///
    /// Each instance owns an independent, entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a non-positive population size
    /// or dimension, or bounds of a different dimension.
    pub fn build(
        self,
        population_size: usize,
        dimension: usize,
        max_iterations: usize,
        bounds: Bounds,
    ) -> Result<Box<dyn SwarmOptimizer>> {
        Ok(match self {
            Algorithm::SalpSwarm => Box::new(SalpSwarm::new(
                population_size,
                dimension,
                max_iterations,
                bounds,
            )?),
            Algorithm::MothFlame => Box::new(MothFlame::new(
                population_size,
                dimension,
                max_iterations,
                bounds,
            )?),
            Algorithm::GoldenEagle => Box::new(GoldenEagle::new(
                population_size,
                dimension,
                max_iterations,
                bounds,
            )?),
        })
    }
}

/// Fail-fast validation of the shared optimizer configuration.
pub(crate) fn validate_config(
    population_size: usize,
    dimension: usize,
    bounds: &Bounds,
) -> Result<()> {
    if population_size == 0 {
        return Err(Error::invalid_config("population_size", 0, ">0"));
    }
    if dimension == 0 {
        return Err(Error::invalid_config("dimension", 0, ">0"));
    }
    if bounds.dimension() != dimension {
        return Err(Error::invalid_config(
            "bounds",
            bounds.dimension(),
            &format!("dimension {dimension}"),
        ));
    }
    Ok(())
}

/// Evaluate every individual of a population in parallel.
///
/// The incumbent reduction is deliberately left to the caller as a separate
/// sequential pass over the returned fitness vector, so the recorded best is
/// the true population minimum rather than a race-dependent approximation.
pub(crate) fn evaluate_population(
    objective: &dyn Objective,
    population: &[Vec<f64>],
) -> Result<Vec<f64>> {
    population
        .par_iter()
        .map(|individual| objective.evaluate(individual))
        .collect()
}

/// Index of the minimum fitness value.
pub(crate) fn best_index(fitness: &[f64]) -> usize {
    fitness
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map_or(0, |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks;

    #[test]
    fn test_algorithm_names_stable() {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["SalpSwarm", "MothFlame", "GoldenEagle"]);
    }

    #[test]
    fn test_build_rejects_zero_population() {
        let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
        for algorithm in Algorithm::ALL {
            assert!(algorithm.build(0, 2, 10, bounds.clone()).is_err());
        }
    }

    #[test]
    fn test_build_rejects_dimension_mismatch() {
        let bounds = Bounds::uniform(3, -1.0, 1.0).unwrap();
        for algorithm in Algorithm::ALL {
            assert!(algorithm.build(10, 2, 10, bounds.clone()).is_err());
        }
    }

    #[test]
    fn test_built_optimizers_return_in_bounds() {
        let bounds = Bounds::uniform(2, -1.5, 1.5).unwrap();
        for algorithm in Algorithm::ALL {
            let mut optimizer = algorithm.build(10, 2, 5, bounds.clone()).unwrap();
            let best = optimizer.optimize(&benchmarks::rastrigin).unwrap();
            assert!(bounds.contains(&best), "{} left bounds", algorithm.name());
        }
    }

    #[test]
    fn test_best_index_finds_minimum() {
        assert_eq!(best_index(&[3.0, 1.0, 2.0]), 1);
        assert_eq!(best_index(&[0.5]), 0);
    }

    #[test]
    fn test_evaluate_population_propagates_error() {
        let population = vec![vec![0.0, 0.0], vec![f64::NAN, 0.0]];
        let result = evaluate_population(&benchmarks::sphere, &population);
        assert!(result.is_err());
    }
}

//! Moth-Flame Optimization (MFO).
//!
//! A population-based metaheuristic modeled on the transverse orientation
//! of moths navigating around artificial lights.
//!
//! # Algorithm
//!
//! ```text
//! 1. Initialize moths uniformly within bounds
//! 2. Each iteration, the fitness-sorted swarm becomes the flame set
//! 3. Every moth spirals logarithmically toward its assigned flame
//! 4. The number of guiding flames shrinks linearly from N to 1
//! ```
//!
//! # References
//!
//! - Mirjalili (2015): "Moth-flame optimization algorithm: A novel
//!   nature-inspired heuristic paradigm"

use std::f64::consts::PI;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::Result;
use crate::traits::{best_index, evaluate_population, validate_config, Objective, SwarmOptimizer};

/// Moth-Flame optimizer.
///
/// # Example
///
/// ```
/// use enjambre::{benchmarks, Bounds, MothFlame, SwarmOptimizer};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let mut mfo = MothFlame::new(50, 2, 100, bounds).unwrap().with_seed(42);
/// let best = mfo.optimize(&benchmarks::sphere).unwrap();
/// assert!(benchmarks::sphere(&best).unwrap() < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MothFlame {
    population_size: usize,
    dimension: usize,
    max_iterations: usize,
    bounds: Bounds,
    /// Random seed for reproducibility
    #[serde(default)]
    seed: Option<u64>,

    #[serde(skip)]
    evaluations: u64,
}

/// Number of flames still guiding moths at iteration `t` of `t_max`,
/// decreasing linearly from the population size down to 1.
fn flame_count(population_size: usize, t: usize, t_max: usize) -> usize {
    let n = population_size as f64;
    (n - t as f64 * (n - 1.0) / t_max as f64).round() as usize
}

impl MothFlame {
    /// Create a Moth-Flame optimizer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] for a zero population size or
    /// dimension, or bounds whose dimension does not match.
    pub fn new(
        population_size: usize,
        dimension: usize,
        max_iterations: usize,
        bounds: Bounds,
    ) -> Result<Self> {
        validate_config(population_size, dimension, &bounds)?;
        Ok(Self {
            population_size,
            dimension,
            max_iterations,
            bounds,
            seed: None,
            evaluations: 0,
        })
    }

    /// Set random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configured population size.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Search space bounds.
    #[must_use]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Fitness-sorted copy of the swarm; ties keep their original order.
    fn sorted_flames(moths: &[Vec<f64>], fitness: &[f64]) -> Vec<Vec<f64>> {
        let mut order: Vec<usize> = (0..moths.len()).collect();
        order.sort_by(|&a, &b| {
            fitness[a]
                .partial_cmp(&fitness[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order.iter().map(|&i| moths[i].clone()).collect()
    }
}

impl SwarmOptimizer for MothFlame {
    fn optimize(&mut self, objective: &dyn Objective) -> Result<Vec<f64>> {
        let mut rng = self.make_rng();

        let mut moths: Vec<Vec<f64>> = (0..self.population_size)
            .map(|_| self.bounds.sample(&mut rng))
            .collect();
        let mut fitness = evaluate_population(objective, &moths)?;
        let mut incumbent = moths[best_index(&fitness)].clone();

        let t_max = self.max_iterations as f64;
        for iteration in 1..=self.max_iterations {
            let flames_alive = flame_count(self.population_size, iteration, self.max_iterations);

            // The sorted snapshot of the swarm becomes the new flame set
            let flames = Self::sorted_flames(&moths, &fitness);

            // Spiral shape parameter; kept as the literal source formula,
            // which walks from -1 - 1/T down to -2 over the run.
            let a = -1.0 + iteration as f64 * (-1.0 / t_max);

            for (i, moth) in moths.iter_mut().enumerate() {
                // Moths beyond the shrinking guide set follow the last flame
                let guide = &flames[if i < flames_alive { i } else { flames_alive - 1 }];
                for j in 0..self.dimension {
                    let distance = (guide[j] - moth[j]).abs();
                    let t = (a - 1.0) * rng.random::<f64>() + 1.0;
                    let position = distance * t.exp() * (2.0 * PI * t).cos() + guide[j];
                    moth[j] = self.bounds.clamp(j, position);
                }
            }

            fitness = evaluate_population(objective, &moths)?;
            self.evaluations += self.population_size as u64;

            incumbent = moths[best_index(&fitness)].clone();
        }

        Ok(incumbent)
    }

    fn evaluation_count(&self) -> u64 {
        self.evaluations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks;

    #[test]
    fn test_flame_count_endpoints() {
        assert_eq!(flame_count(50, 1, 100), 50);
        assert_eq!(flame_count(50, 100, 100), 1);
    }

    #[test]
    fn test_flame_count_matches_formula_and_shrinks() {
        let (n, t_max) = (50, 100);
        let mut previous = n;
        for t in 1..=t_max {
            let count = flame_count(n, t, t_max);
            let expected = (n as f64 - t as f64 * (n as f64 - 1.0) / t_max as f64).round() as usize;
            assert_eq!(count, expected);
            assert!(count >= 1);
            assert!(count <= previous, "flame count increased at t={t}");
            previous = count;
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn test_mfo_sphere_2d() {
        let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
        let mut mfo = MothFlame::new(50, 2, 100, bounds.clone())
            .unwrap()
            .with_seed(42);
        let best = mfo.optimize(&benchmarks::sphere).unwrap();
        assert!(bounds.contains(&best));
        assert!(benchmarks::sphere(&best).unwrap() < 1.0);
    }

    #[test]
    fn test_mfo_counts_post_init_evaluations() {
        let bounds = Bounds::uniform(3, -1.0, 1.0).unwrap();
        let mut mfo = MothFlame::new(12, 3, 30, bounds).unwrap().with_seed(5);
        let _ = mfo.optimize(&benchmarks::griewank).unwrap();
        assert_eq!(mfo.evaluation_count(), 12 * 30);
    }

    #[test]
    fn test_mfo_zero_iterations_returns_initial_best() {
        let bounds = Bounds::uniform(2, -3.0, 3.0).unwrap();
        let mut mfo = MothFlame::new(6, 2, 0, bounds.clone()).unwrap().with_seed(3);
        let best = mfo.optimize(&benchmarks::sphere).unwrap();
        assert!(bounds.contains(&best));
        assert_eq!(mfo.evaluation_count(), 0);
    }

    #[test]
    fn test_mfo_sorted_flames_stable() {
        let moths = vec![vec![1.0], vec![2.0], vec![3.0]];
        let fitness = vec![5.0, 5.0, 1.0];
        let flames = MothFlame::sorted_flames(&moths, &fitness);
        assert_eq!(flames, vec![vec![3.0], vec![1.0], vec![2.0]]);
    }

    #[test]
    fn test_mfo_rejects_bad_config() {
        let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
        assert!(MothFlame::new(0, 2, 10, bounds.clone()).is_err());
        assert!(MothFlame::new(10, 0, 10, bounds).is_err());
    }
}

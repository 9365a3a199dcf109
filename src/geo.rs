//! Golden Eagle Optimization (GEO).
//!
//! A population-based metaheuristic balancing social attraction toward the
//! best-known solution against random exploration of the box.
//!
//! # Algorithm
//!
//! ```text
//! 1. Initialize eagles uniformly within bounds
//! 2. Inertia w = 0.5·(1 - t/T) decays linearly over the run
//! 3. Candidate = x + w·r1·(best - x) + (1-w)·r2·width·(2r3 - 1)
//! 4. Greedy acceptance: an eagle only moves to a strictly better position
//! 5. The incumbent eagle itself is skipped for movement (elitism)
//! ```
//!
//! # References
//!
//! - Mohammadi-Balani et al. (2021): "Golden eagle optimizer: A
//!   nature-inspired metaheuristic algorithm"

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::Result;
use crate::traits::{best_index, evaluate_population, validate_config, Objective, SwarmOptimizer};

/// Golden Eagle optimizer.
///
/// # Example
///
/// ```
/// use enjambre::{benchmarks, Bounds, GoldenEagle, SwarmOptimizer};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let mut geo = GoldenEagle::new(50, 2, 100, bounds.clone()).unwrap().with_seed(42);
/// let best = geo.optimize(&benchmarks::sphere).unwrap();
/// assert!(bounds.contains(&best));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenEagle {
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

impl GoldenEagle {
    /// Create a Golden Eagle optimizer.
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
}

impl SwarmOptimizer for GoldenEagle {
    fn optimize(&mut self, objective: &dyn Objective) -> Result<Vec<f64>> {
        let mut rng = self.make_rng();

        let mut eagles: Vec<Vec<f64>> = (0..self.population_size)
            .map(|_| self.bounds.sample(&mut rng))
            .collect();
        let mut fitness = evaluate_population(objective, &eagles)?;

        let mut best_idx = best_index(&fitness);
        let mut best = eagles[best_idx].clone();
        let mut best_fitness = fitness[best_idx];

        let t_max = self.max_iterations as f64;
        for iteration in 0..self.max_iterations {
            let w = 0.5 * (1.0 - iteration as f64 / t_max);

            for i in 0..self.population_size {
                // The incumbent does not move; it can only be superseded
                if i == best_idx {
                    continue;
                }

                let mut candidate = Vec::with_capacity(self.dimension);
                for j in 0..self.dimension {
                    let r1: f64 = rng.random();
                    let r2: f64 = rng.random();
                    let r3: f64 = rng.random();

                    let social = r1 * (best[j] - eagles[i][j]);
                    let exploration = r2 * self.bounds.width(j) * (2.0 * r3 - 1.0);
                    let position = eagles[i][j] + w * social + (1.0 - w) * exploration;
                    candidate.push(self.bounds.clamp(j, position));
                }

                let candidate_fitness = objective.evaluate(&candidate)?;
                self.evaluations += 1;

                // Greedy per-individual acceptance
                if candidate_fitness < fitness[i] {
                    eagles[i] = candidate;
                    fitness[i] = candidate_fitness;

                    if candidate_fitness < best_fitness {
                        best = eagles[i].clone();
                        best_fitness = candidate_fitness;
                        best_idx = i;
                    }
                }
            }
        }

        Ok(best)
    }

    fn evaluation_count(&self) -> u64 {
        self.evaluations
    }
}

//! Salp Swarm Algorithm (SSA) optimizer.
//!
//! A population-based metaheuristic modeled on the chained drifting of
//! salps in the ocean.
//!
//! # Algorithm
//!
//! ```text
//! 1. Initialize the salp chain uniformly within bounds
//! 2. The leader oscillates around the food source (best-known solution),
//!    with amplitude c1 = 2·exp(-(4t/T)²) decaying over the run
//! 3. Each follower moves to the midpoint of itself and its predecessor
//! 4. Re-evaluate the chain and update the food source
//! 5. Every 20 iterations, re-randomize stagnant followers
//! ```
//!
//! # References
//!
//! - Mirjalili et al. (2017): "Salp Swarm Algorithm: A bio-inspired
//!   optimizer for engineering design problems"

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::Result;
use crate::traits::{best_index, evaluate_population, validate_config, Objective, SwarmOptimizer};

/// Salp Swarm optimizer.
///
/// # Example
///
/// ```
/// use enjambre::{benchmarks, Bounds, SalpSwarm, SwarmOptimizer};
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let mut ssa = SalpSwarm::new(50, 2, 100, bounds).unwrap().with_seed(42);
/// let best = ssa.optimize(&benchmarks::sphere).unwrap();
/// assert!(benchmarks::sphere(&best).unwrap() < 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalpSwarm {
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

impl SalpSwarm {
    /// Create a Salp Swarm optimizer.
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

impl SwarmOptimizer for SalpSwarm {
    fn optimize(&mut self, objective: &dyn Objective) -> Result<Vec<f64>> {
        let mut rng = self.make_rng();

        let mut salps: Vec<Vec<f64>> = (0..self.population_size)
            .map(|_| self.bounds.sample(&mut rng))
            .collect();
        let mut fitness = evaluate_population(objective, &salps)?;

        let initial_best = best_index(&fitness);
        let mut food = salps[initial_best].clone();
        let mut food_fitness = fitness[initial_best];

        let t_max = self.max_iterations as f64;
        for iteration in 0..self.max_iterations {
            let c1 = 2.0 * (-(4.0 * iteration as f64 / t_max).powi(2)).exp();

            // Leader oscillates around the food source
            for j in 0..self.dimension {
                let c2: f64 = rng.random();
                let c3: f64 = rng.random();
                let step = c1 * (self.bounds.width(j) * c2 + self.bounds.lower()[j]);
                let position = if c3 >= 0.5 { food[j] + step } else { food[j] - step };
                salps[0][j] = self.bounds.clamp(j, position);
            }

            // Followers move to pairwise midpoints along the chain. All
            // followers read the snapshot taken right after the leader
            // update, so no follower sees a neighbor updated in this step.
            let snapshot = salps.clone();
            for i in 1..self.population_size {
                for j in 0..self.dimension {
                    let midpoint = (snapshot[i][j] + snapshot[i - 1][j]) / 2.0;
                    salps[i][j] = self.bounds.clamp(j, midpoint);
                }
            }

            fitness = evaluate_population(objective, &salps)?;
            self.evaluations += self.population_size as u64;

            // Sequential reduction after the parallel evaluation pass
            let idx = best_index(&fitness);
            if fitness[idx] < food_fitness {
                food_fitness = fitness[idx];
                food = salps[idx].clone();
            }

            // Stagnation escape: occasionally scatter followers. The food
            // source itself is never reinitialized.
            if iteration % 20 == 0 {
                for salp in salps.iter_mut().skip(1) {
                    if rng.random::<f64>() < 0.1 {
                        *salp = self.bounds.sample(&mut rng);
                    }
                }
            }
        }

        Ok(food)
    }

    fn evaluation_count(&self) -> u64 {
        self.evaluations
    }
}

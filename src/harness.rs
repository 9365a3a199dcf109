//! Grid comparison harness.
//!
//! Drives every (benchmark × algorithm × population size × generations)
//! combination, repeats each cell for robustness, and reduces the samples
//! into per-cell statistics. Cells run independently on the rayon pool;
//! a failed cell is reported as an error without aborting its siblings.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::benchmarks::{all_benchmarks, BenchmarkInfo};
use crate::bounds::Bounds;
use crate::error::Result;
use crate::traits::Algorithm;

/// Header for [`CellSummary::csv_row`] output.
pub const CSV_HEADER: &str = "Optimizer,Benchmark,Population Size,Generations,\
Best Fitness,Average Fitness,StdDev,Eval Count";

/// A full comparison grid.
///
/// The default configuration reproduces the reference study: dimension 30,
/// bounds [-100, 100], populations {50, 100, 200, 500}, generation budgets
/// {100, 250, 500, 1000}, five repetitions per cell, all three algorithms
/// against the full benchmark battery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    /// Problem dimension shared by every cell
    pub dimension: usize,
    /// Lower bound applied to every coordinate
    pub lower: f64,
    /// Upper bound applied to every coordinate
    pub upper: f64,
    /// Population sizes to sweep
    pub population_sizes: Vec<usize>,
    /// Iteration budgets to sweep
    pub generations: Vec<usize>,
    /// Independent runs per cell
    pub repetitions: usize,
    /// Algorithms to compare
    pub algorithms: Vec<Algorithm>,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            dimension: 30,
            lower: -100.0,
            upper: 100.0,
            population_sizes: vec![50, 100, 200, 500],
            generations: vec![100, 250, 500, 1000],
            repetitions: 5,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

/// Aggregated statistics for one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellSummary {
    /// Algorithm name
    pub optimizer: String,
    /// Benchmark function name
    pub benchmark: String,
    /// Population size used
    pub population_size: usize,
    /// Iteration budget used
    pub generations: usize,
    /// Best fitness across repetitions
    pub best: f64,
    /// Mean fitness across repetitions
    pub average: f64,
    /// Population standard deviation of the fitness samples
    pub std_dev: f64,
    /// Summed evaluation counts across repetitions
    pub evaluations: u64,
}

impl CellSummary {
    /// Render as a CSV row matching [`CSV_HEADER`].
    #[must_use]
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.6},{:.6},{}",
            self.optimizer,
            self.benchmark,
            self.population_size,
            self.generations,
            self.best,
            self.average,
            self.std_dev,
            self.evaluations
        )
    }
}

impl Experiment {
    /// Number of grid cells the experiment will run.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        all_benchmarks().len()
            * self.algorithms.len()
            * self.population_sizes.len()
            * self.generations.len()
    }

    /// Run the whole grid on the rayon pool.
    ///
    /// Results come back in grid enumeration order regardless of which
    /// worker finished first. Per-cell failures are returned in place.
    #[must_use]
    pub fn run(&self) -> Vec<Result<CellSummary>> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for benchmark in all_benchmarks() {
            for &algorithm in &self.algorithms {
                for &population_size in &self.population_sizes {
                    for &generations in &self.generations {
                        cells.push((benchmark, algorithm, population_size, generations));
                    }
                }
            }
        }

        cells
            .into_par_iter()
            .map(|(benchmark, algorithm, population_size, generations)| {
                self.run_cell(&benchmark, algorithm, population_size, generations)
            })
            .collect()
    }

    /// Run one cell: `repetitions` independent optimizer instances, each
    /// with its own random state, reduced into a [`CellSummary`].
    pub fn run_cell(
        &self,
        benchmark: &BenchmarkInfo,
        algorithm: Algorithm,
        population_size: usize,
        generations: usize,
    ) -> Result<CellSummary> {
        let bounds = Bounds::uniform(self.dimension, self.lower, self.upper)?;
        let objective = benchmark.function;

        let mut fitnesses = Vec::with_capacity(self.repetitions);
        let mut evaluations = 0u64;
        for _ in 0..self.repetitions {
            let mut optimizer =
                algorithm.build(population_size, self.dimension, generations, bounds.clone())?;
            let best = optimizer.optimize(&objective)?;
            evaluations += optimizer.evaluation_count();
            fitnesses.push((benchmark.function)(&best)?);
        }

        let best = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
        let average = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
        let variance = fitnesses
            .iter()
            .map(|f| (f - average).powi(2))
            .sum::<f64>()
            / fitnesses.len() as f64;

        Ok(CellSummary {
            optimizer: algorithm.name().to_string(),
            benchmark: benchmark.name.to_string(),
            population_size,
            generations,
            best,
            average,
            std_dev: variance.sqrt(),
            evaluations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_experiment() -> Experiment {
        Experiment {
            dimension: 2,
            lower: -5.0,
            upper: 5.0,
            population_sizes: vec![10],
            generations: vec![20],
            repetitions: 2,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }

    #[test]
    fn test_cell_count() {
        let experiment = small_experiment();
        assert_eq!(experiment.cell_count(), 9 * 3);
    }

    #[test]
    fn test_run_produces_all_cells() {
        let experiment = small_experiment();
        let results = experiment.run();
        assert_eq!(results.len(), experiment.cell_count());
        for result in &results {
            let cell = result.as_ref().expect("cell should succeed");
            assert!(cell.best <= cell.average + 1e-12);
            assert!(cell.std_dev >= 0.0);
            assert!(cell.evaluations > 0);
        }
    }

    #[test]
    fn test_csv_row_shape() {
        let cell = CellSummary {
            optimizer: "SalpSwarm".to_string(),
            benchmark: "Sphere".to_string(),
            population_size: 50,
            generations: 100,
            best: 0.25,
            average: 0.5,
            std_dev: 0.1,
            evaluations: 25_000,
        };
        let row = cell.csv_row();
        assert_eq!(row.split(',').count(), CSV_HEADER.split(',').count());
        assert!(row.starts_with("SalpSwarm,Sphere,50,100,"));
        assert!(row.ends_with("25000"));
    }

    #[test]
    fn test_run_cell_statistics() {
        let experiment = small_experiment();
        let benchmark = all_benchmarks()
            .into_iter()
            .find(|b| b.name == "Sphere")
            .unwrap();
        let cell = experiment
            .run_cell(&benchmark, Algorithm::SalpSwarm, 10, 20)
            .unwrap();
        assert_eq!(cell.optimizer, "SalpSwarm");
        assert_eq!(cell.benchmark, "Sphere");
        // Two repetitions of a 10-salp swarm over 20 iterations
        assert_eq!(cell.evaluations, 2 * 10 * 20);
    }

    #[test]
    fn test_default_matches_reference_grid() {
        let experiment = Experiment::default();
        assert_eq!(experiment.dimension, 30);
        assert_eq!(experiment.repetitions, 5);
        assert_eq!(experiment.cell_count(), 9 * 3 * 4 * 4);
    }
}

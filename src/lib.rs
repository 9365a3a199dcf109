//! Enjambre: swarm-intelligence optimizers benchmarked against classic
//! test functions.
//!
//! Three population-based metaheuristics for box-constrained continuous
//! minimization - Salp Swarm, Moth-Flame, and Golden Eagle - together with
//! the benchmark function battery they are compared on and a grid harness
//! that reduces repeated runs into per-configuration statistics.
//!
//! # Quick Start
//!
//! ```
//! use enjambre::prelude::*;
//!
//! // Minimize the sphere function in 2D
//! let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
//! let mut ssa = SalpSwarm::new(50, 2, 100, bounds.clone()).unwrap().with_seed(42);
//! let best = ssa.optimize(&benchmarks::sphere).unwrap();
//!
//! assert!(bounds.contains(&best));
//! assert!(benchmarks::sphere(&best).unwrap() < 1.0);
//! ```
//!
//! # Modules
//!
//! - [`benchmarks`]: the objective function library (Ackley, Rastrigin, ...)
//! - [`harness`]: the grid comparison driver with CSV reporting
//! - [`error`]: crate error types
//!
//! Each optimizer owns its population and a private random source for the
//! duration of one `optimize` call; population fitness is evaluated on the
//! rayon pool, and independent runs parallelize freely on top of that.

pub mod benchmarks;
mod bounds;
pub mod error;
mod geo;
pub mod harness;
mod mfo;
mod ssa;
mod traits;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use geo::GoldenEagle;
pub use mfo::MothFlame;
pub use ssa::SalpSwarm;
pub use traits::{Algorithm, Objective, SwarmOptimizer};

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::benchmarks;
    pub use crate::{
        Algorithm, Bounds, Error, GoldenEagle, MothFlame, Objective, Result, SalpSwarm,
        SwarmOptimizer,
    };
}

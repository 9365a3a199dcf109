//! Box constraints for continuous search spaces.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Elementwise lower/upper limits every coordinate of a candidate must satisfy.
///
/// A `Bounds` value is validated once at construction and then shared
/// read-only across a run; optimizers clamp and sample against it but
/// never mutate it.
///
/// # Example
///
/// ```
/// use enjambre::Bounds;
///
/// let bounds = Bounds::uniform(3, -5.0, 5.0).unwrap();
/// assert_eq!(bounds.dimension(), 3);
/// assert!((bounds.clamp(0, 7.2) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Create bounds from per-coordinate limit vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the vectors are empty, have
    /// mismatched lengths, contain non-finite values, or violate
    /// `lower[i] <= upper[i]`.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.is_empty() {
            return Err(Error::invalid_config("bounds", "empty", "dimension >= 1"));
        }
        if lower.len() != upper.len() {
            return Err(Error::invalid_config(
                "bounds",
                format!("lower len {} vs upper len {}", lower.len(), upper.len()),
                "equal lengths",
            ));
        }
        for (j, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(Error::invalid_config(
                    "bounds",
                    format!("[{lo}, {hi}] at coordinate {j}"),
                    "finite limits",
                ));
            }
            if lo > hi {
                return Err(Error::invalid_config(
                    "bounds",
                    format!("[{lo}, {hi}] at coordinate {j}"),
                    "lower <= upper",
                ));
            }
        }
        Ok(Self { lower, upper })
    }

    /// Create a hypercube with the same limits in every coordinate.
    pub fn uniform(dimension: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![lower; dimension], vec![upper; dimension])
    }

    /// Number of coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    /// Lower limits.
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper limits.
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Width of the feasible interval in coordinate `j`.
    #[must_use]
    pub fn width(&self, j: usize) -> f64 {
        self.upper[j] - self.lower[j]
    }

    /// Clamp a value into the feasible interval of coordinate `j`.
    #[must_use]
    pub fn clamp(&self, j: usize, value: f64) -> f64 {
        value.clamp(self.lower[j], self.upper[j])
    }

    /// Sample a vector uniformly at random within the box.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| rng.random_range(lo..=hi))
            .collect()
    }

    /// Whether every coordinate of `x` lies within the box.
    #[must_use]
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.dimension()
            && x.iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&v, (&lo, &hi))| v >= lo && v <= hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_bounds() {
        let bounds = Bounds::uniform(4, -2.0, 2.0).unwrap();
        assert_eq!(bounds.dimension(), 4);
        assert!((bounds.width(2) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Bounds::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(Bounds::new(vec![0.0, 0.0], vec![1.0]).is_err());
    }

    #[test]
    fn test_rejects_inverted_limits() {
        assert!(Bounds::new(vec![0.0, 3.0], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_rejects_non_finite_limits() {
        assert!(Bounds::new(vec![f64::NEG_INFINITY], vec![1.0]).is_err());
        assert!(Bounds::new(vec![0.0], vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_degenerate_interval_allowed() {
        let bounds = Bounds::new(vec![1.0], vec![1.0]).unwrap();
        assert!((bounds.clamp(0, 5.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamp() {
        let bounds = Bounds::uniform(1, -1.0, 1.0).unwrap();
        assert!((bounds.clamp(0, 2.5) - 1.0).abs() < 1e-12);
        assert!((bounds.clamp(0, -2.5) + 1.0).abs() < 1e-12);
        assert!((bounds.clamp(0, 0.3) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_sample_within_box() {
        let bounds = Bounds::new(vec![-3.0, 0.0, 10.0], vec![-1.0, 0.5, 20.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let x = bounds.sample(&mut rng);
            assert!(bounds.contains(&x));
        }
    }

    #[test]
    fn test_contains_rejects_wrong_dimension() {
        let bounds = Bounds::uniform(2, -1.0, 1.0).unwrap();
        assert!(!bounds.contains(&[0.0]));
        assert!(!bounds.contains(&[0.0, 0.0, 0.0]));
    }
}

//! Benchmark functions for swarm optimizer evaluation.
//!
//! Classic non-convex minimization landscapes with known global minima,
//! used to compare convergence quality across algorithms. Every function
//! validates its input and rejects vectors containing NaN or infinite
//! values with [`Error::InvalidInput`].
//!
//! Reference: Jamil & Yang (2013) "A Literature Survey of Benchmark
//! Functions for Global Optimization Problems"

use std::f64::consts::PI;

use crate::error::{Error, Result};

fn check_finite(x: &[f64]) -> Result<()> {
    for (i, &xi) in x.iter().enumerate() {
        if !xi.is_finite() {
            return Err(Error::non_finite(i, xi));
        }
    }
    Ok(())
}

/// Ackley function with explicit shape parameters.
///
/// The conventional parameterization is `a=20`, `b=0.2`, `c=2π`; see
/// [`ackley`] for that default.
pub fn ackley_with(x: &[f64], a: f64, b: f64, c: f64) -> Result<f64> {
    check_finite(x)?;
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (c * xi).cos()).sum();
    Ok(-a * (-b * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + a + std::f64::consts::E)
}

/// Ackley function - Multimodal, non-separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-32, 32]^D
///
/// # Example
/// ```
/// use enjambre::benchmarks::ackley;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!(ackley(&x).unwrap().abs() < 1e-10);
/// ```
pub fn ackley(x: &[f64]) -> Result<f64> {
    ackley_with(x, 20.0, 0.2, 2.0 * PI)
}

/// Dixon-Price function - Unimodal, non-separable
///
/// Global minimum: f(x*) = 0 where `x_i` = 2^(-(2^i - 2) / 2^i)
/// Search domain: [-10, 10]^D, requires D >= 2
///
/// # Example
/// ```
/// use enjambre::benchmarks::dixon_price;
/// // dixon_price([0, 0]) = (0-1)^2 + 2*(0-0)^2 = 1
/// assert!((dixon_price(&[0.0, 0.0]).unwrap() - 1.0).abs() < 1e-10);
/// ```
pub fn dixon_price(x: &[f64]) -> Result<f64> {
    check_finite(x)?;
    if x.len() < 2 {
        return Err(Error::too_short(2, x.len()));
    }
    let term1 = (x[0] - 1.0).powi(2);
    let term2: f64 = x
        .windows(2)
        .enumerate()
        .map(|(i, w)| (i + 2) as f64 * (2.0 * w[1] * w[1] - w[0]).powi(2))
        .sum();
    Ok(term1 + term2)
}

/// Griewank function with an explicit scaling denominator (conventionally 4000).
pub fn griewank_with(x: &[f64], fr: f64) -> Result<f64> {
    check_finite(x)?;
    let sum: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / fr;
    let prod: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    Ok(sum - prod + 1.0)
}

/// Griewank function - Multimodal, non-separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-600, 600]^D
///
/// # Example
/// ```
/// use enjambre::benchmarks::griewank;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!(griewank(&x).unwrap().abs() < 1e-10);
/// ```
pub fn griewank(x: &[f64]) -> Result<f64> {
    griewank_with(x, 4000.0)
}

/// Perm function with an explicit beta parameter (conventionally 0.5).
pub fn perm_with(x: &[f64], b: f64) -> Result<f64> {
    check_finite(x)?;
    let n = x.len();
    // The average over k would otherwise divide by zero
    if n == 0 {
        return Err(Error::too_short(1, 0));
    }
    let mut result = 0.0;
    for k in 1..=n {
        let inner: f64 = (1..=n)
            .map(|j| {
                let term = (j as f64).powi(k as i32) + b;
                let ratio = x[j - 1].abs() / j as f64;
                term * (ratio.powi(k as i32) - 1.0)
            })
            .sum();
        result += inner * inner;
    }
    Ok(result / n as f64)
}

/// Perm function - Multimodal, non-separable
///
/// Global minimum: f(1, 2, ..., D) = 0 (any sign pattern, the function
/// takes |x_j|). Search domain is dimension-dependent, commonly [-D, D]^D.
///
/// # Example
/// ```
/// use enjambre::benchmarks::perm;
/// assert!(perm(&[1.0, 2.0, 3.0]).unwrap().abs() < 1e-8);
/// ```
pub fn perm(x: &[f64]) -> Result<f64> {
    perm_with(x, 0.5)
}

/// Rastrigin function - Multimodal, separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-5.12, 5.12]^D
/// Many local minima arranged in a regular lattice.
///
/// # Example
/// ```
/// use enjambre::benchmarks::rastrigin;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!(rastrigin(&x).unwrap().abs() < 1e-10);
/// ```
pub fn rastrigin(x: &[f64]) -> Result<f64> {
    check_finite(x)?;
    let n = x.len() as f64;
    Ok(10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>())
}

/// Rosenbrock function - Unimodal, non-separable
///
/// Global minimum: f(1, 1, ..., 1) = 0
/// Search domain: [-30, 30]^D, requires D >= 2
///
/// # Example
/// ```
/// use enjambre::benchmarks::rosenbrock;
/// let x = vec![1.0, 1.0, 1.0];
/// assert!(rosenbrock(&x).unwrap().abs() < 1e-10);
/// ```
pub fn rosenbrock(x: &[f64]) -> Result<f64> {
    check_finite(x)?;
    if x.len() < 2 {
        return Err(Error::too_short(2, x.len()));
    }
    Ok(x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum())
}

/// Schwefel function - Multimodal, separable
///
/// Global minimum: f(420.9687, ..., 420.9687) ≈ 0
/// Search domain: [-500, 500]^D
/// Deceptive: global minimum far from the next best local minima.
///
/// # Example
/// ```
/// use enjambre::benchmarks::schwefel;
/// let x = vec![420.9687, 420.9687];
/// assert!(schwefel(&x).unwrap().abs() < 0.01);
/// ```
pub fn schwefel(x: &[f64]) -> Result<f64> {
    check_finite(x)?;
    let n = x.len() as f64;
    Ok(418.9829 * n - x.iter().map(|xi| xi * xi.abs().sqrt().sin()).sum::<f64>())
}

/// Sphere function - Unimodal, separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-100, 100]^D
///
/// # Example
/// ```
/// use enjambre::benchmarks::sphere;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!(sphere(&x).unwrap().abs() < 1e-10);
/// ```
pub fn sphere(x: &[f64]) -> Result<f64> {
    check_finite(x)?;
    Ok(x.iter().map(|xi| xi * xi).sum())
}

/// Zakharov function - Unimodal, non-separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-5, 10]^D
///
/// # Example
/// ```
/// use enjambre::benchmarks::zakharov;
/// let x = vec![0.0, 0.0, 0.0];
/// assert!(zakharov(&x).unwrap().abs() < 1e-10);
/// ```
pub fn zakharov(x: &[f64]) -> Result<f64> {
    check_finite(x)?;
    let sum1: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum2: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| 0.5 * (i + 1) as f64 * xi)
        .sum();
    Ok(sum1 + sum2.powi(2) + sum2.powi(4))
}

/// Benchmark function metadata plus the callable itself.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkInfo {
    /// Stable function name used in comparison reports
    pub name: &'static str,
    /// The objective callable
    pub function: fn(&[f64]) -> Result<f64>,
    /// Is multimodal (multiple local minima)
    pub multimodal: bool,
    /// Is separable (can optimize each dimension independently)
    pub separable: bool,
    /// Global optimum value
    pub optimum: f64,
}

/// The full benchmark battery, in comparison-report order.
#[must_use]
pub fn all_benchmarks() -> Vec<BenchmarkInfo> {
    vec![
        BenchmarkInfo {
            name: "Ackley",
            function: ackley,
            multimodal: true,
            separable: false,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "DixonPrice",
            function: dixon_price,
            multimodal: false,
            separable: false,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "Griewank",
            function: griewank,
            multimodal: true,
            separable: false,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "Perm",
            function: perm,
            multimodal: true,
            separable: false,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "Rastrigin",
            function: rastrigin,
            multimodal: true,
            separable: true,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "Rosenbrock",
            function: rosenbrock,
            multimodal: false,
            separable: false,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "Schwefel",
            function: schwefel,
            multimodal: true,
            separable: true,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "Sphere",
            function: sphere,
            multimodal: false,
            separable: true,
            optimum: 0.0,
        },
        BenchmarkInfo {
            name: "Zakharov",
            function: zakharov,
            multimodal: false,
            separable: false,
            optimum: 0.0,
        },
    ]
}

#[cfg(test)]
#[path = "benchmarks_tests.rs"]
mod tests;

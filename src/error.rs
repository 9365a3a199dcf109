//! Error types for enjambre operations.

use std::fmt;

/// Main error type for enjambre operations.
///
/// # Examples
///
/// ```
/// use enjambre::error::Error;
///
/// let err = Error::InvalidInput {
///     message: "element 3 is NaN".to_string(),
/// };
/// assert!(err.to_string().contains("invalid input"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An objective function received an unusable input vector.
    InvalidInput {
        /// What was wrong with the vector
        message: String,
    },

    /// Invalid optimizer or bounds configuration.
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { message } => {
                write!(f, "invalid input: {message}")
            }
            Error::InvalidConfig {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "invalid configuration: {param} = {value}, expected {constraint}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an error for a non-finite element in an input vector.
    #[must_use]
    pub fn non_finite(index: usize, value: f64) -> Self {
        Self::InvalidInput {
            message: format!("element {index} is {value}, expected finite"),
        }
    }

    /// Create an error for an input vector that is too short.
    #[must_use]
    pub fn too_short(min: usize, actual: usize) -> Self {
        Self::InvalidInput {
            message: format!("need at least {min} elements, got {actual}"),
        }
    }

    /// Create a configuration error with descriptive context.
    #[must_use]
    pub fn invalid_config(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

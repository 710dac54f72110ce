//! Error types for Monte Carlo configuration.
//!
//! Configuration errors are raised when a [`MonteCarloConfig`](super::MonteCarloConfig)
//! is built and convert into [`PricingError`] so callers of the pricer see
//! a single error type.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::{MAX_GRID_POINTS, MAX_PATHS, MAX_STEPS};

/// Configuration error for Monte Carlo pricer.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Path grid larger than [`MAX_GRID_POINTS`] points.
    #[error(
        "Path grid {n_paths} x ({n_steps} + 1) exceeds {max} points",
        max = MAX_GRID_POINTS
    )]
    GridTooLarge {
        /// Requested path count.
        n_paths: usize,
        /// Requested step count.
        n_steps: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidPathCount(n) => PricingError::InvalidPathCount(n),
            ConfigError::InvalidStepCount(n) => PricingError::InvalidStepCount(n),
            ConfigError::GridTooLarge { n_paths, n_steps } => {
                PricingError::GridTooLarge { n_paths, n_steps }
            }
            ConfigError::InvalidParameter { name, .. } => PricingError::InvalidParameter {
                name,
                value: f64::NAN,
                reason: "must be specified",
            },
        }
    }
}

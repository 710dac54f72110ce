//! Error types for structured error handling.
//!
//! Every pricing entry point validates its inputs and reports failures
//! through [`PricingError`] before any computation starts. A pricer never
//! returns NaN or a clamped value in place of an error.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidParameter`: A scalar parameter violates its domain
/// - `InvalidPathCount`: Number of simulation paths is zero or too large
/// - `InvalidStepCount`: Number of time steps is zero or too large
/// - `GridTooLarge`: Path grid would exceed the point limit
/// - `InvalidOptionKind`: Option kind is neither call nor put
/// - `NonFinitePrice`: Valid inputs overflowed double precision
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionKind("straddle".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option kind 'straddle': expected 'call' or 'put'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A scalar parameter is outside its valid domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Path count outside the valid range.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range.
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// `n_paths * (n_steps + 1)` exceeds the simulation grid limit.
    #[error("Path grid of {n_paths} paths x {n_steps} steps exceeds the 100_000_000 point limit")]
    GridTooLarge {
        /// Requested path count
        n_paths: usize,
        /// Requested step count
        n_steps: usize,
    },

    /// Option kind not in {call, put}.
    #[error("Invalid option kind '{0}': expected 'call' or 'put'")]
    InvalidOptionKind(String),

    /// A price computed from in-domain inputs is NaN or infinite.
    #[error("Non-finite price {0}: inputs overflow double precision")]
    NonFinitePrice(f64),
}

impl PricingError {
    /// Shorthand for a parameter that must be strictly positive and finite.
    #[inline]
    pub fn not_positive(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason: "must be positive and finite",
        }
    }

    /// Returns `true` for parameter-domain failures (including path, step and grid sizes).
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(
            self,
            PricingError::InvalidOptionKind(_) | PricingError::NonFinitePrice(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::not_positive("volatility", 0.0);
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'volatility' = 0: must be positive and finite"
        );
    }

    #[test]
    fn test_invalid_counts_display() {
        let err = PricingError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = PricingError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));

        let err = PricingError::GridTooLarge {
            n_paths: 10_000_000,
            n_steps: 10_000,
        };
        assert!(err.to_string().contains("10000000 paths x 10000 steps"));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_option_kind_names_offending_value() {
        let err = PricingError::InvalidOptionKind("straddle".to_string());
        assert!(err.to_string().contains("straddle"));
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn test_error_categories_are_distinguishable() {
        assert!(PricingError::not_positive("maturity", 0.0).is_invalid_parameter());
        assert!(PricingError::InvalidPathCount(0).is_invalid_parameter());
        assert_ne!(
            PricingError::not_positive("volatility", 0.0),
            PricingError::not_positive("maturity", 0.0)
        );
    }

    #[test]
    fn test_non_finite_price_is_numerical_failure() {
        let err = PricingError::NonFinitePrice(f64::NEG_INFINITY);
        assert!(err.to_string().contains("Non-finite price -inf"));
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidStepCount(0);
        let _: &dyn std::error::Error = &err;
    }
}

//! Cross-validation of the Monte Carlo engine against the closed form.
//!
//! The Black-Scholes price is the exact expectation the simulation
//! estimates, so the gap between the two, measured in standard errors,
//! says whether a run is statistically consistent.

use pricer_core::types::{PricingError, PricingParams};
use pricer_models::analytical::black_scholes_price;

use crate::mc::{monte_carlo_price, MonteCarloConfig};

/// Most strikes a single ladder may hold.
pub const MAX_LADDER_STRIKES: usize = 1_000;

/// Closed-form and simulated prices of one contract side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelComparison {
    /// Strike of the compared contract.
    pub strike: f64,
    /// Black-Scholes price.
    pub closed_form: f64,
    /// Monte Carlo price.
    pub monte_carlo: f64,
    /// Standard error of the Monte Carlo price.
    pub std_error: f64,
}

impl ModelComparison {
    /// `|monte_carlo − closed_form|`.
    #[inline]
    pub fn abs_diff(&self) -> f64 {
        (self.monte_carlo - self.closed_form).abs()
    }

    /// `(monte_carlo − closed_form) / std_error`.
    ///
    /// 0 when the prices agree exactly and infinite (with the sign of the
    /// gap) when a non-zero gap has no standard error.
    pub fn z_score(&self) -> f64 {
        let gap = self.monte_carlo - self.closed_form;
        if gap == 0.0 {
            0.0
        } else if self.std_error == 0.0 {
            f64::INFINITY.copysign(gap)
        } else {
            gap / self.std_error
        }
    }

    /// Whether the gap is within `n_std_errors` standard errors.
    #[inline]
    pub fn is_within(&self, n_std_errors: f64) -> bool {
        self.z_score().abs() <= n_std_errors
    }
}

/// Prices `params` under both models.
///
/// # Errors
///
/// Invalid pricing parameters or an out-of-range configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, PricingParams};
/// use pricer_pricing::mc::MonteCarloConfig;
/// use pricer_pricing::verify::cross_validate;
///
/// let params = PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let config = MonteCarloConfig::builder().n_paths(20_000).n_steps(1).seed(42).build().unwrap();
///
/// let cmp = cross_validate(&params, &config).unwrap();
/// assert!(cmp.is_within(4.0));
/// ```
pub fn cross_validate(
    params: &PricingParams,
    config: &MonteCarloConfig,
) -> Result<ModelComparison, PricingError> {
    let closed_form = black_scholes_price(params)?;
    let simulated = monte_carlo_price(params, config)?;

    Ok(ModelComparison {
        strike: params.strike,
        closed_form,
        monte_carlo: simulated.price,
        std_error: simulated.std_error,
    })
}

/// Runs [`cross_validate`] at each strike, reusing the configured seed for
/// every strike.
///
/// # Errors
///
/// The first failing comparison, including a non-positive strike.
pub fn compare_strikes(
    params: &PricingParams,
    config: &MonteCarloConfig,
    strikes: &[f64],
) -> Result<Vec<ModelComparison>, PricingError> {
    strikes
        .iter()
        .map(|&strike| cross_validate(&params.with_strike(strike), config))
        .collect()
}

/// Strikes from `center − half_width` to `center + half_width` in
/// increments of `step`.
///
/// The upper end is included when it lies on the grid. Non-positive
/// `step` or negative `half_width` gives just `[center]`.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] naming `step` when the ladder would
/// hold more than [`MAX_LADDER_STRIKES`] strikes.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::verify::strike_ladder;
///
/// assert_eq!(
///     strike_ladder(160.0, 20.0, 10.0).unwrap(),
///     vec![140.0, 150.0, 160.0, 170.0, 180.0]
/// );
/// assert!(strike_ladder(160.0, 20.0, 1e-300).is_err());
/// ```
pub fn strike_ladder(center: f64, half_width: f64, step: f64) -> Result<Vec<f64>, PricingError> {
    if step.is_nan() || step <= 0.0 || half_width.is_nan() || half_width < 0.0 {
        return Ok(vec![center]);
    }

    // Tolerance absorbs round-off in half_width / step.
    let intervals = ((2.0 * half_width) / step + 1e-9).floor();
    if intervals.is_nan() || intervals >= MAX_LADDER_STRIKES as f64 {
        return Err(PricingError::InvalidParameter {
            name: "step",
            value: step,
            reason: "ladder would exceed 1000 strikes",
        });
    }

    let n = intervals as usize;
    let low = center - half_width;
    Ok((0..=n).map(|i| low + step * i as f64).collect())
}

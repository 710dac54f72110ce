//! Monte Carlo pricer for European options.
//!
//! Combines the path simulator with the payoff evaluator: simulate under
//! the risk-neutral drift, evaluate the payoff of each terminal price,
//! then discount the sample mean at the risk-free rate.

use pricer_core::types::params::finite_price;
use pricer_core::types::{PricingError, PricingParams};
use pricer_models::instruments::terminal_payoffs;

use super::config::MonteCarloConfig;
use super::paths::{simulate_gbm_paths, GbmParams, PathEnsemble};
use crate::rng::PricerRng;

/// Result of a Monte Carlo pricing run.
///
/// `paths` is exactly the ensemble whose payoffs produced `price`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// The simulated path ensemble.
    pub paths: PathEnsemble,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Number of paths behind the estimate.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.paths.n_paths()
    }
}

/// Monte Carlo pricing engine.
///
/// Holds only its configuration; every call builds its own generator, so a
/// pricer can be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, PricingParams};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let pricer = MonteCarloPricer::new(config).unwrap();
/// let params = PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
///
/// let result = pricer.price(&params).unwrap();
/// println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
/// assert_eq!(result.paths.shape(), (10_000, 253));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration error, converted to [`PricingError`], if
    /// the path or step count is out of range.
    pub fn new(config: MonteCarloConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices with a generator built from the configured seed.
    ///
    /// A fresh generator is built on every call, so repeated calls with a
    /// seeded configuration return identical results. Without a seed the
    /// generator draws from entropy.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidParameter`] when `params` fails validation,
    /// [`PricingError::NonFinitePrice`] when discounting overflows.
    pub fn price(&self, params: &PricingParams) -> Result<PricingResult, PricingError> {
        let mut rng = PricerRng::from_optional_seed(self.config.seed());
        self.price_with_rng(params, &mut rng)
    }

    /// Prices with a caller-supplied generator.
    ///
    /// The configured seed is ignored; the generator state advances by
    /// `n_paths × n_steps` normal draws.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidParameter`] when `params` fails validation,
    /// [`PricingError::NonFinitePrice`] when discounting overflows.
    pub fn price_with_rng(
        &self,
        params: &PricingParams,
        rng: &mut PricerRng,
    ) -> Result<PricingResult, PricingError> {
        params.validate()?;

        let paths = simulate_gbm_paths(
            &GbmParams::risk_neutral(params),
            self.config.n_paths(),
            self.config.n_steps(),
            rng,
        )?;

        evaluate(params, paths)
    }
}

/// Prices `params` by simulation with a one-off pricer.
///
/// # Errors
///
/// Invalid pricing parameters or an out-of-range configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, PricingParams};
/// use pricer_pricing::mc::{monte_carlo_price, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder().n_paths(1_000).n_steps(12).seed(7).build().unwrap();
/// let params = PricingParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put).unwrap();
///
/// let result = monte_carlo_price(&params, &config).unwrap();
/// assert!(result.price >= 0.0);
/// ```
pub fn monte_carlo_price(
    params: &PricingParams,
    config: &MonteCarloConfig,
) -> Result<PricingResult, PricingError> {
    MonteCarloPricer::new(*config)?.price(params)
}

/// Discounted mean payoff and its standard error over a finished ensemble.
///
/// Fails with [`PricingError::NonFinitePrice`] when the discounted mean or
/// its error overflows.
pub(crate) fn evaluate(
    params: &PricingParams,
    paths: PathEnsemble,
) -> Result<PricingResult, PricingError> {
    let payoffs = terminal_payoffs(params.kind, &paths.terminal_prices(), params.strike);
    let (mean, std_error) = sample_mean_and_error(&payoffs);
    let discount_factor = params.discount_factor();

    let price = finite_price(mean * discount_factor)?;
    let std_error = std_error * discount_factor;
    if !std_error.is_finite() {
        return Err(PricingError::NonFinitePrice(std_error));
    }

    Ok(PricingResult {
        price,
        std_error,
        paths,
    })
}

/// Sample mean and standard error (`n − 1` denominator); the error is 0
/// for a single sample.
fn sample_mean_and_error(samples: &[f64]) -> (f64, f64) {
    let n = samples.len();
    let mean = samples.iter().sum::<f64>() / n as f64;
    if n < 2 {
        return (mean, 0.0);
    }

    let variance = samples.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, (variance / n as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionKind;

    fn config(n_paths: usize, n_steps: usize, seed: u64) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(n_steps)
            .seed(seed)
            .build()
            .unwrap()
    }

    fn params(kind: OptionKind) -> PricingParams {
        PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, kind).unwrap()
    }

    #[test]
    fn test_sample_mean_and_error() {
        let (mean, se) = sample_mean_and_error(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(mean, 2.5);
        // s² = 5/3, se = sqrt(5/3 / 4)
        assert_relative_eq!(se, (5.0_f64 / 12.0).sqrt(), epsilon = 1e-15);

        assert_eq!(sample_mean_and_error(&[7.0]), (7.0, 0.0));
    }

    #[test]
    fn test_repeated_price_calls_are_identical() {
        let pricer = MonteCarloPricer::new(config(2_000, 20, 42)).unwrap();
        let first = pricer.price(&params(OptionKind::Call)).unwrap();
        let second = pricer.price(&params(OptionKind::Call)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_price_with_rng_matches_seeded_price() {
        let pricer = MonteCarloPricer::new(config(500, 10, 9)).unwrap();
        let mut rng = PricerRng::from_seed(9);
        assert_eq!(
            pricer.price(&params(OptionKind::Put)).unwrap(),
            pricer.price_with_rng(&params(OptionKind::Put), &mut rng).unwrap()
        );
    }

    #[test]
    fn test_price_matches_ensemble() {
        let p = params(OptionKind::Call);
        let result = monte_carlo_price(&p, &config(1_000, 5, 3)).unwrap();

        let payoffs = terminal_payoffs(p.kind, &result.paths.terminal_prices(), p.strike);
        let expected = payoffs.iter().sum::<f64>() / payoffs.len() as f64 * p.discount_factor();
        assert_relative_eq!(result.price, expected, max_relative = 1e-12);
        assert_eq!(result.n_paths(), 1_000);
    }

    #[test]
    fn test_single_path_has_zero_std_error() {
        let result = monte_carlo_price(&params(OptionKind::Call), &config(1, 4, 5)).unwrap();
        assert_eq!(result.std_error, 0.0);
        assert!(result.price >= 0.0);
    }

    #[test]
    fn test_confidence_intervals() {
        let result = monte_carlo_price(&params(OptionKind::Call), &config(1_000, 1, 11)).unwrap();
        assert_relative_eq!(result.confidence_95(), 1.96 * result.std_error);
        assert_relative_eq!(result.confidence_99(), 2.576 * result.std_error);
        assert!(result.confidence_99() > result.confidence_95());
    }

    #[test]
    fn test_overflowing_discount_is_an_error_not_zero() {
        // Valid inputs whose discount factor e^{1000} overflows
        let mut p = params(OptionKind::Call);
        p.maturity = 20_000.0;
        p.rate = -0.05;

        for kind in [OptionKind::Call, OptionKind::Put] {
            assert!(matches!(
                monte_carlo_price(&p.with_kind(kind), &config(100, 1, 1)),
                Err(PricingError::NonFinitePrice(_))
            ));
        }
    }

    #[test]
    fn test_rejects_invalid_params() {
        let pricer = MonteCarloPricer::new(config(10, 1, 1)).unwrap();
        let mut bad = params(OptionKind::Call);
        bad.volatility = 0.0;

        match pricer.price(&bad) {
            Err(PricingError::InvalidParameter { name, .. }) => assert_eq!(name, "volatility"),
            other => panic!("Expected volatility error, got {:?}", other),
        }
    }
}

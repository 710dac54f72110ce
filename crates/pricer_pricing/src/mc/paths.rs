//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! using the exact log-space transition, so the discretisation introduces no
//! bias at any step count.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price.
//!
//! # Draw Order
//!
//! Normals are drawn step-major: for each step `t = 1..=n_steps` the
//! generator produces `n_paths` variates, one per path in path order. A
//! generator rebuilt from the same seed therefore replays the same ensemble
//! for the same `(n_paths, n_steps)`.

use pricer_core::types::params::ensure_positive;
use pricer_core::types::{PricingError, PricingParams};

use super::config::{grid_within_limit, MAX_PATHS, MAX_STEPS};
use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// The GBM model assumes asset prices follow:
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// where:
/// - S is the spot price
/// - μ is the drift (the risk-free rate under the risk-neutral measure)
/// - σ is the volatility
/// - W is a Wiener process
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams {
///     spot: 100.0,
///     drift: 0.05,
///     volatility: 0.2,
///     maturity: 1.0,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Drift (μ) - annualised.
    pub drift: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Simulation horizon (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            drift,
            volatility,
            maturity,
        }
    }

    /// Risk-neutral dynamics for `params`: drift equals the risk-free rate.
    #[inline]
    pub fn risk_neutral(params: &PricingParams) -> Self {
        Self::new(params.spot, params.rate, params.volatility, params.maturity)
    }

    /// Validates the parameters.
    ///
    /// Zero volatility is accepted and yields a deterministic curve.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidParameter`] for a non-positive or non-finite
    /// spot or maturity, a negative or non-finite volatility, or a
    /// non-finite drift.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("maturity", self.maturity)?;
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(PricingError::InvalidParameter {
                name: "volatility",
                value: self.volatility,
                reason: "must be non-negative and finite",
            });
        }
        if !self.drift.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "drift",
                value: self.drift,
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// A simulated path ensemble of shape `(n_paths, n_steps + 1)`.
///
/// Column 0 holds the initial spot on every row and column `n_steps` holds
/// the terminal prices. The ensemble owns its data; the simulator keeps no
/// reference to it.
///
/// Deserialisation re-checks the shape, so a decoded ensemble upholds the
/// same invariants as a simulated one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEnsemble"))]
pub struct PathEnsemble {
    n_paths: usize,
    n_steps: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEnsemble {
    n_paths: usize,
    n_steps: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEnsemble> for PathEnsemble {
    type Error = PricingError;

    fn try_from(raw: RawEnsemble) -> Result<Self, Self::Error> {
        check_grid(raw.n_paths, raw.n_steps)?;
        if raw.data.len() != raw.n_paths * (raw.n_steps + 1) {
            return Err(PricingError::InvalidParameter {
                name: "data",
                value: raw.data.len() as f64,
                reason: "length must equal n_paths * (n_steps + 1)",
            });
        }
        Ok(Self {
            n_paths: raw.n_paths,
            n_steps: raw.n_steps,
            data: raw.data,
        })
    }
}

/// Path and step counts each in range, and the grid within its point limit.
fn check_grid(n_paths: usize, n_steps: usize) -> Result<(), PricingError> {
    if n_paths == 0 || n_paths > MAX_PATHS {
        return Err(PricingError::InvalidPathCount(n_paths));
    }
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(PricingError::InvalidStepCount(n_steps));
    }
    if !grid_within_limit(n_paths, n_steps) {
        return Err(PricingError::GridTooLarge { n_paths, n_steps });
    }
    Ok(())
}

impl PathEnsemble {
    /// Number of simulated paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps; each row has `n_steps + 1` entries.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// `(rows, columns)` of the grid.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_paths, self.n_steps + 1)
    }

    /// Row `index`, or `None` when out of range.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        let width = self.n_steps + 1;
        let start = index.checked_mul(width)?;
        self.data.get(start..start.checked_add(width)?)
    }

    /// Iterates over rows in path order.
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_steps + 1)
    }

    /// Column `step` across all paths, or `None` when `step > n_steps`.
    pub fn column(&self, step: usize) -> Option<Vec<f64>> {
        (step <= self.n_steps).then(|| self.paths().map(|row| row[step]).collect())
    }

    /// The terminal column.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths().map(|row| row[self.n_steps]).collect()
    }

    /// Row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the grid into one `Vec` per path.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.paths().map(<[f64]>::to_vec).collect()
    }

    /// Stacks batches sharing one step count, in the order given.
    pub(crate) fn stack(n_steps: usize, batches: Vec<PathEnsemble>) -> Self {
        let n_paths = batches.iter().map(|b| b.n_paths).sum();
        let mut data = Vec::with_capacity(n_paths * (n_steps + 1));
        for batch in batches {
            debug_assert_eq!(batch.n_steps, n_steps);
            data.extend_from_slice(&batch.data);
        }
        Self {
            n_paths,
            n_steps,
            data,
        }
    }
}

/// Simulates `n_paths` GBM trajectories over `n_steps` equal steps.
///
/// Uses the exact log-space transition:
/// ```text
/// S(t+dt) = S(t) × exp((μ - 0.5σ²)dt + σ√dt × Z)
/// ```
///
/// # Algorithm
///
/// 1. Precompute `drift_dt = (μ - 0.5σ²)dt` and `vol_sqrt_dt = σ√dt`
/// 2. For each path, set S[0] = spot
/// 3. For each step, draw one normal per path and set
///    S[t] = S[t-1] × exp(drift_dt + vol_sqrt_dt × Z)
///
/// # Errors
///
/// - [`PricingError::InvalidPathCount`] when `n_paths` is 0 or above the maximum
/// - [`PricingError::InvalidStepCount`] when `n_steps` is 0 or above the maximum
/// - [`PricingError::GridTooLarge`] when `n_paths * (n_steps + 1)` exceeds
///   [`MAX_GRID_POINTS`](super::config::MAX_GRID_POINTS)
/// - [`PricingError::InvalidParameter`] from [`GbmParams::validate`]
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{simulate_gbm_paths, GbmParams};
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let ensemble = simulate_gbm_paths(&GbmParams::default(), 4, 10, &mut rng).unwrap();
///
/// assert_eq!(ensemble.shape(), (4, 11));
/// assert!(ensemble.paths().all(|row| row[0] == 100.0));
/// ```
pub fn simulate_gbm_paths(
    params: &GbmParams,
    n_paths: usize,
    n_steps: usize,
    rng: &mut PricerRng,
) -> Result<PathEnsemble, PricingError> {
    check_grid(n_paths, n_steps)?;
    params.validate()?;

    let dt = params.maturity / n_steps as f64;
    let drift_dt = (params.drift - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let width = n_steps + 1;
    let mut data = vec![0.0; n_paths * width];
    let mut randoms = vec![0.0; n_paths];

    for row in data.chunks_exact_mut(width) {
        row[0] = params.spot;
    }

    for step in 1..=n_steps {
        rng.fill_normal(&mut randoms);
        for (row, &z) in data.chunks_exact_mut(width).zip(&randoms) {
            row[step] = row[step - 1] * (drift_dt + vol_sqrt_dt * z).exp();
        }
    }

    Ok(PathEnsemble {
        n_paths,
        n_steps,
        data,
    })
}

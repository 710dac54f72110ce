//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::params::{ensure_positive, finite_price};
use pricer_core::types::{OptionKind, PricingError, PricingParams};

/// Black-Scholes model for European option pricing.
///
/// Holds the model parameters (spot, rate, volatility); strike and expiry
/// are supplied per price so one model can price a strip of contracts.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, finite)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming `spot`, `rate` or `volatility`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        ensure_positive("spot", spot)?;
        ensure_positive("volatility", volatility)?;
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: rate,
                reason: "must be finite",
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds the model from shared pricing parameters.
    pub fn from_params(params: &PricingParams) -> Result<Self, PricingError> {
        Self::new(params.spot, params.rate, params.volatility)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// `strike` and `expiry` must be positive; the denominator is then
    /// strictly positive because σ > 0 is enforced at construction.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// Floored at zero: in deep out-of-the-money cases both terms are tiny
    /// and their difference can round to a negative ulp. A non-finite value
    /// is returned unchanged.
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        floor_finite(self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2))
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        floor_finite(strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1))
    }

    /// Prices a call or put after validating `strike` and `expiry`.
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` if `strike` or `expiry` is not positive
    /// - `PricingError::NonFinitePrice` if the inputs overflow double precision
    pub fn price(&self, kind: OptionKind, strike: f64, expiry: f64) -> Result<f64, PricingError> {
        ensure_positive("strike", strike)?;
        ensure_positive("maturity", expiry)?;

        finite_price(match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        })
    }
}

#[inline]
fn floor_finite(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        value
    }
}

/// Closed-form Black-Scholes price for the given parameters.
///
/// Validates `params` independently of any other pricer.
///
/// # Errors
/// `PricingError::InvalidParameter` for any out-of-domain field.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, PricingParams};
/// use pricer_models::analytical::black_scholes_price;
///
/// let params = PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let price = black_scholes_price(&params).unwrap();
/// assert!((price - 10.969).abs() < 1e-3);
/// ```
pub fn black_scholes_price(params: &PricingParams) -> Result<f64, PricingError> {
    params.validate()?;
    let model = BlackScholes::from_params(params)?;
    model.price(params.kind, params.strike, params.maturity)
}

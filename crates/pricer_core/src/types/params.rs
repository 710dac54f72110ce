//! Pricing parameters shared by the closed-form and Monte Carlo pricers.
//!
//! Both pricers accept the same [`PricingParams`], so a caller can price the
//! same contract under either model and compare the outputs directly.

use super::error::PricingError;
use super::option::OptionKind;

/// Contract and market parameters for a European option.
///
/// Fields are public for ergonomic construction; every pricer calls
/// [`validate`](Self::validate) before computing, so an invalid value is
/// always reported as an error rather than propagated into `ln`, `sqrt` or
/// a division.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, PricingParams};
///
/// let params = PricingParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// assert_eq!(params.discount_factor(), (-0.05_f64).exp());
///
/// // Zero volatility is rejected
/// assert!(PricingParams::new(100.0, 100.0, 1.0, 0.05, 0.0, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingParams {
    /// Initial spot price (S₀), strictly positive.
    pub spot: f64,
    /// Strike price (K), strictly positive.
    pub strike: f64,
    /// Time to maturity in years (T), strictly positive.
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r); may be zero or negative.
    pub rate: f64,
    /// Annualised volatility (σ), strictly positive.
    pub volatility: f64,
    /// Call or put.
    pub kind: OptionKind,
}

impl PricingParams {
    /// Creates validated pricing parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    /// - `spot`, `strike`, `maturity`, `volatility` not strictly positive or not finite
    /// - `rate` not finite
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("maturity", self.maturity)?;
        ensure_positive("volatility", self.volatility)?;
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: self.rate,
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Present-value discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different option kind.
    #[inline]
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }
}

/// Rejects zero, negative, NaN and infinite values.
#[inline]
pub fn ensure_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::not_positive(name, value))
    }
}

/// Floors a finite price at zero; NaN or an infinity is an error.
///
/// # Examples
/// ```
/// use pricer_core::types::params::finite_price;
///
/// assert_eq!(finite_price(-1e-17).unwrap(), 0.0);
/// assert!(finite_price(f64::NAN).is_err());
/// ```
#[inline]
pub fn finite_price(value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value.max(0.0))
    } else {
        Err(PricingError::NonFinitePrice(value))
    }
}

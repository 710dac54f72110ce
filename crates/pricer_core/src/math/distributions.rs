//! Standard normal cumulative distribution function.
//!
//! The CDF is evaluated through the complementary error function rather than
//! `1 - erf`, so both tails keep full relative precision instead of
//! cancelling to zero for large `|x|`.

use libm::erfc;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Double precision across the real line: `erfc` is the fdlibm rational
/// approximation, accurate to within one ulp, including deep tails where
/// Φ(x) underflows only below about x = -37.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-10.0) > 0.0);
/// assert!(norm_cdf(10.0) <= 1.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

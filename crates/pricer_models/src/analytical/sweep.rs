//! Closed-form price as a function of volatility.
//!
//! Re-prices a contract across a volatility grid while holding every other
//! parameter fixed. Useful for showing how option value grows with σ and
//! for sanity-checking that a Monte Carlo estimate sits on the curve.

use pricer_core::types::{PricingError, PricingParams};

use super::black_scholes::black_scholes_price;

/// One point on a price-versus-volatility curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolatilityPoint {
    /// Volatility used for this point.
    pub volatility: f64,
    /// Closed-form price at that volatility.
    pub price: f64,
}

/// Prices `params` at every volatility in `volatilities`.
///
/// The volatility stored in `params` is ignored; each grid value replaces it
/// and is validated like any other input.
///
/// # Errors
/// The first invalid parameter encountered, including a non-positive grid
/// volatility.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, PricingParams};
/// use pricer_models::analytical::{linspace, volatility_sweep};
///
/// let params = PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let curve = volatility_sweep(&params, &linspace(0.01, 1.0, 50)).unwrap();
/// assert_eq!(curve.len(), 50);
/// assert!(curve.windows(2).all(|w| w[1].price > w[0].price));
/// ```
pub fn volatility_sweep(
    params: &PricingParams,
    volatilities: &[f64],
) -> Result<Vec<VolatilityPoint>, PricingError> {
    volatilities
        .iter()
        .map(|&volatility| {
            let price = black_scholes_price(&params.with_volatility(volatility))?;
            Ok(VolatilityPoint { volatility, price })
        })
        .collect()
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// Returns `[start]` for `n == 1` and an empty vector for `n == 0`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionKind;

    fn params() -> PricingParams {
        PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Put).unwrap()
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.01, 1.0, 50);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 0.01);
        assert_eq!(grid[49], 1.0);
        assert_relative_eq!(grid[1] - grid[0], 0.99 / 49.0, epsilon = 1e-15);
    }

    #[test]
    fn test_linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
    }

    #[test]
    fn test_sweep_matches_point_prices() {
        let curve = volatility_sweep(&params(), &[0.1, 0.2, 0.3]).unwrap();
        assert_relative_eq!(curve[0].price, 7.187_308_617_804_405, epsilon = 1e-9);
        assert_relative_eq!(curve[1].price, 13.165_874_749_539_313, epsilon = 1e-9);
        assert_relative_eq!(curve[2].price, 19.135_617_528_635_095, epsilon = 1e-9);
    }

    #[test]
    fn test_sweep_price_increases_with_volatility() {
        let curve = volatility_sweep(&params(), &linspace(0.05, 1.0, 20)).unwrap();
        for pair in curve.windows(2) {
            assert!(pair[1].price > pair[0].price);
        }
    }

    #[test]
    fn test_sweep_rejects_zero_volatility() {
        match volatility_sweep(&params(), &[0.2, 0.0]) {
            Err(PricingError::InvalidParameter { name, .. }) => assert_eq!(name, "volatility"),
            other => panic!("Expected volatility error, got {:?}", other),
        }
    }
}

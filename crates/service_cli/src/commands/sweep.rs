//! Sweep command implementation
//!
//! Closed-form price across an evenly spaced volatility grid.

use pricer_core::types::PricingParams;
use pricer_models::analytical::{linspace, volatility_sweep, VolatilityPoint};
use tracing::info;

use super::{print_json, render_table};
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Price `params` at `points` volatilities from `vol_min` to `vol_max`
pub fn sweep_points(
    params: &PricingParams,
    vol_min: f64,
    vol_max: f64,
    points: usize,
) -> Result<Vec<VolatilityPoint>> {
    if points == 0 {
        return Err(CliError::InvalidArgument(
            "points must be at least 1".to_string(),
        ));
    }
    if vol_min > vol_max {
        return Err(CliError::InvalidArgument(format!(
            "vol-min {} exceeds vol-max {}",
            vol_min, vol_max
        )));
    }

    Ok(volatility_sweep(params, &linspace(vol_min, vol_max, points))?)
}

/// Run the sweep command
pub fn run(
    params: &PricingParams,
    vol_min: f64,
    vol_max: f64,
    points: usize,
    config: &CliConfig,
) -> Result<()> {
    info!(vol_min, vol_max, points, kind = %params.kind, "Starting volatility sweep");

    let curve = sweep_points(params, vol_min, vol_max, points)?;

    match config.format {
        OutputFormat::Json => print_json(&curve)?,
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = curve
                .iter()
                .map(|p| vec![format!("{:.4}", p.volatility), format!("{:.4}", p.price)])
                .collect();
            print!("{}", render_table(&["Volatility", "Price"], &cells));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionKind;

    fn params() -> PricingParams {
        PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap()
    }

    #[test]
    fn test_sweep_grid() {
        let curve = sweep_points(&params(), 0.1, 0.5, 5).unwrap();
        assert_eq!(curve.len(), 5);
        assert_eq!(curve[0].volatility, 0.1);
        assert_eq!(curve[4].volatility, 0.5);
        assert!(curve.windows(2).all(|w| w[1].price > w[0].price));
    }

    #[test]
    fn test_sweep_rejects_bad_grid() {
        assert!(matches!(
            sweep_points(&params(), 0.1, 0.5, 0),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            sweep_points(&params(), 0.6, 0.5, 3),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            sweep_points(&params(), 0.0, 0.5, 3),
            Err(CliError::Pricing(_))
        ));
    }
}

//! Compare command implementation
//!
//! Prices a strike ladder under both models and reports how far the Monte
//! Carlo estimate sits from the closed form.

use pricer_core::types::PricingParams;
use pricer_pricing::verify::{compare_strikes, strike_ladder, ModelComparison};
use serde::Serialize;
use tracing::{info, warn};

use super::price::monte_carlo_config;
use super::{print_json, render_table};
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Comparisons beyond this many standard errors are flagged.
const Z_WARN: f64 = 3.0;

/// One output row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub strike: f64,
    pub closed_form: f64,
    pub monte_carlo: f64,
    pub std_error: f64,
    pub abs_diff: f64,
    pub z_score: f64,
}

impl From<ModelComparison> for ComparisonRow {
    fn from(cmp: ModelComparison) -> Self {
        Self {
            strike: cmp.strike,
            closed_form: cmp.closed_form,
            monte_carlo: cmp.monte_carlo,
            std_error: cmp.std_error,
            abs_diff: cmp.abs_diff(),
            z_score: cmp.z_score(),
        }
    }
}

/// Compare both models across `strike ± width` in increments of `step`
pub fn comparison_rows(
    params: &PricingParams,
    width: f64,
    step: f64,
    config: &CliConfig,
) -> Result<Vec<ComparisonRow>> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if !(width >= 0.0 && width.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "width must be non-negative, got {}",
            width
        )));
    }

    let strikes = strike_ladder(params.strike, width, step)?;
    let mc_config = monte_carlo_config(config)?;
    let rows: Vec<ComparisonRow> = compare_strikes(params, &mc_config, &strikes)?
        .into_iter()
        .map(ComparisonRow::from)
        .collect();

    for row in rows.iter().filter(|r| r.z_score.abs() > Z_WARN) {
        warn!(
            strike = row.strike,
            z_score = row.z_score,
            "Monte Carlo estimate far from closed form"
        );
    }
    Ok(rows)
}

/// Run the compare command
pub fn run(params: &PricingParams, width: f64, step: f64, config: &CliConfig) -> Result<()> {
    info!(
        center = params.strike,
        width,
        step,
        n_paths = config.paths,
        n_steps = config.steps,
        "Starting strike comparison"
    );

    let rows = comparison_rows(params, width, step, config)?;

    match config.format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        format!("{:.2}", r.strike),
                        format!("{:.4}", r.closed_form),
                        format!("{:.4}", r.monte_carlo),
                        format!("{:.4}", r.std_error),
                        format!("{:.4}", r.abs_diff),
                        format!("{:+.2}", r.z_score),
                    ]
                })
                .collect();
            print!(
                "{}",
                render_table(
                    &["Strike", "Black-Scholes", "Monte Carlo", "Std error", "|Diff|", "z"],
                    &cells
                )
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::{OptionKind, PricingError};

    fn params() -> PricingParams {
        PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Put).unwrap()
    }

    fn small_config() -> CliConfig {
        CliConfig {
            paths: 5_000,
            steps: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_cover_ladder() {
        let rows = comparison_rows(&params(), 10.0, 5.0, &small_config()).unwrap();
        let strikes: Vec<f64> = rows.iter().map(|r| r.strike).collect();
        assert_eq!(strikes, vec![150.0, 155.0, 160.0, 165.0, 170.0]);

        for row in &rows {
            assert!(row.z_score.abs() < 5.0, "strike {}: z = {}", row.strike, row.z_score);
            assert_eq!(row.abs_diff, (row.monte_carlo - row.closed_form).abs());
        }
    }

    #[test]
    fn test_rejects_bad_ladder() {
        assert!(matches!(
            comparison_rows(&params(), 10.0, 0.0, &small_config()),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            comparison_rows(&params(), -1.0, 5.0, &small_config()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_ladder_with_too_many_strikes() {
        assert!(matches!(
            comparison_rows(&params(), 20.0, 1e-300, &small_config()),
            Err(CliError::Pricing(PricingError::InvalidParameter { name: "step", .. }))
        ));
    }

    #[test]
    fn test_ladder_below_zero_is_pricing_error() {
        assert!(matches!(
            comparison_rows(&params(), 200.0, 50.0, &small_config()),
            Err(CliError::Pricing(_))
        ));
    }
}

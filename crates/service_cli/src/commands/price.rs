//! Price command implementation
//!
//! Prices one option with the closed form, the Monte Carlo engine, or both.

use std::time::Instant;

use clap::ValueEnum;
use pricer_core::types::{PricingError, PricingParams};
use pricer_models::analytical::black_scholes_price;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use serde::Serialize;
use tracing::info;

use super::{print_json, render_table};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Which pricer(s) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Model {
    /// Black-Scholes formula only
    ClosedForm,
    /// Monte Carlo simulation only
    MonteCarlo,
    /// Both, with their difference
    Both,
}

/// Simulation side of a price report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloReport {
    pub price: f64,
    pub std_error: f64,
    pub confidence_95: f64,
    pub n_paths: usize,
    pub n_steps: usize,
    pub seed: Option<u64>,
    pub batches: usize,
}

/// Everything the price command prints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    pub params: PricingParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_form: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monte_carlo: Option<MonteCarloReport>,
}

impl PriceReport {
    /// Monte Carlo minus closed form, when both ran
    pub fn difference(&self) -> Option<f64> {
        Some(self.monte_carlo.as_ref()?.price - self.closed_form?)
    }
}

/// Build the simulation config from resolved CLI settings
pub(crate) fn monte_carlo_config(config: &CliConfig) -> Result<MonteCarloConfig> {
    MonteCarloConfig::builder()
        .n_paths(config.paths)
        .n_steps(config.steps)
        .maybe_seed(config.seed)
        .build()
        .map_err(|e| PricingError::from(e).into())
}

/// Run the requested model(s)
pub fn price_report(params: &PricingParams, model: Model, config: &CliConfig) -> Result<PriceReport> {
    let closed_form = match model {
        Model::MonteCarlo => None,
        Model::ClosedForm | Model::Both => Some(black_scholes_price(params)?),
    };

    let monte_carlo = match model {
        Model::ClosedForm => None,
        Model::MonteCarlo | Model::Both => {
            let pricer = MonteCarloPricer::new(monte_carlo_config(config)?)?;
            let start = Instant::now();
            let result = if config.batches > 1 {
                pricer.price_parallel(params, config.batches)?
            } else {
                pricer.price(params)?
            };
            info!(
                n_paths = config.paths,
                n_steps = config.steps,
                batches = config.batches,
                seed = ?config.seed,
                elapsed_ms = start.elapsed().as_millis() as u64,
                price = result.price,
                std_error = result.std_error,
                "Monte Carlo pricing complete"
            );

            Some(MonteCarloReport {
                price: result.price,
                std_error: result.std_error,
                confidence_95: result.confidence_95(),
                n_paths: result.n_paths(),
                n_steps: config.steps,
                seed: config.seed,
                batches: config.batches,
            })
        }
    };

    Ok(PriceReport {
        params: *params,
        closed_form,
        monte_carlo,
    })
}

/// Run the price command
pub fn run(params: &PricingParams, model: Model, config: &CliConfig) -> Result<()> {
    info!(
        spot = params.spot,
        strike = params.strike,
        maturity = params.maturity,
        rate = params.rate,
        volatility = params.volatility,
        kind = %params.kind,
        ?model,
        "Starting pricing"
    );

    let report = price_report(params, model, config)?;

    match config.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => print!("{}", render_report(&report)),
    }

    Ok(())
}

fn render_report(report: &PriceReport) -> String {
    let mut rows = Vec::new();
    if let Some(price) = report.closed_form {
        rows.push(vec![
            "Black-Scholes".to_string(),
            format!("{:.4}", price),
            "-".to_string(),
            "-".to_string(),
        ]);
    }
    if let Some(mc) = &report.monte_carlo {
        rows.push(vec![
            format!("Monte Carlo ({} paths)", mc.n_paths),
            format!("{:.4}", mc.price),
            format!("{:.4}", mc.std_error),
            format!("±{:.4}", mc.confidence_95),
        ]);
    }

    let mut out = render_table(&["Model", "Price", "Std error", "95% CI"], &rows);
    if let Some(diff) = report.difference() {
        out.push_str(&format!("Difference (MC - BS): {:+.4}\n", diff));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionKind;

    fn params() -> PricingParams {
        PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap()
    }

    fn small_config() -> CliConfig {
        CliConfig {
            paths: 2_000,
            steps: 4,
            ..Default::default()
        }
    }

    #[test]
    fn test_closed_form_only() {
        let report = price_report(&params(), Model::ClosedForm, &small_config()).unwrap();
        assert_relative_eq!(report.closed_form.unwrap(), 10.969_166_829_425_063, epsilon = 1e-9);
        assert!(report.monte_carlo.is_none());
        assert!(report.difference().is_none());
    }

    #[test]
    fn test_both_models() {
        let report = price_report(&params(), Model::Both, &small_config()).unwrap();
        let mc = report.monte_carlo.as_ref().unwrap();

        assert_eq!(mc.n_paths, 2_000);
        assert_eq!(mc.seed, Some(42));
        assert_relative_eq!(
            report.difference().unwrap(),
            mc.price - report.closed_form.unwrap()
        );
        assert!(report.difference().unwrap().abs() < 5.0 * mc.std_error);
    }

    #[test]
    fn test_batched_monte_carlo() {
        let config = CliConfig {
            batches: 4,
            ..small_config()
        };
        let report = price_report(&params(), Model::MonteCarlo, &config).unwrap();
        assert_eq!(report.monte_carlo.unwrap().batches, 4);
        assert!(report.closed_form.is_none());
    }

    #[test]
    fn test_json_shape() {
        let report = price_report(&params(), Model::ClosedForm, &small_config()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["params"]["kind"], "call");
        assert!(json.get("monte_carlo").is_none());
        assert!(json["closed_form"].as_f64().unwrap() > 10.0);
    }

    #[test]
    fn test_table_lists_each_model() {
        let report = price_report(&params(), Model::Both, &small_config()).unwrap();
        let table = render_report(&report);
        assert!(table.contains("Black-Scholes"));
        assert!(table.contains("Monte Carlo (2000 paths)"));
        assert!(table.contains("Difference (MC - BS)"));
    }
}

//! montescholes - European option pricing from the command line
//!
//! A thin harness over the pricing engine crates.
//!
//! # Commands
//!
//! - `montescholes price` - Price one option by closed form, simulation, or both
//! - `montescholes compare` - Monte Carlo against closed form over a strike ladder
//! - `montescholes sweep` - Closed-form price across a volatility grid
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns everything the engine
//! deliberately leaves out: configuration loading, logging and formatting.
//! Logs go to stderr so JSON on stdout stays machine-readable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pricer_core::types::{OptionKind, PricingParams};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use commands::price::Model;
use config::{build_config, CliOverrides};
pub use error::{CliError, Result};

/// European option pricing: Black-Scholes and Monte Carlo
#[derive(Parser)]
#[command(name = "montescholes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Contract and market inputs shared by every command
#[derive(Args, Debug, Clone)]
struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long, default_value_t = 150.0)]
    spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 160.0)]
    strike: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 1.0)]
    maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    rate: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.2)]
    volatility: f64,

    /// Option kind (call, put)
    #[arg(short, long, default_value = "call")]
    kind: String,
}

impl ContractArgs {
    fn to_params(&self) -> Result<PricingParams> {
        let kind: OptionKind = self.kind.parse()?;
        Ok(PricingParams::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            kind,
        )?)
    }
}

/// Monte Carlo settings; unset values fall back to env, file, then defaults
#[derive(Args, Debug, Clone, Default)]
struct SimulationArgs {
    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    paths: Option<usize>,

    /// Number of time steps per path
    #[arg(long)]
    steps: Option<usize>,

    /// Seed for reproducible simulation
    #[arg(long, conflicts_with = "no_seed")]
    seed: Option<u64>,

    /// Draw from OS entropy instead of a seed
    #[arg(long)]
    no_seed: bool,

    /// Split paths into this many parallel batches
    #[arg(long)]
    batches: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        #[command(flatten)]
        simulation: SimulationArgs,

        /// Pricing model
        #[arg(short, long, value_enum, default_value_t = Model::Both)]
        model: Model,
    },

    /// Compare Monte Carlo with the closed form over a strike ladder
    Compare {
        #[command(flatten)]
        contract: ContractArgs,

        #[command(flatten)]
        simulation: SimulationArgs,

        /// Ladder half-width around the strike
        #[arg(long, default_value_t = 20.0)]
        width: f64,

        /// Strike increment
        #[arg(long, default_value_t = 5.0)]
        step: f64,
    },

    /// Closed-form price over a volatility grid
    Sweep {
        #[command(flatten)]
        contract: ContractArgs,

        /// Lowest volatility
        #[arg(long, default_value_t = 0.01)]
        vol_min: f64,

        /// Highest volatility
        #[arg(long, default_value_t = 1.0)]
        vol_max: f64,

        /// Number of grid points
        #[arg(long, default_value_t = 50)]
        points: usize,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let simulation = match &self.command {
            Commands::Price { simulation, .. } | Commands::Compare { simulation, .. } => {
                simulation.clone()
            }
            Commands::Sweep { .. } => SimulationArgs::default(),
        };

        CliOverrides {
            config_file: self.config.clone(),
            log_level: if self.verbose {
                Some("debug".to_string())
            } else {
                self.log_level.clone()
            },
            paths: simulation.paths,
            steps: simulation.steps,
            seed: simulation.seed,
            no_seed: simulation.no_seed,
            batches: simulation.batches,
            format: self.format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.overrides())?;
    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Price {
            contract, model, ..
        } => commands::price::run(&contract.to_params()?, model, &config),
        Commands::Compare {
            contract,
            width,
            step,
            ..
        } => commands::compare::run(&contract.to_params()?, width, step, &config),
        Commands::Sweep {
            contract,
            vol_min,
            vol_max,
            points,
        } => commands::sweep::run(&contract.to_params()?, vol_min, vol_max, points, &config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

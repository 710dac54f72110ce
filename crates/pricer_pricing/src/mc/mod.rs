//! Monte Carlo pricing for European options under GBM.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (paths, steps, seed)
//! ├── PricerRng         (caller-owned or built from the seed)
//! └── Orchestration
//!     ├── simulate_gbm_paths()   -> PathEnsemble
//!     ├── terminal_payoffs()     (pricer_models)
//!     └── discounted mean and standard error
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParams};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .n_steps(1)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(config).unwrap();
//! let params = PricingParams::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
//!
//! let result = pricer.price(&params).unwrap();
//! // Black-Scholes reference is 10.4506
//! assert!((result.price - 10.4506).abs() < 4.0 * result.std_error);
//! ```

pub mod config;
pub mod error;
pub mod parallel;
pub mod paths;
pub mod pricer;

pub use config::{
    grid_within_limit, MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, DEFAULT_STEPS,
    MAX_GRID_POINTS, MAX_PATHS, MAX_STEPS,
};
pub use error::ConfigError;
pub use parallel::batch_sizes;
pub use paths::{simulate_gbm_paths, GbmParams, PathEnsemble};
pub use pricer::{monte_carlo_price, MonteCarloPricer, PricingResult};

//! # Pricer Engine (Layer 3: Monte Carlo)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the simulation engine in the layered architecture:
//! - Seeded random number generation ([`rng`])
//! - GBM path simulation and Monte Carlo pricing ([`mc`])
//! - Cross-validation against the closed form ([`verify`])
//!
//! It builds on Layer 1 (`pricer_core`: parameters, errors) and Layer 2
//! (`pricer_models`: payoffs, Black-Scholes).
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParams};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let params = PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .n_steps(252)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = MonteCarloPricer::new(config).unwrap().price(&params).unwrap();
//! assert!(result.price >= 0.0);
//! assert_eq!(result.paths.shape(), (10_000, 253));
//! ```
//!
//! ## Concurrency
//!
//! No state is shared between calls. Every simulation takes an explicit
//! [`rng::PricerRng`], and [`mc::MonteCarloPricer::price_parallel`] gives
//! each rayon batch its own generator.

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
pub mod verify;

pub use mc::{monte_carlo_price, MonteCarloConfig, MonteCarloPricer, PathEnsemble, PricingResult};
pub use rng::PricerRng;

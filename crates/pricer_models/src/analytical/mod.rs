//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Price-versus-volatility sweeps over the closed form
//!
//! ## Design Principles
//!
//! - **Independent of simulation**: a pure numeric evaluation used as the
//!   reference value for the Monte Carlo engine
//! - **Numerical Stability**: uses an erfc-based CDF for accuracy in the tails

pub mod black_scholes;
pub mod sweep;

// Re-export main types at module level
pub use black_scholes::{black_scholes_price, BlackScholes};
pub use sweep::{linspace, volatility_sweep, VolatilityPoint};

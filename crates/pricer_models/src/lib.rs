//! # Pricer Models (L2: Business Logic)
//!
//! Payoff functions and closed-form pricing for European options.
//!
//! This crate provides:
//! - Payoff evaluation for calls and puts (`instruments::payoff`)
//! - Black-Scholes closed-form prices (`analytical::black_scholes`)
//! - Price-versus-volatility sweeps (`analytical::sweep`)
//!
//! ## Design Principles
//!
//! - **Closed enum dispatch**: `OptionKind` is matched exhaustively, never defaulted
//! - **Simulation-free reference**: nothing here touches random numbers, so the
//!   closed form is an independent check on the Monte Carlo engine
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParams};
//! use pricer_models::analytical::black_scholes_price;
//!
//! let call = PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
//! let put = call.with_kind(OptionKind::Put);
//!
//! let c = black_scholes_price(&call).unwrap();
//! let p = black_scholes_price(&put).unwrap();
//! let parity = c - p - (150.0 - 160.0 * (-0.05_f64).exp());
//! assert!(parity.abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;

//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for Monte Carlo simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a generator built from a seed replays the same
//!   sequence, so a seeded simulation is bit-reproducible
//! - **Explicit ownership**: there is no process-wide generator; every
//!   simulation takes a `&mut PricerRng` supplied by its caller
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Standard normal variates (mean=0, std=1)
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

pub mod prng;

pub use prng::PricerRng;

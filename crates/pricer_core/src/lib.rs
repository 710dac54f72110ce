//! # pricer_core: Foundation Types for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Pricing parameter contract shared by every pricer (`types::params`)
//! - Closed option-kind enumeration (`types::option`)
//! - Error taxonomy: `PricingError` (`types::error`)
//! - Standard normal CDF (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - libm: double-precision complementary error function
//! - thiserror: error derives
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{OptionKind, PricingParams};
//!
//! let params = PricingParams::new(150.0, 160.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
//! assert!(params.validate().is_ok());
//!
//! let kind: OptionKind = "put".parse().unwrap();
//! assert_eq!(kind, OptionKind::Put);
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionKind` and `PricingParams`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;

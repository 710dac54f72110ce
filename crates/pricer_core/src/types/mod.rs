//! Core pricing types.
//!
//! This module provides:
//! - `error`: Structured error type for every pricing operation
//! - `option`: The closed `OptionKind` enumeration
//! - `params`: `PricingParams`, the contract shared by both pricers
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingError`] from `error`
//! - [`OptionKind`] from `option`
//! - [`PricingParams`] from `params`

pub mod error;
pub mod option;
pub mod params;

pub use error::PricingError;
pub use option::OptionKind;
pub use params::PricingParams;

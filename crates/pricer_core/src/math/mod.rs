//! Mathematical utilities.
//!
//! - `distributions`: Standard normal CDF

pub mod distributions;

pub use distributions::norm_cdf;

//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `montescholes` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected pricing input or simulation settings.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Invalid configuration from a file, the environment or flags.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command-line argument that parsed but makes no sense.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output failed.
    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = PricingError::InvalidOptionKind("straddle".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid option kind 'straddle': expected 'call' or 'put'"
        );
    }

    #[test]
    fn test_config_error_is_prefixed() {
        let err: CliError = ConfigError::InvalidFormat("xml".to_string()).into();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}

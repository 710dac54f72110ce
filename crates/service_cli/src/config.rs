//! CLI configuration management
//!
//! Simulation and output settings are resolved from, in priority order:
//! 1. Command-line flags
//! 2. Environment variables (`MONTESCHOLES_*`)
//! 3. A TOML config file
//! 4. Built-in defaults

use pricer_pricing::mc::{DEFAULT_PATHS, DEFAULT_STEPS, MAX_PATHS, MAX_STEPS};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable for the log level.
pub const ENV_LOG_LEVEL: &str = "MONTESCHOLES_LOG_LEVEL";
/// Environment variable for the path count.
pub const ENV_PATHS: &str = "MONTESCHOLES_PATHS";
/// Environment variable for the step count.
pub const ENV_STEPS: &str = "MONTESCHOLES_STEPS";
/// Environment variable for the seed; `none` disables seeding.
pub const ENV_SEED: &str = "MONTESCHOLES_SEED";
/// Environment variable for the output format.
pub const ENV_FORMAT: &str = "MONTESCHOLES_FORMAT";

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Monte Carlo path count
    pub paths: usize,
    /// Monte Carlo steps per path
    pub steps: usize,
    /// Simulation seed; `None` draws from entropy
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: Option<u64>,
    /// Parallel batch count for Monte Carlo pricing
    pub batches: usize,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Accepts an integer seed or the string `"none"`
fn deserialize_seed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SeedSetting {
        Number(u64),
        Text(String),
    }

    match SeedSetting::deserialize(deserializer)? {
        SeedSetting::Number(seed) => Ok(Some(seed)),
        SeedSetting::Text(text) => parse_seed("seed", &text).map_err(serde::de::Error::custom),
    }
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            paths: DEFAULT_PATHS,
            steps: DEFAULT_STEPS,
            seed: Some(DEFAULT_SEED),
            batches: 1,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Override fields from `lookup`, which maps a variable name to its value
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(paths) = lookup(ENV_PATHS) {
            self.paths = parse_count(ENV_PATHS, &paths)?;
        }
        if let Some(steps) = lookup(ENV_STEPS) {
            self.steps = parse_count(ENV_STEPS, &steps)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = parse_seed(ENV_SEED, &seed)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(paths) = cli.paths {
            self.paths = paths;
        }
        if let Some(steps) = cli.steps {
            self.steps = steps;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if cli.no_seed {
            self.seed = None;
        }
        if let Some(batches) = cli.batches {
            self.batches = batches;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths == 0 || self.paths > MAX_PATHS {
            return Err(ConfigError::InvalidValue {
                name: "paths",
                value: format!("{} (must be in [1, {}])", self.paths, MAX_PATHS),
            });
        }
        if self.steps == 0 || self.steps > MAX_STEPS {
            return Err(ConfigError::InvalidValue {
                name: "steps",
                value: format!("{} (must be in [1, {}])", self.steps, MAX_STEPS),
            });
        }
        if self.batches == 0 {
            return Err(ConfigError::InvalidValue {
                name: "batches",
                value: "0 (must be at least 1)".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_count(name: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

fn parse_seed(name: &'static str, value: &str) -> Result<Option<u64>, ConfigError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
}

/// Settings given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Path count override
    pub paths: Option<usize>,
    /// Step count override
    pub steps: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Disable seeding, even if a seed is configured elsewhere
    pub no_seed: bool,
    /// Batch count override
    pub batches: Option<usize>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.paths, 10_000);
        assert_eq!(config.steps, 252);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.batches, 1);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert!(matches!(
            LogLevel::from_str("loud"),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(
            OutputFormat::from_str("csv"),
            Err(ConfigError::InvalidFormat("csv".to_string()))
        );
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
            paths = 50000
            format = "json"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths, 50_000);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.steps, 252);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_toml_seed_can_be_disabled() {
        assert_eq!(CliConfig::from_toml_str("seed = \"none\"").unwrap().seed, None);
        assert_eq!(CliConfig::from_toml_str("seed = \"NONE\"").unwrap().seed, None);
        assert_eq!(CliConfig::from_toml_str("seed = 7").unwrap().seed, Some(7));
        assert_eq!(CliConfig::from_toml_str("seed = \"11\"").unwrap().seed, Some(11));

        assert!(matches!(
            CliConfig::from_toml_str("seed = \"random\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            CliConfig::from_toml_str("seed = -1"),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(matches!(
            CliConfig::from_toml_str("format = \"xml\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            CliConfig::from_toml_str("steps = 0"),
            Err(ConfigError::InvalidValue { name: "steps", .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            (ENV_PATHS, "2000"),
            (ENV_STEPS, " 12 "),
            (ENV_SEED, "none"),
            (ENV_FORMAT, "json"),
            (ENV_LOG_LEVEL, "info"),
        ]);
        let mut config = CliConfig::default();
        config.apply_env_with(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.paths, 2_000);
        assert_eq!(config.steps, 12);
        assert_eq!(config.seed, None);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let vars = env(&[(ENV_PATHS, "many")]);
        let mut config = CliConfig::default();
        assert_eq!(
            config.apply_env_with(|k| vars.get(k).cloned()),
            Err(ConfigError::InvalidValue {
                name: ENV_PATHS,
                value: "many".to_string()
            })
        );
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let vars = env(&[(ENV_PATHS, "2000"), (ENV_SEED, "7")]);
        let mut config = CliConfig::default();
        config.apply_env_with(|k| vars.get(k).cloned()).unwrap();

        let cli = CliOverrides {
            paths: Some(300),
            batches: Some(4),
            format: Some("json".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.paths, 300);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.batches, 4);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_seed_flag_clears_seed() {
        let mut config = CliConfig::default();
        let cli = CliOverrides {
            seed: Some(9),
            no_seed: true,
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_rejects_zero_batches() {
        let config = CliConfig {
            batches: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                name: "batches",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/montescholes.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}

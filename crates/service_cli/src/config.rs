//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables
//! and command-line flags.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`VARIATE_*`)
//! 3. Config file
//! 4. Default values

use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::engine::EngineKind;

/// Default configuration file, read from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "variate.toml";

/// Largest number of draws a single command may request.
pub const MAX_COUNT: usize = 10_000_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid engine: {0}. Run `variate engines` for the supported names")]
    InvalidEngine(String),

    #[error("Invalid seed: {0}. Must be a decimal or 0x-prefixed hexadecimal u64")]
    InvalidSeed(String),

    #[error("Invalid count: {0}. Must be between 1 and {max}", max = MAX_COUNT)]
    InvalidCount(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
///
/// Names double as `tracing` filter directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name, ignoring case.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Parses a seed in decimal or `0x`-prefixed hexadecimal.
pub fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidSeed(s.to_string()))
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VariateConfig {
    /// Engine used by sampling commands
    pub engine: EngineKind,
    /// Seed; `None` draws one from the entropy source
    #[serde(deserialize_with = "deserialize_seed")]
    pub seed: Option<u64>,
    /// Number of values to draw
    pub count: usize,
    /// Log level
    pub log_level: LogLevel,
}

/// Accepts a TOML integer or a string, since TOML integers stop at
/// `i64::MAX`.
fn deserialize_seed<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SeedValue {
        Number(u64),
        Text(String),
    }

    match Option::<SeedValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(SeedValue::Number(n)) => Ok(Some(n)),
        Some(SeedValue::Text(s)) => parse_seed(&s).map(Some).map_err(serde::de::Error::custom),
    }
}

impl Default for VariateConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            seed: None,
            count: 10,
            log_level: LogLevel::default(),
        }
    }
}

impl VariateConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: VariateConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `VARIATE_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `VARIATE_*` overrides read through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(engine) = lookup("VARIATE_ENGINE") {
            self.engine = EngineKind::from_str(&engine)?;
        }

        if let Some(seed) = lookup("VARIATE_SEED") {
            self.seed = Some(parse_seed(&seed)?);
        }

        if let Some(count) = lookup("VARIATE_COUNT") {
            self.count = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("VARIATE_COUNT={}", count)))?;
        }

        if let Some(level) = lookup("VARIATE_LOG_LEVEL") {
            self.log_level = LogLevel::parse(&level)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(engine) = cli.engine {
            self.engine = engine;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(ConfigError::InvalidCount(self.count));
        }
        Ok(())
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path; `None` tries [`DEFAULT_CONFIG_FILE`]
    pub config_file: Option<PathBuf>,
    /// Engine override
    pub engine: Option<EngineKind>,
    /// Seed override
    pub seed: Option<u64>,
    /// Count override
    pub count: Option<usize>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
///
/// An explicitly named config file must exist; the default one is
/// optional.
pub fn build_config(cli: &CliOverrides) -> Result<VariateConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => VariateConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                VariateConfig::from_file(default_path)?
            } else {
                VariateConfig::default()
            }
        }
    };

    config.apply_env()?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = VariateConfig::default();
        assert_eq!(config.engine, EngineKind::Xoshiro256StarStar);
        assert_eq!(config.seed, None);
        assert_eq!(config.count, 10);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::parse("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::parse("Info").unwrap(), LogLevel::Info);
        assert!(matches!(
            LogLevel::parse("loud"),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_log_level_names_are_filter_directives() {
        for level in LogLevel::value_variants() {
            let name = level.to_string();
            assert_eq!(LogLevel::parse(&name).unwrap(), *level);
            assert!(name.parse::<tracing::level_filters::LevelFilter>().is_ok());
        }
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_seed_parsing() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed("0xff").unwrap(), 255);
        assert_eq!(parse_seed("0xDEAD_BEEF").unwrap(), 0xdead_beef);
        assert_eq!(parse_seed("1_000").unwrap(), 1000);
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("0x").is_err());
        assert!(parse_seed("seed").is_err());
    }

    #[test]
    fn test_from_toml() {
        let config = VariateConfig::from_toml(
            r#"
            engine = "pcg64"
            seed = 7
            count = 3
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine, EngineKind::Pcg64);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.count, 3);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = VariateConfig::from_toml("engine = \"lcg32\"").unwrap();
        assert_eq!(config.engine, EngineKind::Lcg32);
        assert_eq!(config.count, 10);
    }

    #[test]
    fn test_from_toml_seed_as_string() {
        let config = VariateConfig::from_toml("seed = \"0xffffffffffffffff\"").unwrap();
        assert_eq!(config.seed, Some(u64::MAX));
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(VariateConfig::from_toml("engine = \"mt19937\"").is_err());
        assert!(matches!(
            VariateConfig::from_toml("count = 0"),
            Err(ConfigError::InvalidCount(0))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = VariateConfig::default();
        config
            .apply_env_with(lookup_from(&[
                ("VARIATE_ENGINE", "splitmix"),
                ("VARIATE_SEED", "0x10"),
                ("VARIATE_COUNT", "25"),
                ("VARIATE_LOG_LEVEL", "error"),
            ]))
            .unwrap();
        assert_eq!(config.engine, EngineKind::SplitMix64);
        assert_eq!(config.seed, Some(16));
        assert_eq!(config.count, 25);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_env_bad_count() {
        let mut config = VariateConfig::default();
        let err = config
            .apply_env_with(lookup_from(&[("VARIATE_COUNT", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut config = VariateConfig::default();
        config
            .apply_env_with(lookup_from(&[("VARIATE_SEED", "1"), ("VARIATE_COUNT", "5")]))
            .unwrap();

        config.merge_with_cli(&CliOverrides {
            seed: Some(2),
            ..Default::default()
        });
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.count, 5);
    }

    #[test]
    fn test_validate_count_bounds() {
        let config = VariateConfig {
            count: MAX_COUNT + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCount(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let cli = CliOverrides {
            config_file: Some(PathBuf::from("/nonexistent/variate.toml")),
            ..Default::default()
        };
        assert!(matches!(build_config(&cli), Err(ConfigError::FileError(_))));
    }
}

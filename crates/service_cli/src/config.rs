//! CLI configuration management.
//!
//! Loads defaults for the pricing commands from a TOML file, applies
//! `PRICER_*` environment variable overrides, then validates.
//!
//! ```toml
//! num_paths = 100000
//! seed = 42
//! epsilon = 0.01
//! confidence_level = 0.95
//! log_level = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pricer.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Defaults shared by the `price`, `demo` and `bench` commands.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Monte Carlo paths when `--paths` is not given
    pub num_paths: usize,

    /// Monte Carlo seed
    pub seed: u64,

    /// Finite-difference bump size
    pub epsilon: f64,

    /// Confidence level for reported intervals
    pub confidence_level: f64,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            num_paths: 100_000,
            seed: 42,
            epsilon: 0.01,
            confidence_level: 0.95,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve, load, override and validate.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(&fallback)?
                } else {
                    Self::default()
                }
            }
        };

        let config = base.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PRICER_*` environment variable overrides.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PRICER_NUM_PATHS") {
            self.num_paths = parse_env("PRICER_NUM_PATHS", &value)?;
        }

        if let Some(value) = lookup("PRICER_SEED") {
            self.seed = parse_env("PRICER_SEED", &value)?;
        }

        if let Some(value) = lookup("PRICER_EPSILON") {
            self.epsilon = parse_env("PRICER_EPSILON", &value)?;
        }

        if let Some(value) = lookup("PRICER_CONFIDENCE_LEVEL") {
            self.confidence_level = parse_env("PRICER_CONFIDENCE_LEVEL", &value)?;
        }

        if let Some(value) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = value;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.num_paths == 0 {
            errors.push("num_paths must be greater than 0".to_string());
        }

        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            errors.push(format!("epsilon {} must be positive and finite", self.epsilon));
        }

        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            errors.push(format!(
                "confidence_level {} must lie strictly between 0 and 1",
                self.confidence_level
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("IO error reading {}: {message}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO message.
        message: String,
    },

    /// Config file is not valid TOML for [`CliConfig`].
    #[error("Parse error: {0}")]
    Parse(String),

    /// Environment override could not be parsed.
    #[error("Invalid value '{value}' for {key}")]
    InvalidEnv {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
    },

    /// One or more fields failed validation.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

//! Configuration with layered resolution.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied by the binary after loading)
//! 2. Config file (`--config path.toml`)
//! 3. Compiled defaults

pub mod defaults;
pub mod observability_config;
pub mod prediction_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;

use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextLoginConfig {
    pub prediction: PredictionConfig,
    pub observability: ObservabilityConfig,
}

impl NextLoginConfig {
    /// Load configuration: compiled defaults, then the optional TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
                toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prediction.max_interval_gap_days == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.max_interval_gap_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.prediction.interval_recent_samples == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.interval_recent_samples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.prediction.dynamic_recent_window == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.dynamic_recent_window".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        if !LOG_FORMATS.contains(&self.observability.log_format.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_format".to_string(),
                message: format!("must be one of {}", LOG_FORMATS.join(", ")),
            });
        }
        Ok(())
    }
}

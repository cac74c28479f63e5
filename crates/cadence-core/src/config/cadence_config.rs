//! Top-level Cadence configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults::MAX_INTERVAL_HOURS;
use super::{ObservabilityConfig, PredictionConfig};
use crate::errors::ConfigError;

/// Environment variables recognised by [`CadenceConfig::load`].
pub const ENV_SEED: &str = "CADENCE_PREDICTION_SEED";
pub const ENV_DEFAULT_INTERVAL_HOURS: &str = "CADENCE_PREDICTION_DEFAULT_INTERVAL_HOURS";
pub const ENV_LOG_LEVEL: &str = "CADENCE_LOG_LEVEL";
pub const ENV_JSON_LOGS: &str = "CADENCE_JSON_LOGS";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CADENCE_*`)
/// 2. Config file (`cadence.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CadenceConfig {
    pub prediction: PredictionConfig,
    pub observability: ObservabilityConfig,
}

impl CadenceConfig {
    /// Load configuration from an optional file, then apply env overrides.
    ///
    /// An explicit path that does not exist is an error; `None` means
    /// compiled defaults plus environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prediction = &self.prediction;
        validate_interval(
            "prediction.default_interval_hours",
            prediction.default_interval_hours,
        )?;
        validate_interval("prediction.min_interval_hours", prediction.min_interval_hours)?;
        if prediction.min_logins_for_prediction < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.min_logins_for_prediction".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        if prediction.min_logins_for_backtest <= prediction.min_logins_for_prediction {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.min_logins_for_backtest".to_string(),
                message: "must exceed prediction.min_logins_for_prediction".to_string(),
            });
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CadenceConfig) {
        if let Ok(val) = std::env::var(ENV_SEED) {
            if let Ok(v) = val.parse::<u64>() {
                config.prediction.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var(ENV_DEFAULT_INTERVAL_HOURS) {
            if let Ok(v) = val.parse::<f64>() {
                config.prediction.default_interval_hours = v;
            }
        }
        if let Ok(val) = std::env::var(ENV_LOG_LEVEL) {
            config.observability.log_level = val;
        }
        if let Ok(val) = std::env::var(ENV_JSON_LOGS) {
            if let Ok(v) = val.parse::<bool>() {
                config.observability.json_logs = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Intervals must be finite, positive, and at most [`MAX_INTERVAL_HOURS`].
fn validate_interval(field: &str, hours: f64) -> Result<(), ConfigError> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be a finite number greater than 0".to_string(),
        });
    }
    if hours > MAX_INTERVAL_HOURS {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be at most {MAX_INTERVAL_HOURS} hours"),
        });
    }
    Ok(())
}

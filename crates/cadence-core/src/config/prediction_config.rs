use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Interval projected by the interval strategy when it has no gaps to average (hours).
    pub default_interval_hours: f64,
    /// Users with fewer usable logins get an insufficient-data outcome.
    pub min_logins_for_prediction: usize,
    /// Users with at least this many usable logins get a backtest score.
    pub min_logins_for_backtest: usize,
    /// Floor for the Gaussian-sampled cluster interval (hours).
    pub min_interval_hours: f64,
    /// Fixed seed for the random source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            default_interval_hours: defaults::DEFAULT_INTERVAL_HOURS,
            min_logins_for_prediction: defaults::DEFAULT_MIN_LOGINS_FOR_PREDICTION,
            min_logins_for_backtest: defaults::DEFAULT_MIN_LOGINS_FOR_BACKTEST,
            min_interval_hours: defaults::DEFAULT_MIN_INTERVAL_HOURS,
            seed: None,
        }
    }
}

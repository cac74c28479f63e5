//! Compiled defaults for every config value.

/// Interval used when a history has fewer than two logins (hours).
pub const DEFAULT_INTERVAL_HOURS: f64 = 24.0;

/// Minimum usable logins before any prediction is attempted.
pub const DEFAULT_MIN_LOGINS_FOR_PREDICTION: usize = 2;

/// Minimum usable logins before a backtest score is attached.
pub const DEFAULT_MIN_LOGINS_FOR_BACKTEST: usize = 3;

/// Floor applied to sampled cluster intervals (hours).
pub const DEFAULT_MIN_INTERVAL_HOURS: f64 = 1.0;

/// Upper bound accepted for any configured interval (hours). Ten years.
pub const MAX_INTERVAL_HOURS: f64 = 87_600.0;

/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Cadence system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for every timestamp leaving the engine (UTC, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Seconds per hour, as used by every interval computation.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Error message surfaced for users without enough usable logins.
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Not enough login data for prediction";

/// Weekday names indexed by `num_days_from_sunday()`.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Lowest backtest score the scorer can emit.
pub const MIN_BACKTEST_SCORE: u8 = 10;

/// Highest backtest score the scorer can emit.
pub const MAX_BACKTEST_SCORE: u8 = 100;

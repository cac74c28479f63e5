//! Span definitions per operation: prediction, backtest, batch.
//!
//! Each span carries its identifying metadata via the `tracing` crate.

/// Create a per-user prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($user_id:expr, $login_count:expr) => {
        tracing::info_span!("cadence.prediction", user_id = %$user_id, logins = $login_count)
    };
}

/// Create a backtest span.
#[macro_export]
macro_rules! backtest_span {
    ($held_out:expr) => {
        tracing::debug_span!("cadence.backtest", held_out = %$held_out)
    };
}

/// Create a batch span.
#[macro_export]
macro_rules! batch_span {
    ($user_count:expr) => {
        tracing::info_span!("cadence.batch", users = $user_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICTION: &str = "cadence.prediction";
    pub const BACKTEST: &str = "cadence.backtest";
    pub const BATCH: &str = "cadence.batch";
}

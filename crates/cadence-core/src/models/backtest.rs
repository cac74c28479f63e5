use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::timestamp::display_format;

/// Backtest score: how close a prediction made with the last login withheld
/// came to that withheld login.
///
/// Serialized as the `accuracy` block of a strategy prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BacktestScore {
    /// 10–100, higher is closer.
    pub score: u8,
    /// Absolute difference in hours, rounded to 2 decimals.
    pub hour_difference: f64,
    #[serde(with = "display_format")]
    #[ts(type = "string")]
    pub predicted: DateTime<Utc>,
    #[serde(with = "display_format")]
    #[ts(type = "string")]
    pub actual: DateTime<Utc>,
}

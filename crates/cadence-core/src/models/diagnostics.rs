//! Human-readable strategy internals, for display only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::timestamp::display_format;
use super::LoginCluster;

/// Strategy-specific internals exposed alongside a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "strategy", rename_all = "camelCase")]
#[ts(export)]
pub enum PredictorDiagnostics {
    Interval(IntervalDiagnostics),
    Pattern(PatternDiagnostics),
    Cluster(ClusterDiagnostics),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IntervalDiagnostics {
    /// Rounded to 2 decimals.
    pub average_interval_hours: f64,
    #[serde(with = "display_format")]
    #[ts(type = "string")]
    pub last_login: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatternDiagnostics {
    /// All seven weekdays, Sunday first.
    pub day_frequency: Vec<DayCount>,
    /// Only hours with at least one login.
    pub hour_frequency: Vec<HourCount>,
    pub most_frequent_day: String,
    pub most_frequent_hour: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DayCount {
    pub day: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HourCount {
    /// `HH:00`
    pub hour: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClusterDiagnostics {
    /// Clusters that have interval statistics.
    pub clusters: Vec<ClusterSummary>,
    pub last_cluster: LoginCluster,
    pub next_cluster: LoginCluster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClusterSummary {
    pub cluster: LoginCluster,
    pub label: String,
    pub count: usize,
    /// Rounded to 2 decimals.
    pub mean_interval_hours: f64,
    /// Rounded to 2 decimals.
    pub std_dev_hours: f64,
}

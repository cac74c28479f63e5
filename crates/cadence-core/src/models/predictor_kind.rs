use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The three prediction strategies, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PredictorKind {
    /// Mean gap between consecutive logins.
    #[serde(rename = "averageInterval")]
    Interval,
    /// Most frequent weekday and hour.
    #[serde(rename = "patternAnalysis")]
    Pattern,
    /// Weekday-type × time-of-day clusters with Gaussian sampling.
    #[serde(rename = "gaussianMixture")]
    Cluster,
}

impl PredictorKind {
    pub const ALL: [PredictorKind; 3] = [Self::Interval, Self::Pattern, Self::Cluster];

    /// Key used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            Self::Interval => "averageInterval",
            Self::Pattern => "patternAnalysis",
            Self::Cluster => "gaussianMixture",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Interval => "Average Interval",
            Self::Pattern => "Day-Hour Pattern Analysis",
            Self::Cluster => "Gaussian Mixture Model (GMM)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Interval => {
                "Computes the average time between consecutive logins in hours and adds it to \
                 the last login. Works well for users with regular habits, but ignores \
                 weekday/weekend differences and drifts on irregular behaviour."
            }
            Self::Pattern => {
                "Counts logins per weekday and per hour of day, then predicts the next \
                 occurrence of the busiest weekday at the busiest hour. Captures recurring \
                 routines, but needs enough history and lags behind changing habits."
            }
            Self::Cluster => {
                "Groups logins into weekday/weekend morning, afternoon and evening clusters, \
                 models the interval inside each cluster as a Gaussian, picks the next cluster \
                 from a fixed transition table and samples the next login from it. Produces \
                 probabilistic predictions and degrades when clusters have too little data."
            }
        }
    }
}

impl fmt::Display for PredictorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

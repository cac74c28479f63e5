use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::timestamp::display_format;
use super::{BacktestScore, LoginCluster, PredictorKind, UserRecord};
use crate::constants::INSUFFICIENT_DATA_MESSAGE;

/// One strategy's prediction for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StrategyPrediction {
    #[serde(with = "display_format")]
    #[ts(type = "string")]
    pub next_login: DateTime<Utc>,
    /// Cluster the cluster strategy moved to. Absent for other strategies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cluster: Option<LoginCluster>,
    /// Backtest score, present when the history had enough logins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<BacktestScore>,
}

impl StrategyPrediction {
    pub fn new(next_login: DateTime<Utc>) -> Self {
        Self {
            next_login,
            next_cluster: None,
            accuracy: None,
        }
    }
}

/// All three strategy predictions for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PredictionBundle {
    pub average_interval: StrategyPrediction,
    pub pattern_analysis: StrategyPrediction,
    pub gaussian_mixture: StrategyPrediction,
}

impl PredictionBundle {
    pub fn get(&self, kind: PredictorKind) -> &StrategyPrediction {
        match kind {
            PredictorKind::Interval => &self.average_interval,
            PredictorKind::Pattern => &self.pattern_analysis,
            PredictorKind::Cluster => &self.gaussian_mixture,
        }
    }

    pub fn get_mut(&mut self, kind: PredictorKind) -> &mut StrategyPrediction {
        match kind {
            PredictorKind::Interval => &mut self.average_interval,
            PredictorKind::Pattern => &mut self.pattern_analysis,
            PredictorKind::Cluster => &mut self.gaussian_mixture,
        }
    }

    /// Predictions in output order, tagged by strategy.
    pub fn iter(&self) -> impl Iterator<Item = (PredictorKind, &StrategyPrediction)> {
        PredictorKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Per-user outcome: either the full bundle or a structured error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum UserPrediction {
    Predicted(PredictionBundle),
    Failed { error: String },
}

impl UserPrediction {
    /// The outcome for users with fewer than two usable logins.
    pub fn insufficient_data() -> Self {
        Self::Failed {
            error: INSUFFICIENT_DATA_MESSAGE.to_string(),
        }
    }

    pub fn bundle(&self) -> Option<&PredictionBundle> {
        match self {
            Self::Predicted(bundle) => Some(bundle),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Predicted(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}

/// A user together with their prediction outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPredictionReport {
    pub user: UserRecord,
    pub predictions: UserPrediction,
}

use cadence_core::config::defaults::DEFAULT_INTERVAL_HOURS;
use cadence_core::errors::{CadenceResult, PredictionError};
use cadence_core::models::timestamp::hours_to_delta;
use cadence_core::models::{IntervalDiagnostics, LoginHistory, PredictorDiagnostics, PredictorKind};
use cadence_core::traits::ILoginPredictor;
use chrono::{DateTime, Utc};
use rand::RngCore;

use super::{round2, shift};

/// Interval prediction strategy.
///
/// Projects the mean gap between consecutive logins forward from the last
/// login. Deterministic.
#[derive(Debug, Clone)]
pub struct IntervalPredictor {
    history: LoginHistory,
    average_interval_hours: f64,
}

impl IntervalPredictor {
    pub fn new(history: LoginHistory) -> CadenceResult<Self> {
        Self::with_default_interval(history, DEFAULT_INTERVAL_HOURS)
    }

    /// Like [`new`](Self::new), with the interval used when there are no
    /// gaps to average.
    pub fn with_default_interval(
        history: LoginHistory,
        default_interval_hours: f64,
    ) -> CadenceResult<Self> {
        if history.is_empty() {
            return Err(PredictionError::EmptyHistory.into());
        }

        let intervals = history.intervals_hours();
        let average_interval_hours = if intervals.is_empty() {
            default_interval_hours
        } else {
            intervals.iter().sum::<f64>() / intervals.len() as f64
        };

        Ok(Self {
            history,
            average_interval_hours,
        })
    }

    pub fn average_interval_hours(&self) -> f64 {
        self.average_interval_hours
    }
}

impl ILoginPredictor for IntervalPredictor {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Interval
    }

    fn history(&self) -> &LoginHistory {
        &self.history
    }

    fn predict(&self, _rng: &mut dyn RngCore) -> CadenceResult<DateTime<Utc>> {
        let last = self.last_login()?;
        shift(last, hours_to_delta(self.average_interval_hours)?)
    }

    fn diagnostics(&self) -> PredictorDiagnostics {
        PredictorDiagnostics::Interval(IntervalDiagnostics {
            average_interval_hours: round2(self.average_interval_hours),
            // Construction guarantees a non-empty history.
            last_login: self.history.last().unwrap_or_default(),
        })
    }
}

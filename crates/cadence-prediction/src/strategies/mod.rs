//! The three prediction strategies and the enum that dispatches between them.
//!
//! Callers depend on [`ILoginPredictor`] only; [`Strategy`] picks the
//! concrete implementation for a [`PredictorKind`].

pub mod cluster;
pub mod interval;
pub mod pattern;

pub use cluster::ClusterPredictor;
pub use interval::IntervalPredictor;
pub use pattern::PatternPredictor;

use cadence_core::config::PredictionConfig;
use cadence_core::errors::{CadenceResult, PredictionError};
use cadence_core::models::{LoginCluster, LoginHistory, PredictorDiagnostics, PredictorKind};
use cadence_core::traits::ILoginPredictor;
use chrono::{DateTime, Days, Duration, Utc};
use rand::RngCore;

/// A constructed predictor of any kind.
#[derive(Debug, Clone)]
pub enum Strategy {
    Interval(IntervalPredictor),
    Pattern(PatternPredictor),
    Cluster(ClusterPredictor),
}

impl Strategy {
    /// Build the predictor for `kind` over a copy of `history`.
    ///
    /// The cluster strategy draws its next cluster from `rng` here.
    pub fn build(
        kind: PredictorKind,
        history: &LoginHistory,
        config: &PredictionConfig,
        rng: &mut dyn RngCore,
    ) -> CadenceResult<Self> {
        let history = history.clone();
        Ok(match kind {
            PredictorKind::Interval => Self::Interval(IntervalPredictor::with_default_interval(
                history,
                config.default_interval_hours,
            )?),
            PredictorKind::Pattern => Self::Pattern(PatternPredictor::new(history)?),
            PredictorKind::Cluster => Self::Cluster(
                ClusterPredictor::new(history, rng)?.with_min_interval(config.min_interval_hours),
            ),
        })
    }

    fn inner(&self) -> &dyn ILoginPredictor {
        match self {
            Self::Interval(p) => p,
            Self::Pattern(p) => p,
            Self::Cluster(p) => p,
        }
    }
}

impl ILoginPredictor for Strategy {
    fn kind(&self) -> PredictorKind {
        self.inner().kind()
    }

    fn history(&self) -> &LoginHistory {
        self.inner().history()
    }

    fn predict(&self, rng: &mut dyn RngCore) -> CadenceResult<DateTime<Utc>> {
        self.inner().predict(rng)
    }

    fn diagnostics(&self) -> PredictorDiagnostics {
        self.inner().diagnostics()
    }

    fn next_cluster(&self) -> Option<LoginCluster> {
        self.inner().next_cluster()
    }
}

/// `ts + delta`, failing instead of overflowing.
pub(crate) fn shift(ts: DateTime<Utc>, delta: Duration) -> CadenceResult<DateTime<Utc>> {
    ts.checked_add_signed(delta).ok_or_else(|| {
        PredictionError::TimestampOutOfRange {
            details: format!("{ts} + {delta}"),
        }
        .into()
    })
}

/// `ts` plus whole calendar days, failing instead of overflowing.
pub(crate) fn add_days(ts: DateTime<Utc>, days: u64) -> CadenceResult<DateTime<Utc>> {
    ts.checked_add_days(Days::new(days)).ok_or_else(|| {
        PredictionError::TimestampOutOfRange {
            details: format!("{ts} + {days} days"),
        }
        .into()
    })
}

/// Round to 2 decimals for display.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use chrono::{DateTime, Utc};
use rand::RngCore;

use crate::errors::{CadenceResult, PredictionError};
use crate::models::{LoginCluster, LoginHistory, PredictorDiagnostics, PredictorKind};

/// Next-login prediction strategy.
///
/// Implementations own a sorted copy of the history and are immutable after
/// construction. Randomness is always supplied by the caller.
pub trait ILoginPredictor {
    fn kind(&self) -> PredictorKind;

    fn history(&self) -> &LoginHistory;

    /// Predict the next login. Deterministic strategies ignore `rng`.
    fn predict(&self, rng: &mut dyn RngCore) -> CadenceResult<DateTime<Utc>>;

    /// Display internals.
    fn diagnostics(&self) -> PredictorDiagnostics;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn description(&self) -> &'static str {
        self.kind().description()
    }

    /// The most recent login in the history.
    fn last_login(&self) -> CadenceResult<DateTime<Utc>> {
        Ok(self.history().last().ok_or(PredictionError::EmptyHistory)?)
    }

    /// Cluster the strategy will predict into, if it works with clusters.
    fn next_cluster(&self) -> Option<LoginCluster> {
        None
    }
}

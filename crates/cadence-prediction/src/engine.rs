//! PredictionEngine: runs every strategy for a user, attaches backtest
//! scores, and handles user lookup and batches.

use cadence_core::config::PredictionConfig;
use cadence_core::errors::{CadenceError, CadenceResult, PredictionError};
use cadence_core::models::{
    LoginHistory, PredictionBundle, PredictorDiagnostics, PredictorKind, StrategyPrediction,
    UserPrediction, UserPredictionReport, UserRecord, UserSummary,
};
use cadence_core::traits::ILoginPredictor;
use cadence_observability::{backtest_span, batch_span, prediction_span};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backtest::score_backtest;
use crate::parsing::parse_logins;
use crate::strategies::Strategy;

/// Name, description, and internals of one strategy for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyExplanation {
    pub kind: PredictorKind,
    pub name: &'static str,
    pub description: &'static str,
    pub diagnostics: PredictorDiagnostics,
}

impl StrategyExplanation {
    fn of(strategy: &Strategy) -> Self {
        Self {
            kind: strategy.kind(),
            name: strategy.name(),
            description: strategy.description(),
            diagnostics: strategy.diagnostics(),
        }
    }
}

/// Stateless prediction engine. Every call builds fresh predictors.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    config: PredictionConfig,
}

impl PredictionEngine {
    pub fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Random source per the config: seeded when `seed` is set, OS-seeded otherwise.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Run all three strategies over `history`.
    pub fn compute_all(
        &self,
        history: &LoginHistory,
        rng: &mut dyn RngCore,
    ) -> CadenceResult<PredictionBundle> {
        self.build_strategies(history, rng)?.predict(rng)
    }

    /// Predictions and explanations from one set of strategies, so the
    /// cluster diagnostics describe the same next-cluster draw as the
    /// `gaussianMixture` prediction.
    pub fn predict_and_explain(
        &self,
        history: &LoginHistory,
        rng: &mut dyn RngCore,
    ) -> CadenceResult<(PredictionBundle, Vec<StrategyExplanation>)> {
        let strategies = self.build_strategies(history, rng)?;
        let bundle = strategies.predict(rng)?;
        Ok((bundle, strategies.iter().map(StrategyExplanation::of).collect()))
    }

    /// Run all strategies and, with enough logins, backtest each one by
    /// withholding the most recent login.
    pub fn compute_with_accuracy(
        &self,
        history: &LoginHistory,
        rng: &mut dyn RngCore,
    ) -> CadenceResult<PredictionBundle> {
        let mut bundle = self.compute_all(history, rng)?;

        if history.len() < self.config.min_logins_for_backtest {
            debug!(logins = history.len(), "too few logins for a backtest");
            return Ok(bundle);
        }

        let Some((held_in, held_out)) = history.split_last() else {
            return Ok(bundle);
        };
        let _span = backtest_span!(held_out).entered();
        let backtest = self.compute_all(&held_in, rng)?;

        for kind in PredictorKind::ALL {
            let score = score_backtest(backtest.get(kind).next_login, held_out);
            debug!(strategy = %kind, score = score.score, hours = score.hour_difference, "backtest scored");
            bundle.get_mut(kind).accuracy = Some(score);
        }

        Ok(bundle)
    }

    /// Name, description, and diagnostics of every strategy over `history`.
    ///
    /// The cluster strategy draws its own next cluster here, independent of
    /// any earlier `compute_all` call. Use [`predict_and_explain`] when the
    /// diagnostics must match a prediction.
    ///
    /// [`predict_and_explain`]: Self::predict_and_explain
    pub fn explain(
        &self,
        history: &LoginHistory,
        rng: &mut dyn RngCore,
    ) -> CadenceResult<Vec<StrategyExplanation>> {
        let strategies = self.build_strategies(history, rng)?;
        Ok(strategies.iter().map(StrategyExplanation::of).collect())
    }

    /// Predict for one user from raw login strings.
    ///
    /// Never fails: malformed logins are dropped, and users left with too
    /// few logins get the insufficient-data outcome.
    pub fn predict_user(&self, user: &UserRecord, rng: &mut dyn RngCore) -> UserPrediction {
        let _span = prediction_span!(user.id, user.logins.len()).entered();

        let parsed = parse_logins(&user.id, &user.logins);
        if !parsed.is_clean() {
            warn!(user_id = %user.id, dropped = parsed.rejected.len(), "some logins could not be parsed");
        }

        match self.compute_with_accuracy(&parsed.history, rng) {
            Ok(bundle) => {
                info!(user_id = %user.id, logins = parsed.history.len(), "prediction complete");
                UserPrediction::Predicted(bundle)
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "prediction failed");
                match e {
                    CadenceError::Prediction(PredictionError::InsufficientData { .. }) => {
                        UserPrediction::insufficient_data()
                    }
                    other => UserPrediction::Failed {
                        error: other.to_string(),
                    },
                }
            }
        }
    }

    /// Look up `user_id` and predict for that user.
    pub fn predict_for(
        &self,
        users: &[UserRecord],
        user_id: &str,
        rng: &mut dyn RngCore,
    ) -> CadenceResult<UserPredictionReport> {
        let user = users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| PredictionError::UserNotFound {
                user_id: user_id.to_string(),
            })?;

        Ok(UserPredictionReport {
            user: user.clone(),
            predictions: self.predict_user(user, rng),
        })
    }

    /// Predict for every user, in input order. One user's failure never
    /// affects the others.
    pub fn predict_batch(
        &self,
        users: &[UserRecord],
        rng: &mut dyn RngCore,
    ) -> Vec<UserPredictionReport> {
        let _span = batch_span!(users.len()).entered();

        let reports: Vec<UserPredictionReport> = users
            .iter()
            .map(|user| UserPredictionReport {
                user: user.clone(),
                predictions: self.predict_user(user, rng),
            })
            .collect();

        let failed = reports
            .iter()
            .filter(|report| report.predictions.error().is_some())
            .count();
        info!(users = reports.len(), failed, "batch prediction complete");
        reports
    }

    fn build_strategies(
        &self,
        history: &LoginHistory,
        rng: &mut dyn RngCore,
    ) -> CadenceResult<StrategySet> {
        self.ensure_enough(history)?;
        Ok(StrategySet {
            interval: Strategy::build(PredictorKind::Interval, history, &self.config, rng)?,
            pattern: Strategy::build(PredictorKind::Pattern, history, &self.config, rng)?,
            cluster: Strategy::build(PredictorKind::Cluster, history, &self.config, rng)?,
        })
    }

    fn ensure_enough(&self, history: &LoginHistory) -> CadenceResult<()> {
        let required = self.config.min_logins_for_prediction;
        if history.len() < required {
            return Err(PredictionError::InsufficientData {
                valid: history.len(),
                required,
            }
            .into());
        }
        Ok(())
    }
}

/// One built strategy per kind, in output order.
struct StrategySet {
    interval: Strategy,
    pattern: Strategy,
    cluster: Strategy,
}

impl StrategySet {
    fn iter(&self) -> impl Iterator<Item = &Strategy> {
        [&self.interval, &self.pattern, &self.cluster].into_iter()
    }

    fn predict(&self, rng: &mut dyn RngCore) -> CadenceResult<PredictionBundle> {
        Ok(PredictionBundle {
            average_interval: run(&self.interval, rng)?,
            pattern_analysis: run(&self.pattern, rng)?,
            gaussian_mixture: run(&self.cluster, rng)?,
        })
    }
}

fn run(strategy: &Strategy, rng: &mut dyn RngCore) -> CadenceResult<StrategyPrediction> {
    let mut prediction = StrategyPrediction::new(strategy.predict(rng)?);
    prediction.next_cluster = strategy.next_cluster();
    Ok(prediction)
}

/// Listing entry per user: id, name, and login count.
pub fn summarize_users(users: &[UserRecord]) -> Vec<UserSummary> {
    users.iter().map(UserRecord::summary).collect()
}

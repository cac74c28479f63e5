//! Cluster prediction strategy.
//!
//! Logins are split into six fixed clusters (weekday/weekend ×
//! morning/afternoon/evening). Each cluster with at least two logins gets
//! the mean and population standard deviation of its internal gaps. The
//! next cluster is drawn once, at construction, from a fixed transition
//! table; a prediction samples a Gaussian gap for that cluster, adds it to
//! the last login, and snaps the result into the cluster.
//!
//! Non-deterministic: every random draw comes from the caller's `RngCore`.

pub mod sampling;
pub mod stats;
pub mod transitions;

use std::collections::BTreeMap;

use cadence_core::config::defaults::DEFAULT_MIN_INTERVAL_HOURS;
use cadence_core::errors::{CadenceResult, PredictionError};
use cadence_core::models::timestamp::hours_to_delta;
use cadence_core::models::{
    ClusterDiagnostics, ClusterSummary, LoginCluster, LoginHistory, PredictorDiagnostics,
    PredictorKind,
};
use cadence_core::traits::ILoginPredictor;
use chrono::{DateTime, Utc};
use rand::RngCore;
use tracing::debug;

pub use stats::ClusterStats;

use super::{add_days, round2, shift};

#[derive(Debug, Clone)]
pub struct ClusterPredictor {
    history: LoginHistory,
    members: BTreeMap<LoginCluster, Vec<DateTime<Utc>>>,
    stats: BTreeMap<LoginCluster, ClusterStats>,
    last_cluster: LoginCluster,
    next_cluster: LoginCluster,
    min_interval_hours: f64,
}

impl ClusterPredictor {
    /// Cluster the history and draw the next cluster from `rng`.
    pub fn new(history: LoginHistory, rng: &mut dyn RngCore) -> CadenceResult<Self> {
        let last = history.last().ok_or(PredictionError::EmptyHistory)?;
        let last_cluster = LoginCluster::classify(&last);
        let next_cluster = transitions::draw_next_cluster(last_cluster, rng);
        Ok(Self::assemble(history, last_cluster, next_cluster))
    }

    /// Cluster the history with a fixed next cluster instead of a draw.
    pub fn with_next_cluster(
        history: LoginHistory,
        next_cluster: LoginCluster,
    ) -> CadenceResult<Self> {
        let last = history.last().ok_or(PredictionError::EmptyHistory)?;
        Ok(Self::assemble(
            history,
            LoginCluster::classify(&last),
            next_cluster,
        ))
    }

    /// Override the floor applied to sampled gaps (hours).
    pub fn with_min_interval(mut self, hours: f64) -> Self {
        self.min_interval_hours = hours;
        self
    }

    fn assemble(
        history: LoginHistory,
        last_cluster: LoginCluster,
        next_cluster: LoginCluster,
    ) -> Self {
        let members = stats::group_by_cluster(&history);
        let stats: BTreeMap<_, _> = members
            .iter()
            .filter_map(|(cluster, logins)| {
                ClusterStats::from_members(logins).map(|stats| (*cluster, stats))
            })
            .collect();

        debug!(
            logins = history.len(),
            clusters_with_stats = stats.len(),
            %last_cluster,
            %next_cluster,
            "cluster model built"
        );

        Self {
            history,
            members,
            stats,
            last_cluster,
            next_cluster,
            min_interval_hours: DEFAULT_MIN_INTERVAL_HOURS,
        }
    }

    /// Logins that fell into `cluster`, oldest first.
    pub fn members(&self, cluster: LoginCluster) -> &[DateTime<Utc>] {
        self.members.get(&cluster).map(Vec::as_slice).unwrap_or_default()
    }

    /// Interval statistics, `None` for clusters with fewer than two logins.
    pub fn stats(&self, cluster: LoginCluster) -> Option<&ClusterStats> {
        self.stats.get(&cluster)
    }

    pub fn last_cluster(&self) -> LoginCluster {
        self.last_cluster
    }
}

impl ILoginPredictor for ClusterPredictor {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Cluster
    }

    fn history(&self) -> &LoginHistory {
        &self.history
    }

    /// Sample a gap for the next cluster and snap the result into it.
    ///
    /// Without statistics for the next cluster the last login is returned
    /// unchanged. A snapped result at or before the last login is rolled
    /// forward a day at a time, re-aligning the day type each step.
    fn predict(&self, rng: &mut dyn RngCore) -> CadenceResult<DateTime<Utc>> {
        let last = self.last_login()?;

        let Some(stats) = self.stats.get(&self.next_cluster) else {
            debug!(next_cluster = %self.next_cluster, "no statistics for next cluster, keeping last login");
            return Ok(last);
        };

        let z = sampling::standard_normal(rng);
        let interval_hours = (stats.mean_hours + z * stats.std_dev_hours).max(self.min_interval_hours);
        let candidate = shift(last, hours_to_delta(interval_hours)?)?;

        let mut predicted = sampling::snap_to_cluster(candidate, self.next_cluster, rng)?;
        while predicted <= last {
            predicted = sampling::align_day_type(add_days(predicted, 1)?, self.next_cluster.day_type())?;
        }

        debug!(z, interval_hours, %candidate, %predicted, "cluster prediction sampled");
        Ok(predicted)
    }

    fn diagnostics(&self) -> PredictorDiagnostics {
        let clusters = self
            .stats
            .iter()
            .map(|(cluster, stats)| ClusterSummary {
                cluster: *cluster,
                label: cluster.label().to_string(),
                count: stats.count,
                mean_interval_hours: round2(stats.mean_hours),
                std_dev_hours: round2(stats.std_dev_hours),
            })
            .collect();

        PredictorDiagnostics::Cluster(ClusterDiagnostics {
            clusters,
            last_cluster: self.last_cluster,
            next_cluster: self.next_cluster,
        })
    }

    fn next_cluster(&self) -> Option<LoginCluster> {
        Some(self.next_cluster)
    }
}

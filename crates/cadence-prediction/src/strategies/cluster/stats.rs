use std::collections::BTreeMap;

use cadence_core::models::timestamp::hours_between;
use cadence_core::models::{LoginCluster, LoginHistory};
use chrono::{DateTime, Utc};

/// Interval statistics for one cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterStats {
    /// Logins in the cluster.
    pub count: usize,
    /// Mean gap between consecutive logins of the cluster (hours).
    pub mean_hours: f64,
    /// Population standard deviation of those gaps (hours).
    pub std_dev_hours: f64,
}

impl ClusterStats {
    /// Statistics over sorted cluster members. `None` below two members.
    pub fn from_members(members: &[DateTime<Utc>]) -> Option<Self> {
        if members.len() < 2 {
            return None;
        }

        let intervals: Vec<f64> = members
            .windows(2)
            .map(|pair| hours_between(pair[0], pair[1]))
            .collect();
        let n = intervals.len() as f64;
        let mean_hours = intervals.iter().sum::<f64>() / n;
        let variance = intervals
            .iter()
            .map(|interval| (interval - mean_hours).powi(2))
            .sum::<f64>()
            / n;

        Some(Self {
            count: members.len(),
            mean_hours,
            std_dev_hours: variance.sqrt(),
        })
    }
}

/// Group a sorted history by cluster. Members keep chronological order.
pub fn group_by_cluster(history: &LoginHistory) -> BTreeMap<LoginCluster, Vec<DateTime<Utc>>> {
    let mut clusters: BTreeMap<LoginCluster, Vec<DateTime<Utc>>> = BTreeMap::new();
    for login in history.iter() {
        clusters
            .entry(LoginCluster::classify(login))
            .or_default()
            .push(*login);
    }
    clusters
}

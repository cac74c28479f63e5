//! Fixed cluster-to-cluster transition probabilities.
//!
//! Rows are walked in declaration order when drawing the next cluster.
//! Every row sums to 1.0 and stays within its own day type.

use cadence_core::models::LoginCluster;
use rand::{Rng, RngCore};

use LoginCluster::*;

/// Probabilities of moving from one cluster to each target.
pub type TransitionRow = &'static [(LoginCluster, f64)];

/// One row per cluster.
pub static TRANSITIONS: [(LoginCluster, TransitionRow); 6] = [
    (
        WeekdayMorning,
        &[(WeekdayAfternoon, 0.6), (WeekdayEvening, 0.3), (WeekdayMorning, 0.1)],
    ),
    (
        WeekdayAfternoon,
        &[(WeekdayEvening, 0.7), (WeekdayMorning, 0.2), (WeekdayAfternoon, 0.1)],
    ),
    (
        WeekdayEvening,
        &[(WeekdayMorning, 0.6), (WeekdayAfternoon, 0.3), (WeekdayEvening, 0.1)],
    ),
    (
        WeekendMorning,
        &[(WeekendAfternoon, 0.6), (WeekendEvening, 0.3), (WeekendMorning, 0.1)],
    ),
    (
        WeekendAfternoon,
        &[(WeekendEvening, 0.7), (WeekendMorning, 0.2), (WeekendAfternoon, 0.1)],
    ),
    (
        WeekendEvening,
        &[(WeekendMorning, 0.6), (WeekendAfternoon, 0.3), (WeekendEvening, 0.1)],
    ),
];

pub fn transition_row(from: LoginCluster) -> Option<TransitionRow> {
    TRANSITIONS
        .iter()
        .find(|(cluster, _)| *cluster == from)
        .map(|(_, row)| *row)
}

/// Pick the first target whose cumulative probability reaches `u`.
///
/// Falls back to `from` when it has no row or when rounding leaves `u`
/// above the row's total.
pub fn select_next_cluster(from: LoginCluster, u: f64) -> LoginCluster {
    let Some(row) = transition_row(from) else {
        return from;
    };

    let mut cumulative = 0.0;
    for &(target, probability) in row {
        cumulative += probability;
        if u <= cumulative {
            return target;
        }
    }
    from
}

/// Draw the next cluster with one uniform sample from `rng`.
pub fn draw_next_cluster(from: LoginCluster, rng: &mut dyn RngCore) -> LoginCluster {
    let u: f64 = rng.random();
    select_next_cluster(from, u)
}

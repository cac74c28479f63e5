//! Random draws used by the cluster strategy: Gaussian intervals and
//! snapping a candidate into a cluster's hour and day constraints.

use std::f64::consts::PI;

use cadence_core::errors::CadenceResult;
use cadence_core::models::timestamp::at_time;
use cadence_core::models::{DayType, LoginCluster, TimeOfDay};
use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::distr::{Distribution, OpenClosed01};
use rand::{Rng, RngCore};

use crate::strategies::add_days;

/// Box-Muller transform of two uniforms into a standard normal variate.
///
/// `u1` must lie in (0, 1]; `u1 = 0` diverges.
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// One standard normal draw. `u1` is sampled from (0, 1] so the log stays finite.
pub fn standard_normal(rng: &mut dyn RngCore) -> f64 {
    let u1: f64 = OpenClosed01.sample(rng);
    let u2: f64 = rng.random();
    box_muller(u1, u2)
}

/// Uniform hour inside a time-of-day bucket. Evening first picks one of its
/// two ranges (18–23, 0–4) with equal odds.
pub fn random_hour(time_of_day: TimeOfDay, rng: &mut dyn RngCore) -> u32 {
    let ranges = time_of_day.hour_ranges();
    let (lo, hi) = match ranges {
        [only] => *only,
        _ => ranges[rng.random_range(0..ranges.len())],
    };
    rng.random_range(lo..=hi)
}

/// Move `ts` onto the next day of the wanted type.
///
/// Weekend targets advance to the upcoming Saturday; weekday targets move
/// Sunday → Monday (+1) and Saturday → Monday (+2).
pub fn align_day_type(ts: DateTime<Utc>, day_type: DayType) -> CadenceResult<DateTime<Utc>> {
    let weekday = ts.weekday();
    let days = match (DayType::of(weekday), day_type) {
        (DayType::Weekday, DayType::Weekend) => 6 - weekday.num_days_from_sunday(),
        (DayType::Weekend, DayType::Weekday) => {
            if weekday.num_days_from_sunday() == 0 {
                1
            } else {
                2
            }
        }
        _ => 0,
    };
    add_days(ts, u64::from(days))
}

/// Snap a candidate into `target`'s constraints.
///
/// Order: time of day first (same calendar date, random hour and minute in
/// the bucket, seconds zeroed), then day type. The time step never changes
/// the date and the day step never changes the time, so the result always
/// satisfies both.
pub fn snap_to_cluster(
    candidate: DateTime<Utc>,
    target: LoginCluster,
    rng: &mut dyn RngCore,
) -> CadenceResult<DateTime<Utc>> {
    let mut snapped = candidate;

    if TimeOfDay::of_hour(snapped.hour()) != target.time_of_day() {
        let hour = random_hour(target.time_of_day(), rng);
        let minute = rng.random_range(0..=59);
        snapped = at_time(snapped.date_naive(), hour, minute);
    }

    align_day_type(snapped, target.day_type())
}

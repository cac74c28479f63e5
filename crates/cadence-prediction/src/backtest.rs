//! Backtest scoring: how far a held-out prediction landed from the login
//! that was withheld.
//!
//! The score is piecewise-linear in the hour difference, truncated to an
//! integer, and clamped to 10–100:
//!
//! | Hours | Score |
//! |-------|-------|
//! | [0, 1) | 100 − 10h |
//! | [1, 3) | 90 − 5(h−1) |
//! | [3, 6) | 80 − (10/3)(h−3) |
//! | [6, 12) | 70 − (10/6)(h−6) |
//! | [12, 24) | 60 − (10/12)(h−12) |
//! | [24, 48) | 50 − (20/24)(h−24) |
//! | [48, 72) | 30 − (10/24)(h−48) |
//! | [72, 96) | 20 − (10/24)(h−72) |
//! | ≥ 96 | 10 |

use cadence_core::constants::{MAX_BACKTEST_SCORE, MIN_BACKTEST_SCORE, SECONDS_PER_HOUR};
use cadence_core::models::BacktestScore;
use chrono::{DateTime, Utc};

use crate::strategies::round2;

/// (upper bound exclusive, score at band start, band start, points lost per hour)
const BANDS: [(f64, i64, f64, f64); 8] = [
    (1.0, 100, 0.0, 10.0),
    (3.0, 90, 1.0, 5.0),
    (6.0, 80, 3.0, 10.0 / 3.0),
    (12.0, 70, 6.0, 10.0 / 6.0),
    (24.0, 60, 12.0, 10.0 / 12.0),
    (48.0, 50, 24.0, 20.0 / 24.0),
    (72.0, 30, 48.0, 10.0 / 24.0),
    (96.0, 20, 72.0, 10.0 / 24.0),
];

/// Score for an absolute hour difference. Non-increasing in `hours`.
pub fn band_score(hours: f64) -> u8 {
    let raw = BANDS
        .iter()
        .find(|(upper, ..)| hours < *upper)
        .map(|&(_, base, start, slope)| base - ((hours - start) * slope) as i64)
        .unwrap_or(i64::from(MIN_BACKTEST_SCORE));

    raw.clamp(i64::from(MIN_BACKTEST_SCORE), i64::from(MAX_BACKTEST_SCORE)) as u8
}

/// Score a held-out prediction against the withheld login.
pub fn score_backtest(predicted: DateTime<Utc>, actual: DateTime<Utc>) -> BacktestScore {
    let hours = (predicted - actual).num_seconds().unsigned_abs() as f64 / SECONDS_PER_HOUR;
    BacktestScore {
        score: band_score(hours),
        hour_difference: round2(hours),
        predicted,
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(band_score(0.0), 100);
        assert_eq!(band_score(0.5), 95);
        assert_eq!(band_score(1.0), 90);
        assert_eq!(band_score(3.0), 80);
        assert_eq!(band_score(6.0), 70);
        assert_eq!(band_score(12.0), 60);
        assert_eq!(band_score(24.0), 50);
        assert_eq!(band_score(47.9), 31);
        assert_eq!(band_score(48.0), 30);
        assert_eq!(band_score(72.0), 20);
        assert_eq!(band_score(96.0), 10);
        assert_eq!(band_score(10_000.0), 10);
    }

    #[test]
    fn fractional_points_are_truncated() {
        // 90 - trunc(0.9 * 5) = 90 - 4
        assert_eq!(band_score(1.9), 86);
    }

    #[test]
    fn out_of_domain_inputs_stay_bounded() {
        assert_eq!(band_score(-5.0), 100);
        assert_eq!(band_score(f64::INFINITY), 10);
        assert_eq!(band_score(f64::NAN), 10);
    }
}

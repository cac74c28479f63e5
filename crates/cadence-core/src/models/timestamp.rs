//! Timestamp helpers shared by every strategy.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::constants::{SECONDS_PER_HOUR, TIMESTAMP_FORMAT};
use crate::errors::PredictionError;

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Elapsed hours from `earlier` to `later`, at second resolution.
pub fn hours_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_seconds() as f64 / SECONDS_PER_HOUR
}

/// Fractional hours as a whole-second delta, truncated toward zero.
///
/// Non-finite values and spans beyond `Duration`'s range are rejected.
pub fn hours_to_delta(hours: f64) -> Result<Duration, PredictionError> {
    let seconds = hours * SECONDS_PER_HOUR;
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return Err(out_of_range(hours));
    }
    Duration::try_seconds(seconds as i64).ok_or_else(|| out_of_range(hours))
}

fn out_of_range(hours: f64) -> PredictionError {
    PredictionError::TimestampOutOfRange {
        details: format!("interval of {hours} hours"),
    }
}

/// `date` at `hour:minute:00` UTC.
pub fn at_time(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (midnight + Duration::hours(i64::from(hour)) + Duration::minutes(i64::from(minute))).and_utc()
}

/// Parse the display format back into a UTC timestamp.
pub fn parse_display(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` wire format.
pub mod display_format {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_display(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hours_between_uses_second_resolution() {
        let a = Utc.with_ymd_and_hms(2025, 4, 1, 10, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 4, 1, 14, 30, 0).unwrap();
        assert_eq!(hours_between(a, b), 4.5);
    }

    #[test]
    fn hours_to_delta_truncates() {
        // 1.0001h = 3600.36s
        assert_eq!(hours_to_delta(1.0001).unwrap().num_seconds(), 3600);
    }

    #[test]
    fn hours_to_delta_rejects_unrepresentable_spans() {
        for hours in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 1e300, 1e15] {
            assert!(
                matches!(
                    hours_to_delta(hours),
                    Err(PredictionError::TimestampOutOfRange { .. })
                ),
                "{hours}"
            );
        }
    }

    #[test]
    fn display_format_round_trips() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 1, 7, 26, 0).unwrap();
        let s = format_timestamp(&ts);
        assert_eq!(s, "2025-05-01 07:26:00");
        assert_eq!(parse_display(&s).unwrap(), ts);
    }
}

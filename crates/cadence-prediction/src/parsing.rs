//! Raw login strings → `LoginHistory`.
//!
//! Malformed entries are dropped and kept as diagnostics; they never abort
//! the rest of the user's history.

use cadence_core::errors::PredictionError;
use cadence_core::models::LoginHistory;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

/// Naive formats accepted after RFC 3339, interpreted as UTC. A trailing
/// `Z` is stripped first, so `2025-04-01T04:47Z` lands here too.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Minute-precision forms with an explicit offset.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// A parsed history plus the entries that were rejected.
#[derive(Debug, Default)]
pub struct ParsedHistory {
    pub history: LoginHistory,
    /// One `MalformedTimestamp` per dropped entry, in input order.
    pub rejected: Vec<PredictionError>,
}

impl ParsedHistory {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse one ISO-8601 timestamp. Offsets are converted to UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, PredictionError> {
    let value = raw.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(value) {
        Ok(ts) => return Ok(ts.with_timezone(&Utc)),
        Err(e) => e,
    };

    if let Some(ts) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(ts.with_timezone(&Utc));
    }

    let naive = value.strip_suffix(['Z', 'z']).unwrap_or(value);
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| PredictionError::MalformedTimestamp {
            value: raw.to_string(),
            reason: rfc3339_err.to_string(),
        })
}

/// Parse a user's raw logins, dropping and recording malformed entries.
pub fn parse_logins(user_id: &str, raw: &[String]) -> ParsedHistory {
    let mut timestamps = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();

    for value in raw {
        match parse_timestamp(value) {
            Ok(ts) => timestamps.push(ts),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "dropping malformed login timestamp");
                rejected.push(e);
            }
        }
    }

    ParsedHistory {
        history: LoginHistory::new(timestamps),
        rejected,
    }
}

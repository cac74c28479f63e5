use chrono::{DateTime, Utc};

use super::timestamp::hours_between;

/// One user's login timestamps, always sorted ascending.
///
/// Built from a private copy of the caller's list; the caller's order is
/// never touched. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginHistory {
    timestamps: Vec<DateTime<Utc>>,
}

impl LoginHistory {
    /// Take ownership of `timestamps` and sort them.
    pub fn new(mut timestamps: Vec<DateTime<Utc>>) -> Self {
        timestamps.sort();
        Self { timestamps }
    }

    /// Sort a copy of `timestamps`.
    pub fn from_slice(timestamps: &[DateTime<Utc>]) -> Self {
        Self::new(timestamps.to_vec())
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn as_slice(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateTime<Utc>> {
        self.timestamps.iter()
    }

    /// The most recent login.
    pub fn last(&self) -> Option<DateTime<Utc>> {
        self.timestamps.last().copied()
    }

    /// Gaps between consecutive logins, in hours.
    pub fn intervals_hours(&self) -> Vec<f64> {
        self.timestamps
            .windows(2)
            .map(|pair| hours_between(pair[0], pair[1]))
            .collect()
    }

    /// Split off the most recent login, returning the remaining history and
    /// the withheld timestamp. `None` when the history is empty.
    pub fn split_last(&self) -> Option<(LoginHistory, DateTime<Utc>)> {
        let (last, rest) = self.timestamps.split_last()?;
        Some((
            LoginHistory {
                timestamps: rest.to_vec(),
            },
            *last,
        ))
    }
}

impl FromIterator<DateTime<Utc>> for LoginHistory {
    fn from_iter<I: IntoIterator<Item = DateTime<Utc>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

use cadence_core::constants::DAY_NAMES;
use cadence_core::errors::{CadenceResult, PredictionError};
use cadence_core::models::timestamp::at_time;
use cadence_core::models::{
    DayCount, HourCount, LoginHistory, PatternDiagnostics, PredictorDiagnostics, PredictorKind,
};
use cadence_core::traits::ILoginPredictor;
use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::RngCore;

use super::add_days;

/// Pattern prediction strategy.
///
/// Builds weekday (Sunday = 0) and hour-of-day histograms and predicts the
/// next occurrence of the busiest weekday at the busiest hour, on the hour.
/// Never predicts the same day at or before the last login's hour.
#[derive(Debug, Clone)]
pub struct PatternPredictor {
    history: LoginHistory,
    day_frequency: [usize; 7],
    hour_frequency: [usize; 24],
    most_frequent_day: u32,
    most_frequent_hour: u32,
}

impl PatternPredictor {
    pub fn new(history: LoginHistory) -> CadenceResult<Self> {
        if history.is_empty() {
            return Err(PredictionError::EmptyHistory.into());
        }

        let mut day_frequency = [0usize; 7];
        let mut hour_frequency = [0usize; 24];
        for login in history.iter() {
            day_frequency[login.weekday().num_days_from_sunday() as usize] += 1;
            hour_frequency[login.hour() as usize] += 1;
        }

        Ok(Self {
            most_frequent_day: arg_max(&day_frequency) as u32,
            most_frequent_hour: arg_max(&hour_frequency) as u32,
            history,
            day_frequency,
            hour_frequency,
        })
    }

    /// Logins per weekday, Sunday first.
    pub fn day_frequency(&self) -> &[usize; 7] {
        &self.day_frequency
    }

    /// Logins per hour of day.
    pub fn hour_frequency(&self) -> &[usize; 24] {
        &self.hour_frequency
    }

    /// Busiest weekday, 0 = Sunday.
    pub fn most_frequent_day(&self) -> u32 {
        self.most_frequent_day
    }

    pub fn most_frequent_hour(&self) -> u32 {
        self.most_frequent_hour
    }
}

/// Index of the largest count; ties go to the lowest index.
fn arg_max(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = i;
        }
    }
    best
}

impl ILoginPredictor for PatternPredictor {
    fn kind(&self) -> PredictorKind {
        PredictorKind::Pattern
    }

    fn history(&self) -> &LoginHistory {
        &self.history
    }

    fn predict(&self, _rng: &mut dyn RngCore) -> CadenceResult<DateTime<Utc>> {
        let last = self.last_login()?;
        let current_day = last.weekday().num_days_from_sunday();

        let mut days_to_add = (self.most_frequent_day + 7 - current_day) % 7;
        if days_to_add == 0 && last.hour() >= self.most_frequent_hour {
            days_to_add = 7;
        }

        let target_day = add_days(last, u64::from(days_to_add))?;
        Ok(at_time(target_day.date_naive(), self.most_frequent_hour, 0))
    }

    fn diagnostics(&self) -> PredictorDiagnostics {
        let day_frequency = DAY_NAMES
            .iter()
            .zip(self.day_frequency)
            .map(|(day, count)| DayCount {
                day: (*day).to_string(),
                count,
            })
            .collect();

        let hour_frequency = self
            .hour_frequency
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(hour, &count)| HourCount {
                hour: format!("{hour:02}:00"),
                count,
            })
            .collect();

        PredictorDiagnostics::Pattern(PatternDiagnostics {
            day_frequency,
            hour_frequency,
            most_frequent_day: DAY_NAMES[self.most_frequent_day as usize].to_string(),
            most_frequent_hour: format!("{:02}:00", self.most_frequent_hour),
        })
    }
}

//! The six fixed login clusters: day type × time of day.

use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Weekday (Mon–Fri) or weekend (Sat/Sun).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn of(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }
}

/// Time-of-day bucket. Evening wraps midnight: 18–23 and 0–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Bucket for an hour of day (0–23).
    pub fn of_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Inclusive hour ranges belonging to this bucket.
    pub fn hour_ranges(self) -> &'static [(u32, u32)] {
        match self {
            Self::Morning => &[(5, 11)],
            Self::Afternoon => &[(12, 17)],
            Self::Evening => &[(18, 23), (0, 4)],
        }
    }
}

/// One of the six fixed clusters used by the cluster strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LoginCluster {
    WeekdayMorning,
    WeekdayAfternoon,
    WeekdayEvening,
    WeekendMorning,
    WeekendAfternoon,
    WeekendEvening,
}

impl LoginCluster {
    /// All clusters in display order.
    pub const ALL: [LoginCluster; 6] = [
        Self::WeekdayMorning,
        Self::WeekdayAfternoon,
        Self::WeekdayEvening,
        Self::WeekendMorning,
        Self::WeekendAfternoon,
        Self::WeekendEvening,
    ];

    pub fn new(day_type: DayType, time_of_day: TimeOfDay) -> Self {
        match (day_type, time_of_day) {
            (DayType::Weekday, TimeOfDay::Morning) => Self::WeekdayMorning,
            (DayType::Weekday, TimeOfDay::Afternoon) => Self::WeekdayAfternoon,
            (DayType::Weekday, TimeOfDay::Evening) => Self::WeekdayEvening,
            (DayType::Weekend, TimeOfDay::Morning) => Self::WeekendMorning,
            (DayType::Weekend, TimeOfDay::Afternoon) => Self::WeekendAfternoon,
            (DayType::Weekend, TimeOfDay::Evening) => Self::WeekendEvening,
        }
    }

    /// Cluster a login falls into. Total over every (weekday, hour) pair.
    pub fn classify(ts: &DateTime<Utc>) -> Self {
        Self::new(DayType::of(ts.weekday()), TimeOfDay::of_hour(ts.hour()))
    }

    pub fn day_type(self) -> DayType {
        match self {
            Self::WeekdayMorning | Self::WeekdayAfternoon | Self::WeekdayEvening => {
                DayType::Weekday
            }
            _ => DayType::Weekend,
        }
    }

    pub fn time_of_day(self) -> TimeOfDay {
        match self {
            Self::WeekdayMorning | Self::WeekendMorning => TimeOfDay::Morning,
            Self::WeekdayAfternoon | Self::WeekendAfternoon => TimeOfDay::Afternoon,
            Self::WeekdayEvening | Self::WeekendEvening => TimeOfDay::Evening,
        }
    }

    /// Stable machine key, e.g. `weekday_morning`.
    pub fn key(self) -> &'static str {
        match self {
            Self::WeekdayMorning => "weekday_morning",
            Self::WeekdayAfternoon => "weekday_afternoon",
            Self::WeekdayEvening => "weekday_evening",
            Self::WeekendMorning => "weekend_morning",
            Self::WeekendAfternoon => "weekend_afternoon",
            Self::WeekendEvening => "weekend_evening",
        }
    }

    /// Human-readable label with the hour range.
    pub fn label(self) -> &'static str {
        match self {
            Self::WeekdayMorning => "Weekday morning (05-11)",
            Self::WeekdayAfternoon => "Weekday afternoon (12-17)",
            Self::WeekdayEvening => "Weekday evening (18-04)",
            Self::WeekendMorning => "Weekend morning (05-11)",
            Self::WeekendAfternoon => "Weekend afternoon (12-17)",
            Self::WeekendEvening => "Weekend evening (18-04)",
        }
    }
}

impl fmt::Display for LoginCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

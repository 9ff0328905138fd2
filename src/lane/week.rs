use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize, Serializer};

/// Which weekday opens a calendar week
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum WeekStartsOn {
    Monday,
    #[default]
    Sunday,
}

/// First day of the week containing `date` under the given convention
pub fn week_start_of(date: NaiveDate, starts_on: WeekStartsOn) -> NaiveDate {
    let days_back = match starts_on {
        WeekStartsOn::Monday => date.weekday().num_days_from_monday(),
        WeekStartsOn::Sunday => date.weekday().num_days_from_sunday(),
    };
    date - Duration::days(i64::from(days_back))
}

/// Identifies one calendar week under a specific start-of-week convention.
///
/// The year/week pair is taken from the ISO week of the Monday inside the
/// week, so every day of a week maps to the same key and keys cannot collide
/// across year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
    pub starts_on: WeekStartsOn,
}

impl WeekKey {
    /// Key of the week containing `date`
    pub fn for_date(date: NaiveDate, starts_on: WeekStartsOn) -> Self {
        let start = week_start_of(date, starts_on);
        let monday = match starts_on {
            WeekStartsOn::Monday => start,
            WeekStartsOn::Sunday => start + Duration::days(1),
        };
        let iso = monday.iso_week();
        WeekKey {
            year: iso.year(),
            week: iso.week(),
            starts_on,
        }
    }

    /// Inclusive first and last day of the identified week
    pub fn date_range(self) -> (NaiveDate, NaiveDate) {
        let monday =
            NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon).unwrap_or_default();
        let start = match self.starts_on {
            WeekStartsOn::Monday => monday,
            WeekStartsOn::Sunday => monday - Duration::days(1),
        };
        (start, start + Duration::days(6))
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl Serialize for WeekKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

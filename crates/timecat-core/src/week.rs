//! Monday-based week windows.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Inclusive window from Monday 00:00:00 to Sunday 23:59:59.999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekRange {
    /// Week containing `date`, shifted by `offset_weeks` (-1 = last week, 1 = next week).
    pub fn containing(date: NaiveDate, offset_weeks: i64) -> Self {
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            + Duration::weeks(offset_weeks);
        let sunday = monday + Duration::days(6);
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        Self {
            start: monday.and_time(NaiveTime::MIN),
            end: sunday.and_time(end_of_day),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, at: &NaiveDateTime) -> bool {
        self.start <= *at && *at <= self.end
    }

    /// `MM/DD/YYYY to MM/DD/YYYY`.
    pub fn label(&self) -> String {
        format!(
            "{} to {}",
            self.first_day().format("%m/%d/%Y"),
            self.last_day().format("%m/%d/%Y")
        )
    }
}

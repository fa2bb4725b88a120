//! Meeting records as delivered by a calendar source.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::rounding::round_up_30;

/// Series id used when the source has no conversation/series identifier.
pub const NO_SERIES: &str = "N/A";

/// One scheduled calendar occurrence.
///
/// Everything except `duration_minutes` is treated as read-only once the
/// record is built. Duration may be adjusted in place before re-aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub subject: String,
    /// Raw organizer text; may hold several comma-separated names.
    pub organizer: String,
    /// Wall-clock start as provided by the source.
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default = "default_series_id")]
    pub series_id: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Provider-side labels; carried for display, never scored.
    #[serde(default)]
    pub labels: Vec<String>,
}

fn default_series_id() -> String {
    NO_SERIES.to_string()
}

impl MeetingRecord {
    /// Create a one-off meeting with the required fields.
    pub fn new(
        subject: impl Into<String>,
        organizer: impl Into<String>,
        start_time: NaiveDateTime,
        duration_minutes: u32,
    ) -> Self {
        Self {
            subject: subject.into(),
            organizer: organizer.into(),
            start_time,
            end_time: None,
            duration_minutes,
            is_recurring: false,
            series_id: default_series_id(),
            location: None,
            labels: Vec::new(),
        }
    }

    /// Mark the meeting as an instance of a recurring series.
    pub fn recurring(mut self, series_id: impl Into<String>) -> Self {
        self.is_recurring = true;
        self.series_id = series_id.into();
        self
    }

    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Full English weekday name ("Monday").
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    /// Duration rounded up to the next 30-minute block.
    pub fn rounded_duration(&self) -> u32 {
        round_up_30(self.duration_minutes)
    }

    /// Subject followed by organizer, the corpus keywords are matched against.
    pub fn searchable_text(&self) -> String {
        searchable_text(&self.subject, &self.organizer)
    }

    /// Organizer text before the first comma ("Smith, John" -> "Smith").
    pub fn organizer_short(&self) -> &str {
        self.organizer.split(',').next().unwrap_or("").trim()
    }
}

/// Text the categorizer scores: subject and organizer joined by a space.
pub fn searchable_text(subject: &str, organizer: &str) -> String {
    format!("{subject} {organizer}")
}

/// Full English weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A meeting as read from an external export, before normalization.
///
/// Every field is optional so that a malformed record can be reported
/// precisely instead of failing the whole deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMeeting {
    pub subject: Option<String>,
    pub organizer: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub duration_minutes: Option<i64>,
    pub is_recurring: Option<bool>,
    pub series_id: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl TryFrom<RawMeeting> for MeetingRecord {
    type Error = CoreError;

    fn try_from(raw: RawMeeting) -> Result<Self> {
        let subject = raw
            .subject
            .ok_or_else(|| CoreError::invalid_record("subject", "is missing"))?;
        let organizer = raw
            .organizer
            .ok_or_else(|| CoreError::invalid_record("organizer", "is missing"))?;
        let start_time = raw
            .start_time
            .ok_or_else(|| CoreError::invalid_record("start_time", "is missing"))?;
        let duration = raw
            .duration_minutes
            .ok_or_else(|| CoreError::invalid_record("duration_minutes", "is missing"))?;
        let duration_minutes = u32::try_from(duration).map_err(|_| {
            CoreError::invalid_record(
                "duration_minutes",
                format!("must be between 0 and {}, got {duration}", u32::MAX),
            )
        })?;

        Ok(Self {
            subject,
            organizer,
            start_time,
            end_time: raw.end_time,
            duration_minutes,
            is_recurring: raw.is_recurring.unwrap_or(false),
            series_id: raw.series_id.unwrap_or_else(default_series_id),
            location: raw.location,
            labels: raw.labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn raw() -> RawMeeting {
        RawMeeting {
            subject: Some("Weekly Team Standup".into()),
            organizer: Some("Smith, John".into()),
            start_time: Some(at(2026, 10, 19, 9, 0)),
            duration_minutes: Some(25),
            ..Default::default()
        }
    }

    #[test]
    fn derived_fields() {
        let m = MeetingRecord::new("Weekly Team Standup", "Smith, John", at(2026, 10, 19, 9, 0), 25);
        assert_eq!(m.weekday(), Weekday::Mon);
        assert_eq!(m.weekday_name(), "Monday");
        assert_eq!(m.rounded_duration(), 30);
        assert_eq!(m.searchable_text(), "Weekly Team Standup Smith, John");
        assert_eq!(m.organizer_short(), "Smith");
        assert_eq!(m.series_id, NO_SERIES);
        assert!(!m.is_recurring);
    }

    #[test]
    fn recurring_sets_series() {
        let m = MeetingRecord::new("Sync", "", at(2026, 10, 20, 9, 0), 30).recurring("abc");
        assert!(m.is_recurring);
        assert_eq!(m.series_id, "abc");
    }

    #[test]
    fn raw_meeting_normalizes_with_defaults() {
        let m = MeetingRecord::try_from(raw()).unwrap();
        assert_eq!(m.subject, "Weekly Team Standup");
        assert_eq!(m.duration_minutes, 25);
        assert_eq!(m.series_id, NO_SERIES);
        assert!(!m.is_recurring);
    }

    #[test]
    fn raw_meeting_missing_subject_is_invalid() {
        let mut r = raw();
        r.subject = None;
        match MeetingRecord::try_from(r) {
            Err(CoreError::InvalidRecord { field, .. }) => assert_eq!(field, "subject"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn raw_meeting_negative_duration_is_invalid() {
        let mut r = raw();
        r.duration_minutes = Some(-15);
        match MeetingRecord::try_from(r) {
            Err(CoreError::InvalidRecord { field, .. }) => assert_eq!(field, "duration_minutes"),
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn empty_strings_are_valid() {
        let mut r = raw();
        r.subject = Some(String::new());
        r.organizer = Some(String::new());
        assert!(MeetingRecord::try_from(r).is_ok());
    }

    #[test]
    fn deserializes_from_json_without_optional_fields() {
        let json = r#"{
            "subject": "Sprint Review",
            "organizer": "Doe, Jane",
            "start_time": "2026-10-21T14:00:00",
            "duration_minutes": 45
        }"#;
        let m: MeetingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(m.weekday(), Weekday::Wed);
        assert_eq!(m.series_id, NO_SERIES);
        assert!(m.labels.is_empty());
    }
}

//! Calendar sources: where meeting records come from.
//!
//! The categorizer and aggregator never talk to a calendar provider. A
//! source hands them already-normalized [`MeetingRecord`]s for a week.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};
use crate::meeting::{MeetingRecord, RawMeeting};
use crate::week::WeekRange;

/// Every calendar backend implements this trait.
pub trait CalendarSource {
    /// Short identifier used in logs (e.g. "json").
    fn name(&self) -> &str;

    /// Meetings that start inside `range`, ordered by start time.
    fn fetch(&self, range: &WeekRange) -> Result<Vec<MeetingRecord>>;
}

/// Reads an exported calendar: a JSON array of meeting objects.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and normalize every record in the file, without range filtering.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `Json` if it is not an array
    /// of objects, and `InvalidRecord` (with its index) for the first record
    /// missing a required field.
    pub fn load_all(&self) -> Result<Vec<MeetingRecord>> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_meetings(&content)
    }
}

impl CalendarSource for JsonFileSource {
    fn name(&self) -> &str {
        "json"
    }

    fn fetch(&self, range: &WeekRange) -> Result<Vec<MeetingRecord>> {
        let all = self.load_all()?;
        let total = all.len();
        let mut meetings: Vec<MeetingRecord> = all
            .into_iter()
            .filter(|m| range.contains(&m.start_time))
            .collect();
        meetings.sort_by_key(|m| m.start_time);

        tracing::info!(
            path = %self.path.display(),
            total,
            in_range = meetings.len(),
            range = %range.label(),
            "loaded meetings"
        );
        Ok(meetings)
    }
}

/// Parse a JSON array of raw meetings into normalized records.
pub fn parse_meetings(json: &str) -> Result<Vec<MeetingRecord>> {
    let raw: Vec<RawMeeting> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(idx, r)| MeetingRecord::try_from(r).map_err(|e| e.at_index(idx)))
        .collect::<Result<Vec<_>, CoreError>>()
}

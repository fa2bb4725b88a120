//! Weekly report assembly.
//!
//! A [`WeeklyReport`] is the complete, serializable result of one run: the
//! day-by-day category breakdown, week totals, the detailed list of which
//! meeting went where, and recurring series. Rendering is left to callers.

use chrono::Datelike;
use serde::Serialize;

use crate::aggregate::{
    category_totals, daily_category_totals, format_duration, group_by_series, range_total,
    DayTotals, SeriesGroup, TotalsMode,
};
use crate::categorizer::Categorizer;
use crate::category::Category;
use crate::meeting::MeetingRecord;
use crate::week::WeekRange;

/// Knobs for report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub totals_mode: TotalsMode,
    /// Drop Saturday and Sunday from the daily breakdown.
    pub weekdays_only: bool,
}

/// One line of a week/day totals listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalLine {
    pub category: Category,
    pub label: &'static str,
    pub minutes: u32,
    pub formatted: String,
}

impl TotalLine {
    fn new(category: Category, minutes: u32) -> Self {
        Self {
            category,
            label: category.label(),
            minutes,
            formatted: format_duration(minutes),
        }
    }
}

/// Daily breakdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: &'static str,
    pub categories: Vec<TotalLine>,
    pub total_minutes: u32,
    pub total: String,
}

/// A categorized meeting as shown in the detailed listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingLine {
    /// Weekday and start time, e.g. "Monday 09:00".
    pub when: String,
    pub subject: String,
    pub duration: String,
    pub organizer: String,
}

/// All meetings of one category, ordered by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub label: &'static str,
    pub meetings: Vec<MeetingLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub range: String,
    pub meeting_count: usize,
    pub days: Vec<DayReport>,
    pub week_totals: Vec<TotalLine>,
    pub week_total_minutes: u32,
    pub week_total: String,
    pub week_total_hours: f64,
    pub details: Vec<CategoryDetail>,
    pub series: Vec<SeriesGroup>,
}

impl WeeklyReport {
    pub fn build(
        categorizer: &Categorizer,
        range: &WeekRange,
        meetings: &[MeetingRecord],
        options: ReportOptions,
    ) -> Self {
        let days = daily_category_totals(categorizer, meetings)
            .into_iter()
            .filter(|d| !options.weekdays_only || d.weekday.num_days_from_monday() < 5)
            .map(|d| day_report(d, options.totals_mode))
            .collect();

        let totals = category_totals(categorizer, meetings);
        let week_totals = totals
            .listing(options.totals_mode)
            .into_iter()
            .map(|(category, minutes)| TotalLine::new(category, minutes))
            .collect();
        let week_total_minutes = range_total(meetings);

        let grouped = categorizer.categorize_batch(meetings);
        let details = grouped
            .populated()
            .map(|(category, list)| {
                let mut sorted: Vec<&MeetingRecord> = list.iter().collect();
                sorted.sort_by_key(|m| m.start_time);
                CategoryDetail {
                    category,
                    label: category.label(),
                    meetings: sorted.into_iter().map(meeting_line).collect(),
                }
            })
            .collect();

        tracing::info!(
            range = %range.label(),
            meetings = meetings.len(),
            total_minutes = week_total_minutes,
            "built weekly report"
        );

        Self {
            range: range.label(),
            meeting_count: meetings.len(),
            days,
            week_totals,
            week_total_minutes,
            week_total: format_duration(week_total_minutes),
            week_total_hours: crate::aggregate::minutes_to_hours(week_total_minutes),
            details,
            series: group_by_series(meetings),
        }
    }
}

fn day_report(day: DayTotals, mode: TotalsMode) -> DayReport {
    DayReport {
        day: day.day_name,
        categories: day
            .totals
            .listing(mode)
            .into_iter()
            .map(|(category, minutes)| TotalLine::new(category, minutes))
            .collect(),
        total_minutes: day.total_minutes,
        total: format_duration(day.total_minutes),
    }
}

fn meeting_line(meeting: &MeetingRecord) -> MeetingLine {
    MeetingLine {
        when: format!("{} {}", meeting.weekday_name(), meeting.start_time.format("%H:%M")),
        subject: meeting.subject.clone(),
        duration: format_duration(meeting.rounded_duration()),
        organizer: meeting.organizer_short().to_string(),
    }
}

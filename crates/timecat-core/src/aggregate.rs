//! Weekday, series and category aggregation of meeting time.
//!
//! All totals are built from rounded durations (see [`crate::rounding`]), so
//! per-category, per-day and whole-range totals always add up to each other.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::categorizer::Categorizer;
use crate::category::Category;
use crate::meeting::{weekday_name, MeetingRecord, NO_SERIES};

/// Weekdays in report order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Whether a totals listing shows categories with no meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalsMode {
    IncludeEmpty,
    #[default]
    PopulatedOnly,
}

/// Meetings bucketed by weekday name, calendar order preserved per day.
///
/// Only the weekday is kept: two Mondays from different weeks share a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySummary {
    days: [Vec<MeetingRecord>; 7],
}

impl DailySummary {
    pub fn get(&self, day: Weekday) -> &[MeetingRecord] {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Lookup by full or abbreviated English weekday name, case-insensitive.
    pub fn get_by_name(&self, name: &str) -> Option<&[MeetingRecord]> {
        name.parse::<Weekday>().ok().map(|day| self.get(day))
    }

    /// Days that have at least one meeting, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[MeetingRecord])> {
        WEEK.into_iter()
            .map(move |day| (day, self.get(day)))
            .filter(|(_, meetings)| !meetings.is_empty())
    }

    /// Names of the days that have meetings, Monday first.
    pub fn day_names(&self) -> Vec<&'static str> {
        self.iter().map(|(day, _)| weekday_name(day)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}

/// Partition meetings by the weekday of their start time.
pub fn group_by_weekday<'a, I>(meetings: I) -> DailySummary
where
    I: IntoIterator<Item = &'a MeetingRecord>,
{
    let mut summary = DailySummary::default();
    let mut first: Option<chrono::NaiveDate> = None;
    let mut last: Option<chrono::NaiveDate> = None;

    for meeting in meetings {
        let date = meeting.start_time.date();
        first = Some(first.map_or(date, |d| d.min(date)));
        last = Some(last.map_or(date, |d| d.max(date)));
        summary.days[meeting.weekday().num_days_from_monday() as usize].push(meeting.clone());
    }

    if let (Some(first), Some(last)) = (first, last) {
        if (last - first).num_days() >= 7 {
            tracing::warn!(
                %first,
                %last,
                "meetings span more than one week; weekday buckets merge different dates"
            );
        }
    }

    summary
}

/// Rounded minutes per category. All categories are always tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    minutes: BTreeMap<Category, u32>,
    counts: BTreeMap<Category, usize>,
}

impl Default for CategoryTotals {
    fn default() -> Self {
        Self {
            minutes: Category::ALL.iter().map(|c| (*c, 0)).collect(),
            counts: Category::ALL.iter().map(|c| (*c, 0)).collect(),
        }
    }
}

impl CategoryTotals {
    fn add(&mut self, category: Category, rounded_minutes: u32) {
        let total = self.minutes.entry(category).or_insert(0);
        *total = total.saturating_add(rounded_minutes);
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn minutes(&self, category: Category) -> u32 {
        self.minutes.get(&category).copied().unwrap_or(0)
    }

    pub fn meeting_count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Every category in listing order, zero totals included.
    pub fn all(&self) -> Vec<(Category, u32)> {
        Category::ALL.iter().map(|c| (*c, self.minutes(*c))).collect()
    }

    /// Only categories with at least one meeting.
    pub fn populated(&self) -> Vec<(Category, u32)> {
        Category::ALL
            .iter()
            .filter(|c| self.meeting_count(**c) > 0)
            .map(|c| (*c, self.minutes(*c)))
            .collect()
    }

    pub fn listing(&self, mode: TotalsMode) -> Vec<(Category, u32)> {
        match mode {
            TotalsMode::IncludeEmpty => self.all(),
            TotalsMode::PopulatedOnly => self.populated(),
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> u32 {
        self.minutes
            .values()
            .fold(0u32, |acc, m| acc.saturating_add(*m))
    }
}

/// Sum rounded durations per category.
pub fn category_totals<'a, I>(categorizer: &Categorizer, meetings: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a MeetingRecord>,
{
    let mut totals = CategoryTotals::default();
    for meeting in meetings {
        totals.add(categorizer.categorize(meeting), meeting.rounded_duration());
    }
    totals
}

/// Category totals for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTotals {
    pub weekday: Weekday,
    pub day_name: &'static str,
    pub totals: CategoryTotals,
    pub total_minutes: u32,
}

/// Per-weekday category breakdown, Monday first, only days with meetings.
pub fn daily_category_totals<'a, I>(categorizer: &Categorizer, meetings: I) -> Vec<DayTotals>
where
    I: IntoIterator<Item = &'a MeetingRecord>,
{
    let summary = group_by_weekday(meetings);
    summary
        .iter()
        .map(|(weekday, day_meetings)| {
            let totals = category_totals(categorizer, day_meetings);
            DayTotals {
                weekday,
                day_name: weekday_name(weekday),
                total_minutes: totals.total(),
                totals,
            }
        })
        .collect()
}

/// Sum of rounded durations, regardless of category.
pub fn range_total<'a, I>(meetings: I) -> u32
where
    I: IntoIterator<Item = &'a MeetingRecord>,
{
    meetings
        .into_iter()
        .fold(0u32, |acc, m| acc.saturating_add(m.rounded_duration()))
}

/// Occurrences of one recurring series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesGroup {
    pub series_id: String,
    /// Subject of the first occurrence seen.
    pub subject: String,
    pub occurrences: usize,
    pub total_minutes: u32,
}

/// Group recurring meetings by series id, in first-seen order.
///
/// Meetings without a series id are grouped by subject instead.
pub fn group_by_series<'a, I>(meetings: I) -> Vec<SeriesGroup>
where
    I: IntoIterator<Item = &'a MeetingRecord>,
{
    let mut groups: Vec<SeriesGroup> = Vec::new();
    for meeting in meetings.into_iter().filter(|m| m.is_recurring) {
        let same_series = |g: &SeriesGroup| {
            g.series_id == meeting.series_id
                && (meeting.series_id != NO_SERIES || g.subject == meeting.subject)
        };
        match groups.iter_mut().find(|g| same_series(g)) {
            Some(group) => {
                group.occurrences += 1;
                group.total_minutes = group.total_minutes.saturating_add(meeting.rounded_duration());
            }
            None => groups.push(SeriesGroup {
                series_id: meeting.series_id.clone(),
                subject: meeting.subject.clone(),
                occurrences: 1,
                total_minutes: meeting.rounded_duration(),
            }),
        }
    }
    groups
}

/// Render minutes as `"{h}h{m}m"`, `"{h}h"` or `"{m}m"`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}m"),
    }
}

/// Minutes as fractional hours.
pub fn minutes_to_hours(minutes: u32) -> f64 {
    f64::from(minutes) / 60.0
}

impl Serialize for DailySummary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        for (day, meetings) in self.iter() {
            map.serialize_entry(weekday_name(day), meetings)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{CategoryRule, KeywordRegistry};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        // 2026-10-19 is a Monday
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn meeting(subject: &str, day: u32, hour: u32, minutes: u32) -> MeetingRecord {
        MeetingRecord::new(subject, "", at(day, hour), minutes)
    }

    fn categorizer() -> Categorizer {
        Categorizer::new(
            KeywordRegistry::new(vec![
                CategoryRule::new(Category::StaffTeam, ["team"]),
                CategoryRule::new(Category::Department, ["sales"]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn format_duration_forms() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h30m");
        assert_eq!(format_duration(120), "2h");
    }

    #[test]
    fn weekday_grouping_preserves_order() {
        let meetings = vec![
            meeting("a", 19, 9, 30),
            meeting("b", 21, 9, 30),
            meeting("c", 19, 14, 30),
        ];
        let summary = group_by_weekday(&meetings);

        let monday: Vec<_> = summary.get(Weekday::Mon).iter().map(|m| m.subject.as_str()).collect();
        assert_eq!(monday, vec!["a", "c"]);
        assert_eq!(summary.get_by_name("Wednesday").unwrap().len(), 1);
        assert!(summary.get(Weekday::Tue).is_empty());
        assert_eq!(summary.day_names(), vec!["Monday", "Wednesday"]);
        assert!(summary.get_by_name("Someday").is_none());
    }

    #[test]
    fn weekday_grouping_ignores_date() {
        let meetings = vec![meeting("a", 19, 9, 30), meeting("b", 26, 9, 30)];
        let summary = group_by_weekday(&meetings);
        assert_eq!(summary.get(Weekday::Mon).len(), 2);
    }

    #[test]
    fn department_totals_sum_rounded_durations() {
        let meetings = vec![meeting("Sales sync", 20, 9, 45), meeting("Sales call", 20, 11, 15)];
        let totals = category_totals(&categorizer(), &meetings);
        assert_eq!(totals.minutes(Category::Department), 90);
        assert_eq!(totals.meeting_count(Category::Department), 2);
    }

    #[test]
    fn listing_modes() {
        let meetings = vec![meeting("Team", 19, 9, 20)];
        let totals = category_totals(&categorizer(), &meetings);
        assert_eq!(totals.all().len(), Category::ALL.len());
        assert_eq!(totals.populated(), vec![(Category::StaffTeam, 30)]);
        assert_eq!(totals.listing(TotalsMode::PopulatedOnly).len(), 1);
        assert_eq!(totals.listing(TotalsMode::IncludeEmpty).len(), 5);
    }

    #[test]
    fn zero_minute_meeting_still_populates_category() {
        let meetings = vec![meeting("Team", 19, 9, 0)];
        let totals = category_totals(&categorizer(), &meetings);
        assert_eq!(totals.populated(), vec![(Category::StaffTeam, 0)]);
    }

    #[test]
    fn daily_totals_add_up_to_range_total() {
        let meetings = vec![
            meeting("Team", 19, 9, 25),
            meeting("Sales", 19, 10, 50),
            meeting("Lunch", 22, 12, 61),
        ];
        let c = categorizer();
        let days = daily_category_totals(&c, &meetings);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day_name, "Monday");
        assert_eq!(days[0].total_minutes, 90);
        assert_eq!(days[1].weekday, Weekday::Thu);
        assert_eq!(days[1].totals.minutes(Category::Uncategorized), 90);

        let sum: u32 = days.iter().map(|d| d.total_minutes).sum();
        assert_eq!(sum, range_total(&meetings));
        assert_eq!(category_totals(&c, &meetings).total(), range_total(&meetings));
    }

    #[test]
    fn series_grouping_only_counts_recurring() {
        let meetings = vec![
            meeting("Standup", 19, 9, 15).recurring("s1"),
            meeting("One-off", 19, 10, 30),
            meeting("Standup", 20, 9, 15).recurring("s1"),
            meeting("Review", 21, 9, 45).recurring("s2"),
        ];
        let series = group_by_series(&meetings);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].series_id, "s1");
        assert_eq!(series[0].occurrences, 2);
        assert_eq!(series[0].total_minutes, 60);
        assert_eq!(series[1].total_minutes, 60);
    }

    #[test]
    fn series_without_id_group_by_subject() {
        let meetings = vec![
            meeting("Team Standup", 19, 9, 15).recurring(NO_SERIES),
            meeting("Sales Sync", 19, 10, 30).recurring(NO_SERIES),
            meeting("Team Standup", 20, 9, 15).recurring(NO_SERIES),
            meeting("1:1 Alex", 21, 9, 30).recurring(NO_SERIES),
        ];
        let series = group_by_series(&meetings);
        let summary: Vec<_> = series
            .iter()
            .map(|g| (g.subject.as_str(), g.occurrences))
            .collect();
        assert_eq!(
            summary,
            vec![("Team Standup", 2), ("Sales Sync", 1), ("1:1 Alex", 1)]
        );
        assert_eq!(series[0].total_minutes, 60);
    }

    #[test]
    fn hours_view() {
        assert_eq!(minutes_to_hours(90), 1.5);
    }

    #[test]
    fn daily_summary_serializes_by_day_name() {
        let meetings = vec![meeting("a", 23, 9, 30)];
        let json = serde_json::to_value(group_by_weekday(&meetings)).unwrap();
        assert!(json.get("Friday").is_some());
        assert!(json.get("Monday").is_none());
    }
}

//! Integration tests for weekly aggregation.
//!
//! This test file verifies:
//! - Rounding bounds for arbitrary durations
//! - Category, daily and range totals agree with each other
//! - Weekday grouping and the end-to-end JSON source -> report flow

use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;
use std::io::Write;
use timecat_core::{
    category_totals, daily_category_totals, group_by_weekday, range_total, round_up_30,
    CalendarSource, Category, Categorizer, JsonFileSource, MeetingRecord, ReportOptions,
    TotalsMode, WeekRange, WeeklyReport,
};

const SUBJECTS: [&str; 6] = [
    "Weekly Team Standup",
    "Q3 All-Hands Town Hall",
    "Engineering Sprint Planning",
    "New Hire Orientation",
    "Random Chat",
    "Marketing huddle",
];

fn week_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn meeting_strategy() -> impl Strategy<Value = MeetingRecord> {
    (0usize..SUBJECTS.len(), 0i64..7, 7i64..19, 0u32..240).prop_map(|(s, day, hour, minutes)| {
        MeetingRecord::new(
            SUBJECTS[s],
            "Doe, Jane",
            week_start() + Duration::days(day) + Duration::hours(hour),
            minutes,
        )
    })
}

#[test]
fn test_department_scenario_totals() {
    let categorizer = Categorizer::default();
    let tuesday = week_start() + Duration::days(1);
    let meetings = vec![
        MeetingRecord::new("Engineering Sprint Planning", "", tuesday + Duration::hours(9), 45),
        MeetingRecord::new("Sales Roadmap Review", "", tuesday + Duration::hours(13), 15),
    ];

    let totals = category_totals(&categorizer, &meetings);
    assert_eq!(totals.minutes(Category::Department), 90);
    assert_eq!(totals.populated(), vec![(Category::Department, 90)]);
    assert_eq!(range_total(&meetings), 90);
}

#[test]
fn test_week_flow_from_json_export() {
    let export = r#"[
        {"subject": "Weekly Team Standup", "organizer": "Smith, John", "start_time": "2026-10-19T09:00:00", "duration_minutes": 25, "is_recurring": true, "series_id": "standup"},
        {"subject": "Weekly Team Standup", "organizer": "Smith, John", "start_time": "2026-10-20T09:00:00", "duration_minutes": 25, "is_recurring": true, "series_id": "standup"},
        {"subject": "Q3 All-Hands Town Hall", "organizer": "Comms", "start_time": "2026-10-21T16:00:00", "duration_minutes": 75},
        {"subject": "Random Chat", "organizer": "Doe, Jane", "start_time": "2026-10-23T11:00:00", "duration_minutes": 10},
        {"subject": "Last week", "organizer": "", "start_time": "2026-10-16T11:00:00", "duration_minutes": 30}
    ]"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(export.as_bytes()).unwrap();

    let range = WeekRange::containing(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(), 0);
    let meetings = JsonFileSource::new(file.path()).fetch(&range).unwrap();
    assert_eq!(meetings.len(), 4);

    let report = WeeklyReport::build(
        &Categorizer::default(),
        &range,
        &meetings,
        ReportOptions {
            totals_mode: TotalsMode::PopulatedOnly,
            weekdays_only: true,
        },
    );

    let days: Vec<_> = report.days.iter().map(|d| d.day).collect();
    assert_eq!(days, vec!["Monday", "Tuesday", "Wednesday", "Friday"]);
    assert_eq!(report.week_total, "3h");
    assert_eq!(report.week_totals.len(), 3);
    assert_eq!(report.series[0].occurrences, 2);
    assert_eq!(report.series[0].total_minutes, 60);
}

#[test]
fn test_adjusted_duration_is_reaggregated() {
    let categorizer = Categorizer::default();
    let mut meetings = vec![MeetingRecord::new(
        "Weekly Team Standup",
        "",
        week_start() + Duration::hours(9),
        25,
    )];
    assert_eq!(range_total(&meetings), 30);

    meetings[0].duration_minutes += 30;
    assert_eq!(range_total(&meetings), 60);
    assert_eq!(category_totals(&categorizer, &meetings).minutes(Category::StaffTeam), 60);
}

#[test]
fn test_weekday_buckets() {
    let meetings: Vec<_> = (0..5)
        .map(|d| {
            MeetingRecord::new(
                "Daily sync",
                "",
                week_start() + Duration::days(d) + Duration::hours(9),
                15,
            )
        })
        .collect();
    let summary = group_by_weekday(&meetings);
    assert_eq!(summary.day_names().len(), 5);
    assert_eq!(summary.get(Weekday::Fri).len(), 1);
    assert!(summary.get(Weekday::Sat).is_empty());
}

proptest! {
    #[test]
    fn prop_round_up_30_bounds(m in 0u32..1_000_000) {
        let r = round_up_30(m);
        prop_assert_eq!(r % 30, 0);
        prop_assert!(r >= m);
        prop_assert!(r < m + 30);
    }

    #[test]
    fn prop_category_totals_sum_to_range_total(meetings in prop::collection::vec(meeting_strategy(), 0..40)) {
        let categorizer = Categorizer::default();
        let totals = category_totals(&categorizer, &meetings);
        let by_category: u32 = totals.all().iter().map(|(_, m)| *m).sum();
        prop_assert_eq!(by_category, range_total(&meetings));
    }

    #[test]
    fn prop_daily_totals_sum_to_range_total(meetings in prop::collection::vec(meeting_strategy(), 0..40)) {
        let categorizer = Categorizer::default();
        let days = daily_category_totals(&categorizer, &meetings);
        let daily: u32 = days
            .iter()
            .flat_map(|d| d.totals.all())
            .map(|(_, m)| m)
            .sum();
        prop_assert_eq!(daily, range_total(&meetings));
    }
}

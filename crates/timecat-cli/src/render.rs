//! Plain-text rendering of core results.

use timecat_core::{report::TotalLine, Classification, WeeklyReport};

fn push_totals(output: &mut String, lines: &[TotalLine], total: &str) {
    for line in lines {
        output.push_str(&format!("  {}: {}\n", line.label, line.formatted));
    }
    output.push_str(&format!("  Total: {total}\n"));
}

/// Day-by-day breakdown followed by week totals.
pub fn weekly_summary(report: &WeeklyReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Meetings {}\n", report.range));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    if report.meeting_count == 0 {
        output.push_str("No meetings found.\n");
        return output;
    }

    for day in &report.days {
        output.push_str(&format!("\n{}:\n", day.day));
        push_totals(&mut output, &day.categories, &day.total);
    }

    output.push_str("\nWeek Totals by Category:\n");
    push_totals(&mut output, &report.week_totals, &report.week_total);

    if !report.series.is_empty() {
        output.push_str("\nRecurring series:\n");
        for series in &report.series {
            output.push_str(&format!(
                "  {} x{}: {}\n",
                series.subject,
                series.occurrences,
                timecat_core::format_duration(series.total_minutes)
            ));
        }
    }
    output
}

/// Per-category listing of individual meetings.
pub fn detailed_report(report: &WeeklyReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Detailed Meeting Categorization ({})\n", report.range));
    output.push_str(&"=".repeat(40));
    output.push('\n');

    if report.details.is_empty() {
        output.push_str("No meetings found.\n");
        return output;
    }

    for detail in &report.details {
        output.push_str(&format!("\n{}:\n", detail.label));
        for m in &detail.meetings {
            output.push_str(&format!(
                "  {}  {} ({}, {})\n",
                m.when, m.subject, m.duration, m.organizer
            ));
        }
    }
    output
}

/// Scores behind a single categorization.
pub fn classification(subject: &str, result: &Classification) -> String {
    let mut output = format!("{subject}\n  -> {}\n", result.category);
    for score in &result.scores {
        if score.score == 0 {
            continue;
        }
        output.push_str(&format!(
            "  {}: {} ({})\n",
            score.category,
            score.score,
            score.matched.join(", ")
        ));
    }
    if result.tie_broken {
        output.push_str("  tie resolved by category priority\n");
    }
    output
}

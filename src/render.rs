//! Plain-text rendering for the CLI.
//!
//! Thin shell over the engine's output: the report grid becomes a
//! date/symbol table, the annotated month becomes a weekday-aligned
//! calendar. Both functions return strings so they stay testable.

use chrono::Datelike;

use crate::calendar::{DayAnnotation, MonthView};
use crate::report::AttendanceReport;

/// Render the attendance report grid as a table with a present-count footer
pub fn render_report(report: &AttendanceReport, constituency: Option<&str>) -> String {
    let mut out = String::new();

    match constituency {
        Some(name) => out.push_str(&format!("Attendance - {} - {}\n", name, report.month_label)),
        None => out.push_str(&format!("Attendance - {}\n", report.month_label)),
    }
    out.push_str(&format!(
        "{} to {}\n\n",
        report.from.format("%Y-%m-%d"),
        report.to.format("%Y-%m-%d")
    ));

    for row in &report.rows {
        out.push_str(&format!(
            "  {}  {:>3}  {}\n",
            row.date.format("%Y-%m-%d"),
            row.date.format("%a"),
            row.symbol()
        ));
    }

    out.push_str(&format!(
        "\nPresent: {} of {} days\n",
        report.present_count,
        report.rows.len()
    ));
    out
}

/// Render an annotated month as a weekday-aligned calendar.
///
/// Markers: `*` has schedule, `!` busy (a day can show both), `[n]` today.
pub fn render_calendar(view: &MonthView, days: &[DayAnnotation]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", view.label()));
    out.push_str("  Sun    Mon    Tue    Wed    Thu    Fri    Sat\n");

    // Leading blanks up to the first day's weekday column
    let mut column = match days.first() {
        Some(first) => first.date.weekday().num_days_from_sunday(),
        None => 0,
    };
    out.push_str(&"       ".repeat(column as usize));

    for day in days {
        out.push_str(&format!("{:^7}", cell(day)));
        column += 1;
        if column == 7 {
            out.push('\n');
            column = 0;
        }
    }
    if column != 0 {
        out.push('\n');
    }

    out.push_str("\n  * schedule   ! busy   [n] today\n");
    out
}

fn cell(day: &DayAnnotation) -> String {
    let mut marks = String::new();
    if day.has_schedule {
        marks.push('*');
    }
    if day.busy {
        marks.push('!');
    }
    if day.is_today {
        format!("[{}]{}", day.day, marks)
    } else {
        format!("{}{}", day.day, marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, AttendanceStatus, Season};
    use crate::report::build_report;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_render_report_contains_grid_and_total() {
        let seasons = vec![Season {
            id: "s1".to_string(),
            name: "Winter".to_string(),
            start_date: "2025-01-01".to_string(),
            end_date: "2025-01-05".to_string(),
            is_active: true,
            description: None,
        }];
        let records = vec![AttendanceRecord {
            id: String::new(),
            season_id: None,
            date: "2025-01-02".to_string(),
            status: AttendanceStatus::Present,
            is_verified: false,
            remarks: None,
            mla: None,
        }];
        let report = build_report(None, &seasons, &records).unwrap();
        let text = render_report(&report, Some("Rajpur East"));

        assert!(text.contains("Rajpur East"));
        assert!(text.contains("January 2025"));
        assert!(text.contains("2025-01-02"));
        assert!(text.contains("Present: 1 of 5 days"));
    }

    #[test]
    fn test_render_calendar_markers() {
        let view = MonthView::new(2025, 3).unwrap();
        let schedules = vec![crate::models::Schedule {
            id: String::new(),
            date: "2025-03-15".to_string(),
            time: None,
            venue: None,
            schedule_type: None,
            status: crate::models::ScheduleStatus::Approved,
            description: None,
            created_by: None,
        }];
        let busy: HashSet<NaiveDate> = [d(2025, 3, 15), d(2025, 3, 20)].into_iter().collect();
        let days = view.annotate(&schedules, &busy, d(2025, 3, 7));
        let text = render_calendar(&view, &days);

        assert!(text.contains("March 2025"));
        assert!(text.contains("15*!"));
        assert!(text.contains("20!"));
        assert!(text.contains("[7]"));
    }
}

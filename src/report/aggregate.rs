use chrono::NaiveDate;

use crate::models::{AttendanceRecord, Season};

use super::index::{build_status_index, AttendanceMark};
use super::range::expand_range;
use super::season::latest_season;
use super::ReportError;

/// One cell of the report grid: a date and its presence mark, if any.
/// Derived per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub mark: Option<AttendanceMark>,
}

impl ReportRow {
    /// "P", "A", or the neutral "-" placeholder when no record exists
    pub fn symbol(&self) -> &'static str {
        match self.mark {
            Some(mark) => mark.symbol(),
            None => "-",
        }
    }
}

/// The full per-date grid for a range, with a present-day total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Display label derived from the first date in the range. A range
    /// spanning several months still gets only the first month's label.
    pub month_label: String,
    pub rows: Vec<ReportRow>,
    pub present_count: usize,
}

/// Produce the report grid for a date range against a flat attendance list.
///
/// The range is the explicit `(from, to)` pair when given, otherwise the
/// latest season's bounds. The status index is built over *all* supplied
/// records - only the range is season-scoped, so a record outside the
/// resolved range simply never gets looked up.
///
/// Dates with no record render as "-" and are never counted as present.
/// The whole computation is stateless; identical inputs give identical
/// output.
pub fn build_report(
    explicit_range: Option<(NaiveDate, NaiveDate)>,
    seasons: &[Season],
    records: &[AttendanceRecord],
) -> Result<AttendanceReport, ReportError> {
    let (from, to) = match explicit_range {
        Some(range) => range,
        None => {
            let season = latest_season(seasons).map_err(|_| ReportError::NoReportableRange)?;
            match (season.start_key(), season.end_key()) {
                (Some(start), Some(end)) => (start, end),
                // Selected season has unusable bounds, nothing to report on
                _ => return Err(ReportError::NoReportableRange),
            }
        }
    };

    let dates = expand_range(from, to)?;
    let index = build_status_index(records);

    let rows: Vec<ReportRow> = dates
        .iter()
        .map(|&date| ReportRow {
            date,
            mark: index.get(&date).copied(),
        })
        .collect();

    let present_count = rows
        .iter()
        .filter(|row| row.mark == Some(AttendanceMark::Present))
        .count();

    let month_label = from.format("%B %Y").to_string();

    Ok(AttendanceReport {
        from,
        to,
        month_label,
        rows,
        present_count,
    })
}

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{AttendanceRecord, AttendanceStatus};

/// One-character presence indicator for a report cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceMark {
    Present,
    Absent,
}

impl AttendanceMark {
    /// The symbol rendered in the report grid
    pub fn symbol(&self) -> &'static str {
        match self {
            AttendanceMark::Present => "P",
            AttendanceMark::Absent => "A",
        }
    }
}

/// Build a lookup from normalized date-key to presence mark.
///
/// Records are scanned in input order and duplicates for the same date
/// overwrite earlier entries - last record wins. That tie-break is load-
/// bearing: PAs resubmit corrections for a day and the portal appends, so
/// the newest entry in the list is the authoritative one.
///
/// Records whose date does not parse are skipped; dates with no record
/// simply have no key, which callers must render as "no data" rather than
/// absence.
pub fn build_status_index(records: &[AttendanceRecord]) -> HashMap<NaiveDate, AttendanceMark> {
    let mut index = HashMap::new();
    for record in records {
        let Some(key) = record.date_key() else {
            continue;
        };
        let mark = match record.status {
            AttendanceStatus::Present => AttendanceMark::Present,
            _ => AttendanceMark::Absent,
        };
        index.insert(key, mark);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: String::new(),
            season_id: None,
            date: date.to_string(),
            status,
            is_verified: false,
            remarks: None,
            mla: None,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_present_maps_to_p() {
        let index = build_status_index(&[record("2025-01-02", AttendanceStatus::Present)]);
        assert_eq!(index.get(&d(2025, 1, 2)), Some(&AttendanceMark::Present));
        assert_eq!(index[&d(2025, 1, 2)].symbol(), "P");
    }

    #[test]
    fn test_non_present_maps_to_a() {
        let index = build_status_index(&[record("2025-01-04", AttendanceStatus::Absent)]);
        assert_eq!(index.get(&d(2025, 1, 4)), Some(&AttendanceMark::Absent));
        assert_eq!(index[&d(2025, 1, 4)].symbol(), "A");
    }

    #[test]
    fn test_last_record_wins_for_duplicate_dates() {
        let index = build_status_index(&[
            record("2025-01-02", AttendanceStatus::Absent),
            record("2025-01-02", AttendanceStatus::Present),
        ]);
        assert_eq!(index.get(&d(2025, 1, 2)), Some(&AttendanceMark::Present));

        // And the reverse order flips the result
        let index = build_status_index(&[
            record("2025-01-02", AttendanceStatus::Present),
            record("2025-01-02", AttendanceStatus::Absent),
        ]);
        assert_eq!(index.get(&d(2025, 1, 2)), Some(&AttendanceMark::Absent));
    }

    #[test]
    fn test_missing_dates_have_no_key() {
        let index = build_status_index(&[record("2025-01-02", AttendanceStatus::Present)]);
        assert_eq!(index.get(&d(2025, 1, 3)), None);
    }

    #[test]
    fn test_unparseable_dates_skipped() {
        let index = build_status_index(&[
            record("not a date", AttendanceStatus::Present),
            record("2025-01-02", AttendanceStatus::Absent),
        ]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_time_of_day_discarded() {
        // Two wire formats for the same calendar day collapse to one key
        let index = build_status_index(&[
            record("2025-01-02T09:00:00Z", AttendanceStatus::Absent),
            record("2025-01-02", AttendanceStatus::Present),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&d(2025, 1, 2)), Some(&AttendanceMark::Present));
    }

    #[test]
    fn test_empty_input() {
        assert!(build_status_index(&[]).is_empty());
    }
}

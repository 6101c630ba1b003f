//! Month-at-a-time calendar annotation.
//!
//! `MonthView` is the displayed month with previous/next navigation;
//! `annotate` marks each day of that month against two independent sets:
//! dates that carry a schedule and dates the admin has flagged busy.
//! Navigation only changes the displayed month - refetching the underlying
//! sets is the caller's job.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::models::Schedule;

/// A displayed year/month pair. Navigable indefinitely in both directions.
/// Construction goes through `containing` or `new`, which keep the month
/// in 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first_day: NaiveDate,
}

/// Per-day annotations for one cell of the month grid. A day may carry
/// both annotations, either one, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAnnotation {
    pub day: u32,
    pub date: NaiveDate,
    pub has_schedule: bool,
    pub busy: bool,
    pub is_today: bool,
}

impl MonthView {
    /// A view of the given year/month. Returns None for month outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month, always in 1..=12
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Navigate to the previous month, rolling the year back from January
    pub fn prev(&self) -> Self {
        let (year, month) = match self.month() {
            1 => (self.year() - 1, 12),
            m => (self.year(), m - 1),
        };
        Self {
            first_day: NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(self.first_day),
        }
    }

    /// Navigate to the next month, rolling the year forward from December
    pub fn next(&self) -> Self {
        let (year, month) = match self.month() {
            12 => (self.year() + 1, 1),
            m => (self.year(), m + 1),
        };
        Self {
            first_day: NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(self.first_day),
        }
    }

    /// Number of days in the displayed month, leap-correct
    pub fn day_count(&self) -> u32 {
        (self.next().first_day - self.first_day).num_days() as u32
    }

    /// "March 2025" heading for the grid
    pub fn label(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    /// Annotate every day of the displayed month.
    ///
    /// `schedules` contributes the "has schedule" set (status does not
    /// matter - a cancelled schedule still marks its day), `busy_dates` is
    /// tested independently, and `today` drives highlighting without
    /// touching either set.
    pub fn annotate(
        &self,
        schedules: &[Schedule],
        busy_dates: &HashSet<NaiveDate>,
        today: NaiveDate,
    ) -> Vec<DayAnnotation> {
        let schedule_dates: HashSet<NaiveDate> =
            schedules.iter().filter_map(|s| s.date_key()).collect();

        (1..=self.day_count())
            .filter_map(|day| {
                let date = self.first_day.with_day(day)?;
                Some(DayAnnotation {
                    day,
                    date,
                    has_schedule: schedule_dates.contains(&date),
                    busy: busy_dates.contains(&date),
                    is_today: date == today,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn view(y: i32, m: u32) -> MonthView {
        MonthView::new(y, m).unwrap()
    }

    fn schedule(date: &str) -> Schedule {
        Schedule {
            id: String::new(),
            date: date.to_string(),
            time: None,
            venue: None,
            schedule_type: None,
            status: ScheduleStatus::Pending,
            description: None,
            created_by: None,
        }
    }

    #[test]
    fn test_navigation_rollover() {
        assert_eq!(view(2024, 12).next(), view(2025, 1));
        assert_eq!(view(2025, 1).prev(), view(2024, 12));

        // Round trip returns to the start
        assert_eq!(view(2025, 1).next().prev(), view(2025, 1));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert!(MonthView::new(2025, 0).is_none());
        assert!(MonthView::new(2025, 13).is_none());
    }

    #[test]
    fn test_day_count() {
        assert_eq!(view(2025, 1).day_count(), 31);
        assert_eq!(view(2025, 4).day_count(), 30);
        assert_eq!(view(2025, 2).day_count(), 28);
        assert_eq!(view(2024, 2).day_count(), 29);
    }

    #[test]
    fn test_annotations_are_independent() {
        let schedules = vec![schedule("2025-03-15")];
        let busy: HashSet<NaiveDate> = [d(2025, 3, 15), d(2025, 3, 20)].into_iter().collect();

        let days = view(2025, 3).annotate(&schedules, &busy, d(2025, 6, 1));
        assert_eq!(days.len(), 31);

        let day15 = &days[14];
        assert!(day15.has_schedule);
        assert!(day15.busy);

        let day20 = &days[19];
        assert!(!day20.has_schedule);
        assert!(day20.busy);

        let day1 = &days[0];
        assert!(!day1.has_schedule);
        assert!(!day1.busy);
    }

    #[test]
    fn test_today_highlighting() {
        let days = view(2025, 3).annotate(&[], &HashSet::new(), d(2025, 3, 7));
        assert!(days[6].is_today);
        assert_eq!(days.iter().filter(|a| a.is_today).count(), 1);

        // Today outside the displayed month highlights nothing
        let days = view(2025, 3).annotate(&[], &HashSet::new(), d(2025, 4, 7));
        assert!(days.iter().all(|a| !a.is_today));
    }

    #[test]
    fn test_schedules_outside_month_ignored() {
        let schedules = vec![schedule("2025-04-15"), schedule("garbage")];
        let days = view(2025, 3).annotate(&schedules, &HashSet::new(), d(2025, 3, 1));
        assert!(days.iter().all(|a| !a.has_schedule));
    }

    #[test]
    fn test_containing() {
        let v = MonthView::containing(d(2025, 8, 30));
        assert_eq!(v, view(2025, 8));
        assert_eq!(v.label(), "August 2025");
    }
}

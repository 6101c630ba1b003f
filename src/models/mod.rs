//! Data models for portal entities.
//!
//! This module contains the data structures mirroring the portal's REST
//! shapes:
//!
//! - `Season`: an administrative reporting period scoping attendance
//! - `AttendanceRecord`, `AttendanceStatus`: per-day presence entries
//! - `Schedule`, `ScheduleStatus`: MLA commitments shown on the calendar
//!
//! Wire dates are kept as strings (the portal mixes RFC3339 and bare
//! `YYYY-MM-DD`); each model exposes a `date_key()`-style accessor that
//! normalizes to a `chrono::NaiveDate`.

pub mod attendance;
pub mod schedule;
pub mod season;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use schedule::{Schedule, ScheduleStatus};
pub use season::Season;

//! The attendance reporting engine.
//!
//! Pure, synchronous transformations over in-memory snapshots fetched by
//! the API layer:
//!
//! - `range`: inclusive date-range expansion
//! - `index`: attendance list -> per-date presence lookup
//! - `season`: latest-season selection
//! - `aggregate`: the composed per-date report grid with a present total
//!
//! Nothing in here does I/O or holds state between calls; concurrent
//! invocations need no coordination. Cross-entity consistency (e.g. an
//! attendance date outside its season's bounds) is deliberately not
//! validated - that belongs to the portal's write side.

pub mod aggregate;
pub mod error;
pub mod index;
pub mod range;
pub mod season;

pub use aggregate::{build_report, AttendanceReport, ReportRow};
pub use error::ReportError;
pub use index::{build_status_index, AttendanceMark};
pub use range::expand_range;
pub use season::latest_season;

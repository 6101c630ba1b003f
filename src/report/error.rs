use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures raised by the reporting engine. Every variant is
/// raised at the point of detection and surfaced unchanged to the caller -
/// there is no retry and no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid date range: {from} is after {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("no seasons available to select from")]
    NoSeasonsAvailable,

    #[error("no reportable range: no dates given and no usable season")]
    NoReportableRange,
}

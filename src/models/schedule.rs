use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::parse_date_key;

/// Lifecycle status of a schedule entry. Created Pending by a PA;
/// Approved/Cancelled are terminal states set by the admin side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    Pending,
    Approved,
    Cancelled,
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleStatus::Pending => write!(f, "Pending"),
            ScheduleStatus::Approved => write!(f, "Approved"),
            ScheduleStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A scheduled commitment for the MLA. The calendar view marks its date
/// with a "has schedule" annotation regardless of status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub id: String,
    pub date: String,
    // Free text on the wire, e.g. "10:30 AM" or "morning"
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(rename = "scheduleType", default)]
    pub schedule_type: Option<String>,
    pub status: ScheduleStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<String>,
}

impl Schedule {
    /// The schedule's calendar date as a normalized date-key, if it parses
    pub fn date_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }
}

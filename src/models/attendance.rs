use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::parse_date_key;

/// Wire status of an attendance record. The portal only ever sends these two
/// values; anything else fails deserialization at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// A single day's presence/absence entry, tied to a season.
/// Created by a PA submission; the verify flag and remarks are set by the
/// admin side and carried here as data only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<String>,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(default)]
    pub remarks: Option<String>,
    // Free-text author reference; present on some records only
    #[serde(default)]
    pub mla: Option<String>,
}

impl AttendanceRecord {
    /// The record's calendar date as a normalized date-key, if it parses
    pub fn date_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }
}

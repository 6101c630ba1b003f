use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{format_date, parse_date_key};

/// An administrative reporting period with fixed start/end dates, used to
/// scope attendance. Created by the admin side of the portal; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Season {
    /// Start of the season as a normalized date-key, if the wire string parses
    pub fn start_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.start_date)
    }

    /// End of the season as a normalized date-key, if the wire string parses
    pub fn end_key(&self) -> Option<NaiveDate> {
        parse_date_key(&self.end_date)
    }

    /// "Jan 01, 2025 - Jan 05, 2025" for list views
    pub fn formatted_range(&self) -> String {
        format!(
            "{} - {}",
            format_date(&self.start_date),
            format_date(&self.end_date)
        )
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::{AttendanceRecord, Schedule, Season};

/// Consider a snapshot stale after 1 hour.
/// Attendance and schedules change a few times a day at most.
const CACHE_STALE_MINUTES: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.cached_at).num_minutes()
    }

    pub fn is_stale(&self) -> bool {
        self.age_minutes() > CACHE_STALE_MINUTES
    }

    /// Human-readable snapshot age for the CLI footer
    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew producing negative ages
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

/// Stores fetched snapshots as JSON files so reports render offline.
/// The reporting engine itself never touches this - persistence belongs
/// to the CLI shell.
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", name))
    }

    fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<CachedData<T>>> {
        let path = self.cache_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", name))?;

        let cached: CachedData<T> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", name))?;

        Ok(Some(cached))
    }

    fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let cached = CachedData::new(data);
        let path = self.cache_path(name);
        let contents = serde_json::to_string_pretty(&cached)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    // ===== Seasons =====

    pub fn load_seasons(&self) -> Result<Option<CachedData<Vec<Season>>>> {
        self.load("seasons")
    }

    pub fn save_seasons(&self, seasons: &[Season]) -> Result<()> {
        self.save("seasons", &seasons)
    }

    // ===== Attendance =====

    pub fn load_attendance(&self) -> Result<Option<CachedData<Vec<AttendanceRecord>>>> {
        self.load("attendance")
    }

    pub fn save_attendance(&self, records: &[AttendanceRecord]) -> Result<()> {
        self.save("attendance", &records)
    }

    // ===== Schedules =====

    pub fn load_schedules(&self) -> Result<Option<CachedData<Vec<Schedule>>>> {
        self.load("schedules")
    }

    pub fn save_schedules(&self, schedules: &[Schedule]) -> Result<()> {
        self.save("schedules", &schedules)
    }

    // ===== Busy dates =====

    pub fn load_busy_dates(&self) -> Result<Option<CachedData<Vec<String>>>> {
        self.load("busy_dates")
    }

    pub fn save_busy_dates(&self, dates: &[String]) -> Result<()> {
        self.save("busy_dates", &dates)
    }
}

//! Local snapshot cache for offline report rendering.
//!
//! The `CacheManager` stores the last fetched seasons, attendance,
//! schedules and busy-dates lists as JSON, stamped with their fetch time.
//! Snapshots are considered stale after 60 minutes.

pub mod manager;

pub use manager::{CacheManager, CachedData};

//! Utility functions for date-key normalization and display formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{format_date, parse_date_key};

//! # Time Utilities
//!
//! Utilities for displaying API timestamps using chrono.

use chrono::{DateTime, Utc};

/// Short relative age of `time` as seen at `now` ("just now", "5m", "3h", "2d").
///
/// Anything older than a week falls back to the calendar date.
pub fn format_relative(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(time);

    if age.num_seconds() < 60 {
        "just now".to_string()
    } else if age.num_minutes() < 60 {
        format!("{}m", age.num_minutes())
    } else if age.num_hours() < 24 {
        format!("{}h", age.num_hours())
    } else if age.num_days() < 7 {
        format!("{}d", age.num_days())
    } else {
        time.format("%Y-%m-%d").to_string()
    }
}

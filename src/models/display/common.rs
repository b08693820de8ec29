//! Shared formatting helpers for display models

use chrono::{DateTime, Utc};

/// Placeholder for values the API left empty
pub const NONE: &str = "--";

/// `YYYY-MM-DD HH:MM` or `--`
pub fn format_time(time: Option<&DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| NONE.to_string())
}

/// The value itself, or `--` when empty
pub fn or_none(value: &str) -> String {
    if value.is_empty() {
        NONE.to_string()
    } else {
        value.to_string()
    }
}

pub fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

/// Utilities for date handling shared by cards and details screens
use chrono::{DateTime, Utc};

/// Whole days elapsed from `from` to `now`; never negative
pub fn days_between(from: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - from).num_days().max(0)
}

/// Format a timestamp as DD.MM.YYYY
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Format a timestamp as DD.MM.YYYY HH:MM
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

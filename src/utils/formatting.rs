//! Formatting utilities for display

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Format a file size in bytes as megabytes with two decimals
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Format a time of day as a 12-hour clock string, e.g. "02:30 PM"
pub fn format_clock_time(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, time.minute(), suffix)
}

/// Format a timestamp as a short date, e.g. "Apr 12, 2023"
pub fn format_project_date(timestamp: NaiveDateTime) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

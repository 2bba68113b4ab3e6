//! `HH:MM:SS` formatting for wall-clock instants and elapsed durations.

use chrono::{DateTime, TimeZone, Timelike};

/// The widest string the display ever needs to fit at a given font size.
pub const CANONICAL_TEXT: &str = "00:00:00";

/// Format a whole number of seconds as `HH:MM:SS`.
///
/// Minutes and seconds are always two digits. Hours are padded to two digits
/// but never clamped, so 100 hours renders as `100:00:00`.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format an instant as 24-hour `HH:MM:SS` in its own timezone.
pub fn format_wall_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

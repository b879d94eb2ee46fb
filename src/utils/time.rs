//! Time utilities: parsing HH:MM from CLI input, formatting durations.

use crate::errors::AppResult;
use crate::models::TimeOfDay;

pub fn parse_time(t: &str) -> AppResult<TimeOfDay> {
    t.parse()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<TimeOfDay>> {
    input.map(|s| parse_time(s)).transpose()
}

/// `150` → `"2h 30m"`
pub fn format_minutes(mins: u16) -> String {
    match (mins / 60, mins % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m:02}m"),
    }
}

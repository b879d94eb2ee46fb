use super::time_of_day::TimeOfDay;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Half-open opening window `[start, end)`.
///
/// Written as `"10:30-14:30"` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::Schedule(format!(
                "window {start}-{end} must start before it ends"
            )));
        }
        Ok(Self { start, end })
    }

    pub(crate) const fn between(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// `start <= t < end`
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.contains_minute(t.minutes())
    }

    pub fn contains_minute(&self, minute: u16) -> bool {
        self.start.minutes() <= minute && minute < self.end.minutes()
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeWindow {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| AppError::Schedule(format!("'{s}' (expected HH:MM-HH:MM)")))?;
        Self::new(a.parse()?, b.parse()?)
    }
}

impl TryFrom<String> for TimeWindow {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        s.parse()
    }
}

impl From<TimeWindow> for String {
    fn from(w: TimeWindow) -> Self {
        w.to_string()
    }
}

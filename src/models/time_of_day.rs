use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time with minute resolution (`HH:MM`).
///
/// Serialised as the `"HH:MM"` string used in the config file and in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Checked constructor: hour 0–23, minute 0–59.
    pub fn new(hour: u8, minute: u8) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTime(format!(
                "{hour:02}:{minute:02} is not a valid time of day"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Unchecked constructor for compile-time constants.
    pub(crate) const fn hm(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Build from minutes since midnight (0–1439).
    pub fn from_minutes(minutes: u16) -> AppResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(AppError::OutOfRange(format!(
                "{minutes} minutes is past the end of the day"
            )));
        }
        Ok(Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        })
    }

    /// Minutes since local midnight.
    pub fn minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

/// Seconds are dropped.
impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| AppError::InvalidTime(format!("'{s}' (expected HH:MM)")))?;

        // H or HH, then exactly MM; plain ASCII digits only
        let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&h.len()) || m.len() != 2 || !digits(h) || !digits(m) {
            return Err(AppError::InvalidTime(format!("'{s}' (expected HH:MM)")));
        }

        let hour: u8 = h
            .parse()
            .map_err(|_| AppError::InvalidTime(format!("'{s}' (bad hour)")))?;
        let minute: u8 = m
            .parse()
            .map_err(|_| AppError::InvalidTime(format!("'{s}' (bad minute)")))?;

        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

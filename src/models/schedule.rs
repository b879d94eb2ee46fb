//! Weekly opening hours.
//!
//! The schedule is loaded once from the config file and never mutated.
//! Every structural rule is checked while deserialising, so a
//! `WeeklySchedule` value that exists is always consistent.

use super::time_of_day::TimeOfDay;
use super::window::TimeWindow;
use crate::errors::{AppError, AppResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Opening hours of one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayHours {
    #[serde(rename = "open")]
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<TimeWindow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<TimeWindow>,
}

impl DayHours {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(lunch: Option<TimeWindow>, dinner: Option<TimeWindow>) -> Self {
        Self {
            is_open: true,
            lunch,
            dinner,
        }
    }

    /// Windows in chronological order (lunch, then dinner).
    pub fn windows(&self) -> impl Iterator<Item = &TimeWindow> {
        self.lunch.iter().chain(self.dinner.iter())
    }

    pub fn first_window(&self) -> Option<&TimeWindow> {
        self.windows().next()
    }

    /// Open and with at least one window.
    pub fn accepts_guests(&self) -> bool {
        self.is_open && self.first_window().is_some()
    }

    /// Lunch first, then dinner; half-open.
    pub fn window_containing(&self, t: TimeOfDay) -> Option<&TimeWindow> {
        if !self.is_open {
            return None;
        }
        self.windows().find(|w| w.contains(t))
    }

    fn validate(&self, day: Weekday) -> AppResult<()> {
        match (self.is_open, self.lunch, self.dinner) {
            (false, None, None) => Ok(()),
            (false, _, _) => Err(AppError::Schedule(format!(
                "{day} is closed but lists opening windows"
            ))),
            (true, None, None) => Err(AppError::Schedule(format!(
                "{day} is open but has no opening window"
            ))),
            (true, Some(l), Some(d)) if d.start() < l.end() => Err(AppError::Schedule(format!(
                "{day}: dinner {d} starts before lunch {l} ends"
            ))),
            (true, _, _) => Ok(()),
        }
    }
}

/// Config-file shape of the schedule: one named entry per weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekConfig {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

/// Exactly seven `DayHours`, indexed Monday = 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeekConfig", into = "WeekConfig")]
pub struct WeeklySchedule {
    days: [DayHours; 7],
}

impl WeeklySchedule {
    /// Validate and build. Fails on:
    /// - a window with `start >= end` (rejected already by `TimeWindow`)
    /// - an open day without windows, or a closed day with windows
    /// - dinner starting before lunch ends
    /// - a week without a single open day
    pub fn new(days: [DayHours; 7]) -> AppResult<Self> {
        for (i, d) in days.iter().enumerate() {
            d.validate(weekday_from_index(i))?;
        }

        if !days.iter().any(DayHours::accepts_guests) {
            return Err(AppError::Schedule(
                "the restaurant is closed every day of the week".into(),
            ));
        }

        Ok(Self { days })
    }

    pub fn day(&self, weekday: Weekday) -> &DayHours {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// Monday → Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        self.days
            .iter()
            .enumerate()
            .map(|(i, d)| (weekday_from_index(i), d))
    }
}

impl Default for WeeklySchedule {
    /// Closed on Tuesday; lunch 10:30–14:30 and dinner 18:30–23:00 otherwise.
    fn default() -> Self {
        let lunch = TimeWindow::between(TimeOfDay::hm(10, 30), TimeOfDay::hm(14, 30));
        let dinner = TimeWindow::between(TimeOfDay::hm(18, 30), TimeOfDay::hm(23, 0));
        let open = DayHours::open(Some(lunch), Some(dinner));

        Self {
            days: [open, DayHours::closed(), open, open, open, open, open],
        }
    }
}

impl TryFrom<WeekConfig> for WeeklySchedule {
    type Error = AppError;

    fn try_from(w: WeekConfig) -> AppResult<Self> {
        Self::new([
            w.monday,
            w.tuesday,
            w.wednesday,
            w.thursday,
            w.friday,
            w.saturday,
            w.sunday,
        ])
    }
}

impl From<WeeklySchedule> for WeekConfig {
    fn from(s: WeeklySchedule) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = s.days;
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}

fn weekday_from_index(i: usize) -> Weekday {
    match i % 7 {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

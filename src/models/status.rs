use super::time_of_day::TimeOfDay;
use chrono::Weekday;
use serde::Serialize;

/// Which message template describes the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusKind {
    /// Inside a lunch or dinner window.
    Open,
    /// Open day, before its first window.
    OpensLaterToday,
    /// Open day, between lunch and dinner.
    OpensAfterBreak,
    /// Closed for the rest of today (or all day).
    OpensOnAnotherDay,
}

/// Next moment the doors open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextOpening {
    /// 0 = today, 1 = tomorrow, ... 7 = same weekday next week.
    pub days_ahead: u8,
    pub weekday: Weekday,
    pub time: TimeOfDay,
}

/// Locale-independent outcome of the status decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    /// End of the current window while open.
    pub closes_at: Option<TimeOfDay>,
    pub next_opening: Option<NextOpening>,
}

impl Status {
    pub fn is_open(&self) -> bool {
        self.kind == StatusKind::Open
    }
}

/// `Status` plus the rendered human message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    pub is_open: bool,
    pub kind: StatusKind,
    pub message: String,
    pub closes_at: Option<TimeOfDay>,
    pub next_opening: Option<NextOpening>,
}

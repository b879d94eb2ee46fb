use super::time_of_day::TimeOfDay;
use serde::Serialize;

/// Length of one bookable slot.
pub const SLOT_MINUTES: u16 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationSlot {
    pub start: TimeOfDay,
    /// Zero-padded `HH:MM`.
    pub label: String,
}

impl ReservationSlot {
    pub fn new(start: TimeOfDay) -> Self {
        Self {
            start,
            label: start.to_string(),
        }
    }
}

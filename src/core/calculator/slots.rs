use crate::models::WeeklySchedule;
use crate::models::slot::{ReservationSlot, SLOT_MINUTES};
use crate::models::time_of_day::TimeOfDay;
use crate::models::window::TimeWindow;
use chrono::{Datelike, NaiveDate};

/// Every 30-minute tick inside each window of the day, lunch before dinner.
/// Closed day → empty.
pub fn available_slots(schedule: &WeeklySchedule, date: NaiveDate) -> Vec<ReservationSlot> {
    let day = schedule.day(date.weekday());
    if !day.is_open {
        return Vec::new();
    }

    day.windows()
        .copied()
        .flat_map(ticks)
        .map(ReservationSlot::new)
        .collect()
}

/// Multiples of `SLOT_MINUTES` (counted from midnight) with `start <= t < end`.
fn ticks(w: TimeWindow) -> impl Iterator<Item = TimeOfDay> {
    let first = w.start().minutes().div_ceil(SLOT_MINUTES) * SLOT_MINUTES;

    (first..w.end().minutes())
        .step_by(SLOT_MINUTES as usize)
        .filter_map(|m| TimeOfDay::from_minutes(m).ok())
}

/// `true` if `time` is one of the ticks offered for `date`.
pub fn is_slot(schedule: &WeeklySchedule, date: NaiveDate, time: TimeOfDay) -> bool {
    available_slots(schedule, date)
        .iter()
        .any(|s| s.start == time)
}

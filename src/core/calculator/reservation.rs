use crate::models::WeeklySchedule;
use crate::models::time_of_day::TimeOfDay;
use chrono::{Datelike, NaiveDate};

/// A date can be booked when it is not before `today` and the restaurant
/// opens on that weekday. Time of day plays no part.
pub fn is_date_valid(schedule: &WeeklySchedule, date: NaiveDate, today: NaiveDate) -> bool {
    if date < today {
        return false;
    }
    schedule.day(date.weekday()).is_open
}

/// `time` must fall inside the lunch or the dinner window (half-open).
pub fn is_datetime_valid(
    schedule: &WeeklySchedule,
    date: NaiveDate,
    time: TimeOfDay,
    today: NaiveDate,
) -> bool {
    if !is_date_valid(schedule, date, today) {
        return false;
    }
    schedule.day(date.weekday()).window_containing(time).is_some()
}

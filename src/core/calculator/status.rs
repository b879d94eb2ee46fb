//! Open/closed decision for a point in time.

use crate::models::WeeklySchedule;
use crate::models::status::{NextOpening, Status, StatusKind};
use crate::models::time_of_day::TimeOfDay;
use chrono::{Datelike, NaiveDateTime, Weekday};

/// Decide the status of the restaurant at `now` (restaurant local time).
///
/// Lunch is checked before dinner. Outside the windows of an open day the
/// three cases are exclusive: before the first window, in the break between
/// two windows, after the last one (which falls through to the day scan).
pub fn evaluate(schedule: &WeeklySchedule, now: NaiveDateTime) -> Status {
    let weekday = now.weekday();
    let today = schedule.day(weekday);
    let t = TimeOfDay::from(now.time());

    if today.is_open {
        if let Some(w) = today.window_containing(t) {
            return Status {
                kind: StatusKind::Open,
                closes_at: Some(w.end()),
                next_opening: None,
            };
        }

        if let Some(next) = today.windows().find(|w| t < w.start()) {
            let kind = if today.first_window() == Some(next) {
                StatusKind::OpensLaterToday
            } else {
                StatusKind::OpensAfterBreak
            };

            return Status {
                kind,
                closes_at: None,
                next_opening: Some(NextOpening {
                    days_ahead: 0,
                    weekday,
                    time: next.start(),
                }),
            };
        }
    }

    Status {
        kind: StatusKind::OpensOnAnotherDay,
        closes_at: None,
        next_opening: next_open_day(schedule, weekday),
    }
}

/// First opening on one of the following seven days.
///
/// Bounded to a week: `WeeklySchedule` guarantees at least one open day, so
/// the same weekday a week later is always reached in the worst case.
pub fn next_open_day(schedule: &WeeklySchedule, from: Weekday) -> Option<NextOpening> {
    let mut weekday = from;

    for days_ahead in 1..=7u8 {
        weekday = weekday.succ();
        let day = schedule.day(weekday);

        if !day.is_open {
            continue;
        }

        if let Some(first) = day.first_window() {
            return Some(NextOpening {
                days_ahead,
                weekday,
                time: first.start(),
            });
        }
    }

    None
}

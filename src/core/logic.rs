use crate::core::calculator::{campaign, reservation, slots, status};
use crate::models::campaign::{CampaignWindow, Countdown};
use crate::models::slot::ReservationSlot;
use crate::models::status::{Status, StatusResult};
use crate::models::{Locale, TimeOfDay, WeeklySchedule};
use crate::ui::i18n;
use chrono::{NaiveDate, NaiveDateTime};

/// Stateless availability service over an immutable weekly schedule.
///
/// "Now" and "today" are always passed in; nothing here reads the clock.
#[derive(Debug, Clone, Copy)]
pub struct Availability<'a> {
    schedule: &'a WeeklySchedule,
}

impl<'a> Availability<'a> {
    pub fn new(schedule: &'a WeeklySchedule) -> Self {
        Self { schedule }
    }

    /// Locale-independent decision.
    pub fn status(&self, now: NaiveDateTime) -> Status {
        status::evaluate(self.schedule, now)
    }

    pub fn get_status(&self, now: NaiveDateTime, locale: Locale) -> StatusResult {
        let st = self.status(now);

        StatusResult {
            is_open: st.is_open(),
            kind: st.kind,
            message: i18n::render(&st, locale),
            closes_at: st.closes_at,
            next_opening: st.next_opening,
        }
    }

    pub fn is_reservation_date_valid(&self, date: NaiveDate, today: NaiveDate) -> bool {
        reservation::is_date_valid(self.schedule, date, today)
    }

    pub fn is_reservation_datetime_valid(
        &self,
        date: NaiveDate,
        time: TimeOfDay,
        today: NaiveDate,
    ) -> bool {
        reservation::is_datetime_valid(self.schedule, date, time, today)
    }

    pub fn get_available_slots(&self, date: NaiveDate) -> Vec<ReservationSlot> {
        slots::available_slots(self.schedule, date)
    }

    pub fn is_slot(&self, date: NaiveDate, time: TimeOfDay) -> bool {
        slots::is_slot(self.schedule, date, time)
    }

    pub fn campaign_countdown(&self, c: &CampaignWindow, now: NaiveDateTime) -> Countdown {
        campaign::countdown(c, now)
    }
}

use crate::config::Config;
use crate::core::logic::Availability;
use crate::db::store::ReservationStore;
use crate::errors::AppResult;
use crate::models::TimeOfDay;
use crate::models::reservation::{RejectReason, Reservation, ReservationRequest};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ().-]*[0-9]$").unwrap());

const MIN_PHONE_DIGITS: usize = 6;

/// High-level business logic for the `reserve` command.
pub struct ReserveLogic;

impl ReserveLogic {
    /// Check a request against the schedule, the booking rules in `cfg` and
    /// the current restaurant time. The first failing rule is reported.
    pub fn validate(
        availability: &Availability,
        cfg: &Config,
        req: &ReservationRequest,
        now: NaiveDateTime,
    ) -> Result<(), RejectReason> {
        // ---- Guests ----
        if req.party_size == 0 || req.party_size > cfg.max_party_size {
            return Err(RejectReason::PartySize {
                got: req.party_size,
                max: cfg.max_party_size,
            });
        }

        // ---- Contact ----
        if req.name.trim().is_empty() {
            return Err(RejectReason::MissingName);
        }
        Self::validate_contact(req.email.as_deref(), req.phone.as_deref())?;

        // ---- Date ----
        let today = now.date();
        if !availability.is_reservation_date_valid(req.date, today) {
            return Err(if req.date < today {
                RejectReason::PastDate(req.date)
            } else {
                RejectReason::ClosedDay(req.date)
            });
        }

        let days_ahead = (req.date - today).num_days();
        if days_ahead > cfg.booking_horizon_days as i64 {
            return Err(RejectReason::BeyondHorizon(
                req.date,
                cfg.booking_horizon_days,
            ));
        }

        // ---- Time ----
        if !availability.is_reservation_datetime_valid(req.date, req.time, today) {
            return Err(RejectReason::OutsideHours(req.time));
        }
        if !availability.is_slot(req.date, req.time) {
            return Err(RejectReason::NotOnSlot(req.time));
        }
        if req.date == today && TimeOfDay::from(now.time()) >= req.time {
            return Err(RejectReason::SlotPassed(req.time));
        }

        Ok(())
    }

    /// At least one channel; whatever is given must be well formed.
    fn validate_contact(email: Option<&str>, phone: Option<&str>) -> Result<(), RejectReason> {
        let email = email.map(str::trim).filter(|e| !e.is_empty());
        let phone = phone.map(str::trim).filter(|p| !p.is_empty());

        if email.is_none() && phone.is_none() {
            return Err(RejectReason::MissingContact);
        }

        if let Some(e) = email
            && !EMAIL_RE.is_match(e)
        {
            return Err(RejectReason::InvalidEmail(e.to_string()));
        }

        if let Some(p) = phone {
            let digits = p.chars().filter(char::is_ascii_digit).count();
            if !PHONE_RE.is_match(p) || digits < MIN_PHONE_DIGITS {
                return Err(RejectReason::InvalidPhone(p.to_string()));
            }
        }

        Ok(())
    }

    /// Validate, then hand the record to the store.
    pub fn submit<S: ReservationStore + ?Sized>(
        store: &mut S,
        availability: &Availability,
        cfg: &Config,
        req: ReservationRequest,
        now: NaiveDateTime,
    ) -> AppResult<Reservation> {
        Self::validate(availability, cfg, &req, now)?;
        store.insert(Reservation::from_request(req))
    }
}

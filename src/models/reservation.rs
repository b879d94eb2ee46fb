use super::time_of_day::TimeOfDay;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(ReservationStatus::Confirmed),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }
}

/// What a guest submits before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub party_size: u32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ reservations.date (TEXT "YYYY-MM-DD")
    pub time: TimeOfDay,    // ⇔ reservations.time (TEXT "HH:MM")
    pub party_size: u32,    // ⇔ reservations.party_size
    pub name: String,       // ⇔ reservations.name
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: ReservationStatus,
    pub created_at: String, // ⇔ reservations.created_at (TEXT, ISO8601)
}

impl Reservation {
    /// Record for a request that passed validation; `id` is assigned by the store.
    pub fn from_request(req: ReservationRequest) -> Self {
        Self {
            id: 0,
            date: req.date,
            time: req.time,
            party_size: req.party_size,
            name: req.name.trim().to_string(),
            email: non_empty(req.email),
            phone: non_empty(req.phone),
            notes: non_empty(req.notes),
            status: ReservationStatus::Confirmed,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn contact(&self) -> String {
        match (&self.email, &self.phone) {
            (Some(e), Some(p)) => format!("{e} / {p}"),
            (Some(e), None) => e.clone(),
            (None, Some(p)) => p.clone(),
            (None, None) => String::new(),
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Structured reasons the intake workflow turns a request down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("{0} is in the past")]
    PastDate(NaiveDate),

    #[error("the restaurant is closed on {0}")]
    ClosedDay(NaiveDate),

    #[error("{0} is more than {1} days ahead")]
    BeyondHorizon(NaiveDate, u32),

    #[error("{0} is outside the opening hours")]
    OutsideHours(TimeOfDay),

    #[error("{0} is not a bookable slot (slots start every 30 minutes)")]
    NotOnSlot(TimeOfDay),

    #[error("the {0} slot has already started")]
    SlotPassed(TimeOfDay),

    #[error("party size must be between 1 and {max} (got {got})")]
    PartySize { got: u32, max: u32 },

    #[error("a name is required")]
    MissingName,

    #[error("an email address or a phone number is required")]
    MissingContact,

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("'{0}' is not a valid phone number")]
    InvalidPhone(String),
}

//! Persistence collaborator for the reservation intake.
//!
//! The intake workflow only needs "accept a record, give back the stored
//! version or a failure"; the SQLite store is the one the CLI uses, the
//! in-memory one backs library users and tests.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::reservation::{Reservation, ReservationStatus};
use chrono::NaiveDate;

pub trait ReservationStore {
    /// Persist a validated reservation and return it with its id.
    fn insert(&mut self, reservation: Reservation) -> AppResult<Reservation>;

    fn get(&self, id: i64) -> AppResult<Option<Reservation>>;

    /// `from <= date <= to`, chronological.
    fn between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Reservation>>;

    fn all(&self) -> AppResult<Vec<Reservation>>;

    /// Mark as cancelled. Errors with `ReservationNotFound` for an unknown id.
    fn cancel(&mut self, id: i64) -> AppResult<Reservation>;
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl ReservationStore for SqliteStore {
    fn insert(&mut self, mut reservation: Reservation) -> AppResult<Reservation> {
        let conn = &self.pool.conn;
        reservation.id = queries::insert_reservation(conn, &reservation)?;

        // Audit log is best effort
        if let Err(e) = ttlog(
            conn,
            "reserve",
            &format!("#{}", reservation.id),
            &format!(
                "{} {} for {} ({})",
                reservation.date_str(),
                reservation.time,
                reservation.party_size,
                reservation.name
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(reservation)
    }

    fn get(&self, id: i64) -> AppResult<Option<Reservation>> {
        queries::load_reservation(&self.pool.conn, id)
    }

    fn between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Reservation>> {
        queries::load_reservations_between(&self.pool.conn, from, to)
    }

    fn all(&self) -> AppResult<Vec<Reservation>> {
        queries::load_all_reservations(&self.pool.conn)
    }

    fn cancel(&mut self, id: i64) -> AppResult<Reservation> {
        let conn = &self.pool.conn;
        if !queries::update_status(conn, id, ReservationStatus::Cancelled)? {
            return Err(AppError::ReservationNotFound(id));
        }

        if let Err(e) = ttlog(conn, "cancel", &format!("#{id}"), "Reservation cancelled") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        queries::load_reservation(conn, id)?.ok_or(AppError::ReservationNotFound(id))
    }
}

/// Vec-backed store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Reservation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ReservationStore for MemoryStore {
    fn insert(&mut self, mut reservation: Reservation) -> AppResult<Reservation> {
        reservation.id = self.rows.len() as i64 + 1;
        self.rows.push(reservation.clone());
        Ok(reservation)
    }

    fn get(&self, id: i64) -> AppResult<Option<Reservation>> {
        Ok(self.rows.iter().find(|r| r.id == id).cloned())
    }

    fn between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Reservation>> {
        let mut out: Vec<Reservation> = self
            .rows
            .iter()
            .filter(|r| from <= r.date && r.date <= to)
            .cloned()
            .collect();
        out.sort_by_key(|r| (r.date, r.time, r.id));
        Ok(out)
    }

    fn all(&self) -> AppResult<Vec<Reservation>> {
        let mut out = self.rows.clone();
        out.sort_by_key(|r| (r.date, r.time, r.id));
        Ok(out)
    }

    fn cancel(&mut self, id: i64) -> AppResult<Reservation> {
        let r = self
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::ReservationNotFound(id))?;
        r.status = ReservationStatus::Cancelled;
        Ok(r.clone())
    }
}

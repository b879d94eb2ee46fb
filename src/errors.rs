//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::reservation::RejectReason;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors (caller contract)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Unsupported locale: {0}")]
    InvalidLocale(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    // ---------------------------
    // Schedule / config errors
    // ---------------------------
    #[error("Invalid schedule: {0}")]
    Schedule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Reservation intake
    // ---------------------------
    #[error("Reservation rejected: {0}")]
    Rejected(RejectReason),

    #[error("Reservation #{0} not found")]
    ReservationNotFound(i64),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<RejectReason> for AppError {
    fn from(reason: RejectReason) -> Self {
        AppError::Rejected(reason)
    }
}

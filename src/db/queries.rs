use crate::errors::{AppError, AppResult};
use crate::models::TimeOfDay;
use crate::models::reservation::{Reservation, ReservationStatus};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_RESERVATION: &str = "SELECT id, date, time, party_size, name, email, phone, notes, status, created_at
     FROM reservations";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Reservation> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;
    let status_str: String = row.get("status")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let time: TimeOfDay = time_str.parse().map_err(conversion_error)?;

    let status = ReservationStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(AppError::Migration(format!(
            "invalid reservation status: {status_str}"
        )))
    })?;

    Ok(Reservation {
        id: row.get("id")?,
        date,
        time,
        party_size: row.get("party_size")?,
        name: row.get("name")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        notes: row.get("notes")?,
        status,
        created_at: row.get("created_at")?,
    })
}

/// Insert and return the new row id.
pub fn insert_reservation(conn: &Connection, r: &Reservation) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO reservations (date, time, party_size, name, email, phone, notes, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            r.date_str(),
            r.time.to_string(),
            r.party_size,
            r.name,
            r.email,
            r.phone,
            r.notes,
            r.status.to_db_str(),
            r.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_reservation(conn: &Connection, id: i64) -> AppResult<Option<Reservation>> {
    let sql = format!("{SELECT_RESERVATION} WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Reservations with `from <= date <= to`, chronological.
pub fn load_reservations_between(
    conn: &Connection,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<Reservation>> {
    let sql = format!(
        "{SELECT_RESERVATION}
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, time ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_reservations(conn: &Connection) -> AppResult<Vec<Reservation>> {
    let sql = format!("{SELECT_RESERVATION} ORDER BY date ASC, time ASC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns `false` when no row has that id.
pub fn update_status(conn: &Connection, id: i64, status: ReservationStatus) -> AppResult<bool> {
    let n = conn.execute(
        "UPDATE reservations SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(n > 0)
}

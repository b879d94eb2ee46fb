// src/export/model.rs

use crate::models::reservation::Reservation;
use serde::Serialize;

/// Flat reservation row shared by the CSV and JSON writers.
#[derive(Serialize, Clone, Debug)]
pub struct ReservationExport {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    pub status: String,
    pub created_at: String,
}

impl From<&Reservation> for ReservationExport {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            date: r.date_str(),
            time: r.time.to_string(),
            party_size: r.party_size,
            name: r.name.clone(),
            email: r.email.clone().unwrap_or_default(),
            phone: r.phone.clone().unwrap_or_default(),
            notes: r.notes.clone().unwrap_or_default(),
            status: r.status.to_db_str().to_string(),
            created_at: r.created_at.clone(),
        }
    }
}

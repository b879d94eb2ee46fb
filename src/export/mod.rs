// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::ReservationExport;

use crate::errors::AppResult;
use crate::models::reservation::Reservation;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `reservations` to `path`, asking before overwriting unless `force`.
/// `store` (the SQLite file the rows come from) is never overwritten.
pub fn write(
    format: ExportFormat,
    path: &Path,
    store: &Path,
    reservations: &[Reservation],
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, store, force)?;

    let rows: Vec<ReservationExport> = reservations.iter().map(ReservationExport::from).collect();

    match format {
        ExportFormat::Csv => csv::write_csv(path, &rows)?,
        ExportFormat::Json => json::write_json(path, &rows)?,
    }

    success(format!(
        "{} export completed: {} ({} reservations)",
        format.as_str().to_uppercase(),
        path.display(),
        rows.len()
    ));
    Ok(())
}

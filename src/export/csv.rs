use super::model::ReservationExport;
use crate::errors::{AppError, AppResult};
use csv::Writer;
use std::path::Path;

/// Write reservations as CSV, header row from the field names.
pub fn write_csv(path: &Path, rows: &[ReservationExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    for r in rows {
        wtr.serialize(r)
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

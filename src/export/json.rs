use super::model::ReservationExport;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Write reservations as a pretty-printed JSON array.
pub fn write_json(path: &Path, rows: &[ReservationExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}

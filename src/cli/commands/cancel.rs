use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::{ReservationStore, SqliteStore};
use crate::errors::AppResult;
use crate::models::reservation::ReservationStatus;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel { id } = cmd {
        let mut store = SqliteStore::new(open_pool(cfg)?);

        if let Some(existing) = store.get(*id)?
            && existing.status == ReservationStatus::Cancelled
        {
            warning(format!("Reservation #{id} is already cancelled."));
            return Ok(());
        }

        let r = store.cancel(*id)?;
        success(format!(
            "Reservation #{} ({} {}, {}) cancelled",
            r.id,
            r.date_str(),
            r.time,
            r.name
        ));
    }

    Ok(())
}

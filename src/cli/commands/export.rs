use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::store::{ReservationStore, SqliteStore};
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages::warning;
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = SqliteStore::new(open_pool(cfg)?);

        let reservations = match range.as_deref() {
            None | Some("all") => store.all()?,
            Some(r) => {
                let (from, to) = date::resolve_period(r)?;
                store.between(from, to)?
            }
        };

        let path = Path::new(file);
        let db = Path::new(&store.pool().path);
        export::write(*format, path, db, &reservations, *force)?;

        if let Err(e) = ttlog(
            &store.pool().conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} reservations as {}", reservations.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    Ok(())
}

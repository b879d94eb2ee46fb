use crate::cli::commands::{open_pool, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Availability;
use crate::core::reserve::ReserveLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::reservation::ReservationRequest;
use crate::ui::messages::success;
use crate::utils::time::parse_time;
use chrono::NaiveDateTime;

/// Validate a booking request and store it.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Reserve {
        date,
        time,
        party,
        name,
        email,
        phone,
        notes,
    } = cmd
    {
        let request = ReservationRequest {
            date: parse_date_arg(date)?,
            time: parse_time(time)?,
            party_size: *party,
            name: name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            notes: notes.clone(),
        };

        let availability = Availability::new(&cfg.schedule);
        let mut store = SqliteStore::new(open_pool(cfg)?);

        let r = ReserveLogic::submit(&mut store, &availability, cfg, request, now)?;

        success(format!(
            "Reservation #{} confirmed: {} {} · {} guest(s) · {}",
            r.id,
            r.date_str(),
            r.time,
            r.party_size,
            r.name
        ));
    }

    Ok(())
}

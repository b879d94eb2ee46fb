use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::{ReservationStore, SqliteStore};
use crate::errors::AppResult;
use crate::models::reservation::{Reservation, ReservationStatus};
use crate::utils::colors::{RESET, color_for_reservation};
use crate::utils::date;
use crate::utils::table::Table;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::List { period, cancelled } = cmd {
        let store = SqliteStore::new(open_pool(cfg)?);

        let reservations = match period.as_deref() {
            Some("all") => store.all()?,
            Some(p) => {
                let (from, to) = date::resolve_period(p)?;
                store.between(from, to)?
            }
            None => {
                let today = now.date();
                store
                    .all()?
                    .into_iter()
                    .filter(|r| r.date >= today)
                    .collect()
            }
        };

        let rows: Vec<&Reservation> = reservations
            .iter()
            .filter(|r| *cancelled || r.status == ReservationStatus::Confirmed)
            .collect();

        if rows.is_empty() {
            println!("No reservations found.");
            return Ok(());
        }

        print_table(&rows);
    }

    Ok(())
}

fn print_table(rows: &[&Reservation]) {
    let mut table = Table::new(&["ID", "Date", "Time", "Guests", "Name", "Contact", "Status"]);

    for r in rows {
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            r.time.to_string(),
            r.party_size.to_string(),
            r.name.clone(),
            r.contact(),
            r.status.to_db_str().to_string(),
        ]);
    }

    let rendered = table.render();
    let mut lines = rendered.lines();

    // header + separator uncolored, one color per reservation line
    for line in lines.by_ref().take(2) {
        println!("{line}");
    }
    for (line, r) in lines.zip(rows) {
        println!("{}{}{}", color_for_reservation(&r.status), line, RESET);
    }

    let guests: u32 = rows
        .iter()
        .filter(|r| r.status == ReservationStatus::Confirmed)
        .map(|r| r.party_size)
        .sum();
    println!("\n{} reservation(s), {} confirmed guest(s)", rows.len(), guests);
}

use crate::cli::commands::parse_date_arg;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Availability;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_optional_time;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Check { date, time } = cmd {
        let d = parse_date_arg(date)?;
        let t = parse_optional_time(time.as_ref())?;
        let availability = Availability::new(&cfg.schedule);
        let today = now.date();

        match t {
            None if availability.is_reservation_date_valid(d, today) => {
                success(format!("{d} is available for reservations"))
            }
            None => warning(format!("{d} is not available for reservations")),
            Some(t) if availability.is_reservation_datetime_valid(d, t, today) => {
                success(format!("{d} {t} is within opening hours"))
            }
            Some(t) => warning(format!("{d} {t} is not available for reservations")),
        }
    }

    Ok(())
}

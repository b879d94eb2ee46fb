use crate::cli::parser::Commands;
use crate::cli::commands::parse_date_arg;
use crate::config::Config;
use crate::core::logic::Availability;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::models::TimeOfDay;
use crate::ui::i18n::weekday_name;
use crate::utils::colors::{GREY, RESET};
use chrono::{Datelike, NaiveDateTime};

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Slots { date, locale } = cmd {
        let d = parse_date_arg(date)?;
        let locale = locale.unwrap_or(cfg.locale);
        let availability = Availability::new(&cfg.schedule);

        let slots = availability.get_available_slots(d);
        if slots.is_empty() {
            warning(format!("No slots on {d}: the restaurant is closed that day."));
            return Ok(());
        }

        if !availability.is_reservation_date_valid(d, now.date()) {
            warning(format!("{d} is in the past; slots shown for reference only."));
        }

        println!("📅 Slots for {} ({}):", d, weekday_name(d.weekday(), locale));

        let now_t = TimeOfDay::from(now.time());
        for s in &slots {
            // Already started today → greyed out
            if d == now.date() && s.start <= now_t {
                println!("  {GREY}{}{RESET}", s.label);
            } else {
                println!("  {}", s.label);
            }
        }
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Availability;
use crate::errors::AppResult;
use crate::ui::i18n;
use crate::ui::messages::{info, status_line};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Status { locale } = cmd {
        let locale = locale.unwrap_or(cfg.locale);
        let availability = Availability::new(&cfg.schedule);

        let result = availability.get_status(now, locale);
        status_line(result.is_open, &result.message);

        if let Some(campaign) = &cfg.campaign {
            let countdown = availability.campaign_countdown(campaign, now);
            if let Some(line) = i18n::countdown_line(&campaign.title, countdown, locale) {
                info(line);
            }
        }
    }

    Ok(())
}

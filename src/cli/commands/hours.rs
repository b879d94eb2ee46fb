use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TimeWindow;
use crate::ui::i18n::{closed_label, weekday_name};
use crate::utils::table::Table;
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { locale } = cmd {
        let locale = locale.unwrap_or(cfg.locale);
        let mut table = Table::new(&["Day", "Lunch", "Dinner", "Open for"]);

        for (weekday, day) in cfg.schedule.iter() {
            let name = weekday_name(weekday, locale).to_string();

            if !day.is_open {
                table.add_row(vec![name, closed_label(locale).to_string(), "--".into(), "--".into()]);
                continue;
            }

            let cell = |w: Option<TimeWindow>| {
                w.map(|w| w.to_string()).unwrap_or_else(|| "--".into())
            };
            let total: u16 = day.windows().map(|w| w.duration_minutes()).sum();

            table.add_row(vec![name, cell(day.lunch), cell(day.dinner), format_minutes(total)]);
        }

        println!("🕒 Opening hours:\n");
        print!("{}", table.render());
    }

    Ok(())
}

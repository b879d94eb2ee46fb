//! Message tables: `(StatusKind, Locale) -> template`.
//!
//! Pure data lookup. The decision logic never sees a locale; only the final
//! rendering step does.

use crate::models::Locale;
use crate::models::campaign::Countdown;
use crate::models::status::{NextOpening, Status, StatusKind};
use chrono::Weekday;

/// Placeholders: `{time}`, `{day}`.
pub fn template(kind: StatusKind, locale: Locale) -> &'static str {
    use Locale::*;
    use StatusKind::*;

    match (kind, locale) {
        (Open, En) => "Open now · closes at {time}",
        (Open, Es) => "Abierto ahora · cierra a las {time}",
        (Open, It) => "Aperto ora · chiude alle {time}",

        (OpensLaterToday, En) => "Closed · opens today at {time}",
        (OpensLaterToday, Es) => "Cerrado · abre hoy a las {time}",
        (OpensLaterToday, It) => "Chiuso · apre oggi alle {time}",

        (OpensAfterBreak, En) => "Closed for a break · opens again at {time}",
        (OpensAfterBreak, Es) => "Cerrado por descanso · vuelve a abrir a las {time}",
        (OpensAfterBreak, It) => "Chiuso per pausa · riapre alle {time}",

        (OpensOnAnotherDay, En) => "Closed · opens {day} at {time}",
        (OpensOnAnotherDay, Es) => "Cerrado · abre {day} a las {time}",
        (OpensOnAnotherDay, It) => "Chiuso · apre {day} alle {time}",
    }
}

pub fn closed_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Closed",
        Locale::Es => "Cerrado",
        Locale::It => "Chiuso",
    }
}

pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    const EN: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    const ES: [&str; 7] = [
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
        "domingo",
    ];
    const IT: [&str; 7] = [
        "lunedì",
        "martedì",
        "mercoledì",
        "giovedì",
        "venerdì",
        "sabato",
        "domenica",
    ];

    let i = weekday.num_days_from_monday() as usize;
    match locale {
        Locale::En => EN[i],
        Locale::Es => ES[i],
        Locale::It => IT[i],
    }
}

/// "tomorrow", "on Wednesday", "next Wednesday" and their translations.
fn day_phrase(next: &NextOpening, locale: Locale) -> String {
    let name = weekday_name(next.weekday, locale);

    match (next.days_ahead, locale) {
        (0, Locale::En) => "today".into(),
        (0, Locale::Es) => "hoy".into(),
        (0, Locale::It) => "oggi".into(),
        (1, Locale::En) => "tomorrow".into(),
        (1, Locale::Es) => "mañana".into(),
        (1, Locale::It) => "domani".into(),
        (7, Locale::En) => format!("next {name}"),
        (7, Locale::Es) => format!("el próximo {name}"),
        (7, Locale::It) => format!("{name} prossimo"),
        (_, Locale::En) => format!("on {name}"),
        (_, Locale::Es) => format!("el {name}"),
        (_, Locale::It) => name.to_string(),
    }
}

/// Fill the template for `status`.
pub fn render(status: &Status, locale: Locale) -> String {
    let time = match (status.closes_at, status.next_opening) {
        (Some(t), _) => t,
        (None, Some(n)) => n.time,
        (None, None) => return closed_label(locale).to_string(),
    };

    let mut out = template(status.kind, locale).replace("{time}", &time.to_string());

    if let Some(next) = &status.next_opening {
        out = out.replace("{day}", &day_phrase(next, locale));
    }

    out
}

/// Countdown line for a configured campaign; `None` once it is over.
pub fn countdown_line(title: &str, countdown: Countdown, locale: Locale) -> Option<String> {
    match (countdown, locale) {
        (Countdown::Upcoming { days, hours, minutes }, Locale::En) => Some(format!(
            "{title}: starts in {days}d {hours:02}h {minutes:02}m"
        )),
        (Countdown::Upcoming { days, hours, minutes }, Locale::Es) => Some(format!(
            "{title}: empieza en {days}d {hours:02}h {minutes:02}m"
        )),
        (Countdown::Upcoming { days, hours, minutes }, Locale::It) => Some(format!(
            "{title}: inizia tra {days}g {hours:02}h {minutes:02}m"
        )),
        (Countdown::Running, Locale::En) => Some(format!("{title}: happening now")),
        (Countdown::Running, Locale::Es) => Some(format!("{title}: ¡ya está aquí!")),
        (Countdown::Running, Locale::It) => Some(format!("{title}: in corso")),
        (Countdown::Over, _) => None,
    }
}

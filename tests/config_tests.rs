use chrono::Weekday;
use rtable::config::Config;
use rtable::errors::AppError;
use rtable::models::{Locale, TimeOfDay, TimeWindow};

const WEEK: &str = r#"
database: /tmp/rtable_config_tests.sqlite
locale: es
timezone: Europe/Madrid
schedule:
  monday:    { open: true, lunch: "12:00-15:00", dinner: "19:30-23:30" }
  tuesday:   { open: false }
  wednesday: { open: true, lunch: "12:00-15:00" }
  thursday:  { open: true, dinner: "19:30-23:30" }
  friday:    { open: true, lunch: "12:00-15:00", dinner: "19:30-23:30" }
  saturday:  { open: true, lunch: "12:00-15:00", dinner: "19:30-23:30" }
  sunday:    { open: false }
"#;

fn with_schedule_line(day: &str, line: &str) -> String {
    WEEK.lines()
        .map(|l| {
            if l.trim_start().starts_with(&format!("{day}:")) {
                format!("  {day}: {line}")
            } else {
                l.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn schedule_error(yaml: &str) -> String {
    match Config::from_yaml(yaml) {
        Err(AppError::Config(msg)) => msg,
        Err(other) => panic!("unexpected error kind: {other}"),
        Ok(_) => panic!("configuration should have been rejected"),
    }
}

#[test]
fn test_full_config_parses() {
    let cfg = Config::from_yaml(WEEK).expect("valid config");

    assert_eq!(cfg.locale, Locale::Es);
    assert_eq!(cfg.max_party_size, 12);
    assert_eq!(cfg.booking_horizon_days, 90);
    assert!(cfg.tz().unwrap().is_some());

    let mon = cfg.schedule.day(Weekday::Mon);
    assert!(mon.is_open);
    assert_eq!(mon.lunch, Some("12:00-15:00".parse::<TimeWindow>().unwrap()));

    let wed = cfg.schedule.day(Weekday::Wed);
    assert!(wed.dinner.is_none());

    assert!(!cfg.schedule.day(Weekday::Sun).is_open);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let cfg = Config::from_yaml("database: /tmp/x.sqlite\n").expect("valid config");

    assert_eq!(cfg.locale, Locale::En);
    assert!(!cfg.schedule.day(Weekday::Tue).is_open);
    let wed = cfg.schedule.day(Weekday::Wed);
    assert_eq!(wed.lunch.unwrap().start(), TimeOfDay::new(10, 30).unwrap());
    assert_eq!(wed.dinner.unwrap().end(), TimeOfDay::new(23, 0).unwrap());
}

#[test]
fn test_config_round_trips_through_yaml() {
    let cfg = Config::from_yaml(WEEK).unwrap();
    let again = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
    assert_eq!(cfg.schedule, again.schedule);
}

#[test]
fn test_window_must_start_before_it_ends() {
    let msg = schedule_error(&with_schedule_line(
        "monday",
        r#"{ open: true, lunch: "15:00-12:00" }"#,
    ));
    assert!(msg.contains("must start before it ends"), "{msg}");

    let msg = schedule_error(&with_schedule_line(
        "monday",
        r#"{ open: true, lunch: "12:00-12:00" }"#,
    ));
    assert!(msg.contains("must start before it ends"), "{msg}");
}

#[test]
fn test_open_day_needs_a_window() {
    let msg = schedule_error(&with_schedule_line("monday", "{ open: true }"));
    assert!(msg.contains("no opening window"), "{msg}");
}

#[test]
fn test_closed_day_cannot_have_windows() {
    let msg = schedule_error(&with_schedule_line(
        "tuesday",
        r#"{ open: false, lunch: "12:00-15:00" }"#,
    ));
    assert!(msg.contains("closed but lists opening windows"), "{msg}");
}

#[test]
fn test_dinner_cannot_overlap_lunch() {
    let msg = schedule_error(&with_schedule_line(
        "friday",
        r#"{ open: true, lunch: "12:00-16:00", dinner: "15:30-23:00" }"#,
    ));
    assert!(msg.contains("starts before lunch"), "{msg}");
}

#[test]
fn test_always_closed_week_is_rejected() {
    let yaml = r#"
schedule:
  monday:    { open: false }
  tuesday:   { open: false }
  wednesday: { open: false }
  thursday:  { open: false }
  friday:    { open: false }
  saturday:  { open: false }
  sunday:    { open: false }
"#;
    let msg = schedule_error(yaml);
    assert!(msg.contains("closed every day"), "{msg}");
}

#[test]
fn test_bad_times_are_rejected() {
    let msg = schedule_error(&with_schedule_line(
        "monday",
        r#"{ open: true, lunch: "12:00-24:30" }"#,
    ));
    assert!(msg.contains("not a valid time of day"), "{msg}");
}

#[test]
fn test_unknown_locale_and_timezone_are_rejected() {
    schedule_error(&WEEK.replace("locale: es", "locale: fr"));

    let msg = schedule_error(&WEEK.replace("Europe/Madrid", "Mars/Olympus_Mons"));
    assert!(msg.contains("unknown timezone"), "{msg}");
}

#[test]
fn test_campaign_must_end_after_start() {
    let yaml = format!(
        "{WEEK}campaign:\n  title: Grand opening\n  starts_at: 2026-03-01T12:00:00\n  ends_at: 2026-02-01T12:00:00\n"
    );
    let msg = schedule_error(&yaml);
    assert!(msg.contains("ends before it starts"), "{msg}");
}

#[test]
fn test_time_of_day_contract() {
    assert!(TimeOfDay::new(24, 0).is_err());
    assert!(TimeOfDay::new(12, 60).is_err());
    assert!(TimeOfDay::from_minutes(1440).is_err());
    assert_eq!(TimeOfDay::from_minutes(1439).unwrap().to_string(), "23:59");
    assert_eq!("9:05".parse::<TimeOfDay>().unwrap().to_string(), "09:05");
    assert!("12:5".parse::<TimeOfDay>().is_err());
    assert!("007:30".parse::<TimeOfDay>().is_err());
    assert!("+9:+5".parse::<TimeOfDay>().is_err());
    assert!("9:+5".parse::<TimeOfDay>().is_err());
    assert!(" 7:30".parse::<TimeOfDay>().is_ok());
    assert!("noon".parse::<TimeOfDay>().is_err());
}

#[test]
fn test_locale_codes() {
    assert_eq!(" ES ".parse::<Locale>().unwrap(), Locale::Es);
    assert_eq!("it".parse::<Locale>().unwrap().code(), "it");
    assert!(matches!(
        "fr".parse::<Locale>(),
        Err(AppError::InvalidLocale(code)) if code == "fr"
    ));
}

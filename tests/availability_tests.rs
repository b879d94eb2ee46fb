use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use rtable::Availability;
use rtable::models::campaign::{CampaignWindow, Countdown};
use rtable::models::status::StatusKind;
use rtable::models::{DayHours, Locale, TimeOfDay, TimeWindow, WeeklySchedule};
use rtable::ui::i18n::countdown_line;

// Week of 2025-10-13: Monday 13 … Sunday 19, then Monday 20.
fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
    date(d).and_hms_opt(h, m, 0).unwrap()
}

fn t(h: u8, m: u8) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

fn window(s: &str) -> TimeWindow {
    s.parse().unwrap()
}

/// Default schedule with Monday closed as well.
fn closed_monday_and_tuesday() -> WeeklySchedule {
    let open = DayHours::open(Some(window("10:30-14:30")), Some(window("18:30-23:00")));
    WeeklySchedule::new([
        DayHours::closed(),
        DayHours::closed(),
        open,
        open,
        open,
        open,
        open,
    ])
    .unwrap()
}

#[test]
fn test_wednesday_opening_boundary_is_open() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    let st = a.get_status(at(15, 10, 30), Locale::En);
    assert!(st.is_open);
    assert_eq!(st.kind, StatusKind::Open);
    assert_eq!(st.closes_at, Some(t(14, 30)));
    assert!(st.next_opening.is_none());
    assert_eq!(st.message, "Open now · closes at 14:30");
}

#[test]
fn test_lunch_end_is_excluded() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    let st = a.get_status(at(15, 14, 30), Locale::En);
    assert!(!st.is_open);
    assert_eq!(st.kind, StatusKind::OpensAfterBreak);

    let next = st.next_opening.expect("next opening");
    assert_eq!(next.days_ahead, 0);
    assert_eq!(next.weekday, Weekday::Wed);
    assert_eq!(next.time, t(18, 30));
}

#[test]
fn test_before_first_window() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    let st = a.get_status(at(15, 9, 0), Locale::En);
    assert_eq!(st.kind, StatusKind::OpensLaterToday);
    assert_eq!(st.next_opening.unwrap().time, t(10, 30));
    assert_eq!(st.message, "Closed · opens today at 10:30");
}

#[test]
fn test_closed_tuesday_points_to_wednesday() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    let st = a.get_status(at(14, 12, 0), Locale::En);
    assert!(!st.is_open);
    assert_eq!(st.kind, StatusKind::OpensOnAnotherDay);

    let next = st.next_opening.unwrap();
    assert_eq!(next.weekday, Weekday::Wed);
    assert_eq!(next.days_ahead, 1);
    assert_eq!(next.time, t(10, 30));
    assert_eq!(st.message, "Closed · opens tomorrow at 10:30");
}

#[test]
fn test_sunday_close_wraps_to_monday() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    let st = a.get_status(at(19, 23, 0), Locale::En);
    assert!(!st.is_open);

    let next = st.next_opening.unwrap();
    assert_eq!(next.weekday, Weekday::Mon);
    assert_eq!(next.days_ahead, 1);
    assert_eq!(next.time, t(10, 30));
}

#[test]
fn test_sunday_close_skips_closed_monday_and_tuesday() {
    let schedule = closed_monday_and_tuesday();
    let a = Availability::new(&schedule);

    let st = a.get_status(at(19, 23, 0), Locale::En);
    let next = st.next_opening.unwrap();
    assert_eq!(next.weekday, Weekday::Wed);
    assert_eq!(next.days_ahead, 3);
    assert_eq!(next.time, t(10, 30));
    assert_eq!(st.message, "Closed · opens on Wednesday at 10:30");
}

#[test]
fn test_single_open_day_wraps_a_full_week() {
    let open = DayHours::open(None, Some(window("19:00-22:00")));
    let c = DayHours::closed();
    let schedule = WeeklySchedule::new([c, c, open, c, c, c, c]).unwrap();
    let a = Availability::new(&schedule);

    let st = a.get_status(at(15, 22, 30), Locale::En);
    let next = st.next_opening.unwrap();
    assert_eq!(next.weekday, Weekday::Wed);
    assert_eq!(next.days_ahead, 7);
    assert_eq!(st.message, "Closed · opens next Wednesday at 19:00");

    // Dinner-only day: before dinner counts as "later today", not "after break"
    let st = a.get_status(at(15, 12, 0), Locale::En);
    assert_eq!(st.kind, StatusKind::OpensLaterToday);
}

#[test]
fn test_status_messages_are_localized() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    assert_eq!(
        a.get_status(at(15, 12, 0), Locale::Es).message,
        "Abierto ahora · cierra a las 14:30"
    );
    assert_eq!(
        a.get_status(at(15, 15, 0), Locale::It).message,
        "Chiuso per pausa · riapre alle 18:30"
    );
    assert_eq!(
        a.get_status(at(14, 12, 0), Locale::Es).message,
        "Cerrado · abre mañana a las 10:30"
    );

    // the decision itself does not depend on the locale
    let en = a.get_status(at(17, 20, 0), Locale::En);
    let it = a.get_status(at(17, 20, 0), Locale::It);
    assert_eq!(en.kind, it.kind);
    assert_eq!(en.closes_at, it.closes_at);
}

#[test]
fn test_wednesday_slots() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    let labels: Vec<String> = a
        .get_available_slots(date(15))
        .into_iter()
        .map(|s| s.label)
        .collect();

    assert_eq!(
        labels,
        vec![
            "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30", "14:00", "18:30",
            "19:00", "19:30", "20:00", "20:30", "21:00", "21:30", "22:00", "22:30",
        ]
    );
}

#[test]
fn test_slots_are_idempotent() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    for d in 13..=19 {
        assert_eq!(a.get_available_slots(date(d)), a.get_available_slots(date(d)));
    }
}

#[test]
fn test_slots_snap_to_half_hours() {
    let open = DayHours::open(Some(window("12:15-13:40")), None);
    let schedule = WeeklySchedule::new([open; 7]).unwrap();
    let a = Availability::new(&schedule);

    let labels: Vec<String> = a
        .get_available_slots(date(15))
        .into_iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, vec!["12:30", "13:00", "13:30"]);
}

#[test]
fn test_closed_days_have_no_slots_and_are_not_bookable() {
    let schedule = closed_monday_and_tuesday();
    let a = Availability::new(&schedule);
    let today = date(13);

    for d in [13, 14, 20, 21] {
        assert!(a.get_available_slots(date(d)).is_empty());
        assert!(!a.is_reservation_date_valid(date(d), today));
    }
    assert!(a.is_reservation_date_valid(date(15), today));
}

#[test]
fn test_yesterday_is_never_valid() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);

    for d in 14..=20 {
        let today = date(d);
        let yesterday = today - Duration::days(1);
        assert!(!a.is_reservation_date_valid(yesterday, today));
        assert!(!a.is_reservation_datetime_valid(yesterday, t(12, 0), today));
    }
}

#[test]
fn test_datetime_validity_is_half_open() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);
    let today = date(13);
    let wed = date(15);

    assert!(a.is_reservation_datetime_valid(wed, t(10, 30), today));
    assert!(a.is_reservation_datetime_valid(wed, t(14, 29), today));
    assert!(!a.is_reservation_datetime_valid(wed, t(14, 30), today));
    assert!(!a.is_reservation_datetime_valid(wed, t(10, 29), today));
    assert!(a.is_reservation_datetime_valid(wed, t(22, 59), today));
    assert!(!a.is_reservation_datetime_valid(wed, t(23, 0), today));

    // Tuesday: closed, whatever the time
    assert!(!a.is_reservation_datetime_valid(date(14), t(12, 0), today));
}

#[test]
fn test_status_agrees_with_datetime_validity_over_a_week() {
    for schedule in [WeeklySchedule::default(), closed_monday_and_tuesday()] {
        let a = Availability::new(&schedule);

        let mut now = at(13, 0, 0);
        let end = at(20, 0, 0);

        while now < end {
            let st = a.status(now);
            let valid =
                a.is_reservation_datetime_valid(now.date(), TimeOfDay::from(now.time()), now.date());

            assert_eq!(st.is_open(), valid, "disagreement at {now}");

            // exactly one of open / next opening
            assert!(st.is_open() != st.next_opening.is_some(), "at {now}");

            now += Duration::minutes(1);
        }
    }
}

#[test]
fn test_campaign_countdown() {
    let schedule = WeeklySchedule::default();
    let a = Availability::new(&schedule);
    let campaign = CampaignWindow {
        title: "Autumn menu".into(),
        starts_at: at(17, 19, 0),
        ends_at: Some(at(19, 23, 0)),
    };

    let before = a.campaign_countdown(&campaign, at(15, 16, 30));
    assert_eq!(
        before,
        Countdown::Upcoming {
            days: 2,
            hours: 2,
            minutes: 30
        }
    );
    assert_eq!(
        countdown_line(&campaign.title, before, Locale::En).as_deref(),
        Some("Autumn menu: starts in 2d 02h 30m")
    );

    assert_eq!(a.campaign_countdown(&campaign, at(17, 19, 0)), Countdown::Running);
    assert_eq!(a.campaign_countdown(&campaign, at(19, 23, 0)), Countdown::Over);
    assert!(countdown_line(&campaign.title, Countdown::Over, Locale::It).is_none());
}

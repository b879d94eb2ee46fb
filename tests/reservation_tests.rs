use chrono::{NaiveDate, NaiveDateTime};
use rtable::Availability;
use rtable::config::Config;
use rtable::core::reserve::ReserveLogic;
use rtable::db::initialize::init_db;
use rtable::db::pool::DbPool;
use rtable::db::store::{MemoryStore, ReservationStore, SqliteStore};
use rtable::errors::AppError;
use rtable::models::TimeOfDay;
use rtable::models::reservation::{RejectReason, ReservationRequest, ReservationStatus};

// Monday 2025-10-13, 11:00
fn now() -> NaiveDateTime {
    date(13).and_hms_opt(11, 0, 0).unwrap()
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

fn request(d: NaiveDate, time: &str) -> ReservationRequest {
    ReservationRequest {
        date: d,
        time: time.parse().unwrap(),
        party_size: 4,
        name: "Ada Lovelace".into(),
        email: Some("ada@example.com".into()),
        phone: None,
        notes: None,
    }
}

fn reject(req: ReservationRequest) -> RejectReason {
    let cfg = Config::default();
    let availability = Availability::new(&cfg.schedule);
    ReserveLogic::validate(&availability, &cfg, &req, now()).expect_err("request should be rejected")
}

fn sqlite_store() -> SqliteStore {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("init db");
    SqliteStore::new(pool)
}

#[test]
fn test_valid_request_is_stored() {
    let cfg = Config::default();
    let availability = Availability::new(&cfg.schedule);
    let mut store = MemoryStore::new();

    let r = ReserveLogic::submit(&mut store, &availability, &cfg, request(date(15), "20:00"), now())
        .expect("reservation accepted");

    assert_eq!(r.id, 1);
    assert_eq!(r.status, ReservationStatus::Confirmed);
    assert_eq!(r.time.to_string(), "20:00");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_rejections_are_structured() {
    assert_eq!(reject(request(date(12), "20:00")), RejectReason::PastDate(date(12)));
    assert_eq!(reject(request(date(14), "20:00")), RejectReason::ClosedDay(date(14)));

    let t = |s: &str| s.parse::<TimeOfDay>().unwrap();
    assert_eq!(reject(request(date(15), "16:00")), RejectReason::OutsideHours(t("16:00")));
    assert_eq!(reject(request(date(15), "23:00")), RejectReason::OutsideHours(t("23:00")));
    assert_eq!(reject(request(date(15), "20:15")), RejectReason::NotOnSlot(t("20:15")));

    // today, slot already started
    assert_eq!(reject(request(date(13), "10:30")), RejectReason::SlotPassed(t("10:30")));
    assert_eq!(reject(request(date(13), "11:00")), RejectReason::SlotPassed(t("11:00")));
}

#[test]
fn test_later_slot_today_is_accepted() {
    let cfg = Config::default();
    let availability = Availability::new(&cfg.schedule);
    assert!(ReserveLogic::validate(&availability, &cfg, &request(date(13), "11:30"), now()).is_ok());
}

#[test]
fn test_booking_horizon() {
    let cfg = Config {
        booking_horizon_days: 30,
        ..Config::default()
    };
    let availability = Availability::new(&cfg.schedule);

    // 2025-11-12 is a Wednesday, 30 days after 2025-10-13
    let ok = request(NaiveDate::from_ymd_opt(2025, 11, 12).unwrap(), "20:00");
    assert!(ReserveLogic::validate(&availability, &cfg, &ok, now()).is_ok());

    let too_far = NaiveDate::from_ymd_opt(2025, 11, 13).unwrap();
    assert_eq!(
        ReserveLogic::validate(&availability, &cfg, &request(too_far, "20:00"), now()),
        Err(RejectReason::BeyondHorizon(too_far, 30))
    );
}

#[test]
fn test_party_size_and_contact_rules() {
    let mut req = request(date(15), "20:00");
    req.party_size = 0;
    assert_eq!(reject(req), RejectReason::PartySize { got: 0, max: 12 });

    let mut req = request(date(15), "20:00");
    req.party_size = 13;
    assert_eq!(reject(req), RejectReason::PartySize { got: 13, max: 12 });

    let mut req = request(date(15), "20:00");
    req.name = "   ".into();
    assert_eq!(reject(req), RejectReason::MissingName);

    let mut req = request(date(15), "20:00");
    req.email = None;
    assert_eq!(reject(req), RejectReason::MissingContact);

    let mut req = request(date(15), "20:00");
    req.email = Some("not-an-email".into());
    assert_eq!(reject(req), RejectReason::InvalidEmail("not-an-email".into()));

    let mut req = request(date(15), "20:00");
    req.email = None;
    req.phone = Some("12-34".into());
    assert_eq!(reject(req), RejectReason::InvalidPhone("12-34".into()));
}

#[test]
fn test_phone_only_contact_is_enough() {
    let cfg = Config::default();
    let availability = Availability::new(&cfg.schedule);

    let mut req = request(date(16), "13:30");
    req.email = None;
    req.phone = Some("+34 612 345 678".into());

    assert!(ReserveLogic::validate(&availability, &cfg, &req, now()).is_ok());
}

#[test]
fn test_submit_maps_rejection_to_app_error() {
    let cfg = Config::default();
    let availability = Availability::new(&cfg.schedule);
    let mut store = MemoryStore::new();

    let err = ReserveLogic::submit(&mut store, &availability, &cfg, request(date(14), "20:00"), now())
        .unwrap_err();

    assert!(matches!(err, AppError::Rejected(RejectReason::ClosedDay(_))));
    assert!(store.is_empty());
}

#[test]
fn test_sqlite_store_round_trip() {
    let cfg = Config::default();
    let availability = Availability::new(&cfg.schedule);
    let mut store = sqlite_store();

    let mut req = request(date(17), "21:00");
    req.notes = Some("window table".into());
    let first = ReserveLogic::submit(&mut store, &availability, &cfg, req, now()).unwrap();
    let second =
        ReserveLogic::submit(&mut store, &availability, &cfg, request(date(15), "13:00"), now())
            .unwrap();

    assert!(second.id > first.id);

    let loaded = store.get(first.id).unwrap().expect("stored reservation");
    assert_eq!(loaded.notes.as_deref(), Some("window table"));
    assert_eq!(loaded.email.as_deref(), Some("ada@example.com"));

    // chronological, whatever the insertion order
    let all = store.all().unwrap();
    assert_eq!(
        all.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    let wed = store.between(date(15), date(15)).unwrap();
    assert_eq!(wed.len(), 1);
    assert_eq!(wed[0].id, second.id);
}

#[test]
fn test_cancel_marks_reservation() {
    let cfg = Config::default();
    let availability = Availability::new(&cfg.schedule);

    let mut sqlite = sqlite_store();
    let mut memory = MemoryStore::new();
    let stores: [&mut dyn ReservationStore; 2] = [&mut sqlite, &mut memory];

    for store in stores {
        let r = ReserveLogic::submit(&mut *store, &availability, &cfg, request(date(18), "19:30"), now())
            .unwrap();

        let cancelled = store.cancel(r.id).unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);

        assert!(matches!(
            store.cancel(9999),
            Err(AppError::ReservationNotFound(9999))
        ));
    }
}

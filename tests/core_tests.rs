use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use punchclock::core::deviation::{describe_deviation, deviation_minutes, format_deviation};
use punchclock::core::ledger::{Ledger, NextPunch};
use punchclock::core::report::organize_report;
use punchclock::errors::AppError;
use punchclock::models::employee::Employee;
use punchclock::models::event::PunchEvent;
use punchclock::models::outcome::Outcome;
use punchclock::models::schedule::Schedule;
use punchclock::store::{EventFilter, EventStore, MemoryStore, StoreError};

fn offset() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).expect("fixed offset")
}

fn maria() -> Employee {
    Employee {
        name: "Maria Silva".to_string(),
        title: "Analyst".to_string(),
        company: "Acme".to_string(),
    }
}

fn stamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
    offset()
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid timestamp")
}

fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, mo, d).expect("valid date")
}

fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

fn sample_event(code: &str, d: NaiveDate, t: NaiveTime, event_name: &str, note: &str) -> PunchEvent {
    PunchEvent {
        id: format!("{}-{}T{}", code, d, t),
        employee_code: code.to_string(),
        employee_name: "Maria Silva".to_string(),
        title: "Analyst".to_string(),
        date: d,
        time: t,
        event_name: event_name.to_string(),
        deviation_min: 0,
        note: note.to_string(),
    }
}

// ---- deviation ----

#[test]
fn deviation_is_zero_for_an_exact_match() {
    let d = date(2026, 3, 2);
    assert_eq!(deviation_minutes(d, time(8, 0, 0), time(8, 0, 0)), 0);
}

#[test]
fn deviation_is_signed_and_antisymmetric() {
    let d = date(2026, 3, 2);
    assert_eq!(deviation_minutes(d, time(8, 10, 0), time(8, 0, 0)), 10);
    assert_eq!(deviation_minutes(d, time(8, 0, 0), time(8, 10, 0)), -10);
}

#[test]
fn deviation_rounds_seconds_half_away_from_zero() {
    let d = date(2026, 3, 2);
    let expected = time(8, 0, 0);

    assert_eq!(deviation_minutes(d, time(8, 0, 29), expected), 0);
    assert_eq!(deviation_minutes(d, time(8, 0, 30), expected), 1);
    assert_eq!(deviation_minutes(d, time(8, 1, 30), expected), 2);
    assert_eq!(deviation_minutes(d, time(7, 59, 31), expected), 0);
    assert_eq!(deviation_minutes(d, time(7, 59, 30), expected), -1);
    assert_eq!(deviation_minutes(d, time(7, 58, 30), expected), -2);
}

#[test]
fn deviation_wording_covers_all_signs() {
    assert_eq!(describe_deviation(10), "10 min late");
    assert_eq!(describe_deviation(-5), "5 min early");
    assert_eq!(describe_deviation(0), "on time");
}

#[test]
fn deviation_compact_form_keeps_the_sign() {
    assert_eq!(format_deviation(10), "+10");
    assert_eq!(format_deviation(-5), "-5");
    assert_eq!(format_deviation(0), "0");
}

// ---- ledger ----

#[test]
fn first_punch_fulfills_the_first_slot_even_when_late() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();

    // 12:30 is closest to Lunch End, but the first punch of the day is
    // always matched to the first slot.
    let receipt = Ledger::record(&mut store, &schedule, "1001", &maria(), stamp(2026, 3, 2, 12, 30, 0))
        .expect("record punch");

    let ev = receipt.event.expect("event appended");
    assert_eq!(ev.event_name, "Start of Shift");
    assert_eq!(ev.deviation_min, 270);
    assert_eq!(store.len(), 1);
}

#[test]
fn punches_accumulate_deviations_per_slot() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();
    let emp = maria();

    let punches = [
        (stamp(2026, 3, 2, 8, 10, 0), "Start of Shift", 10),
        (stamp(2026, 3, 2, 11, 0, 0), "Lunch Start", 0),
        (stamp(2026, 3, 2, 12, 30, 0), "Lunch End", 30),
        (stamp(2026, 3, 2, 17, 45, 0), "End of Shift", -15),
    ];

    for (at, expected_event, expected_dev) in punches {
        let receipt = Ledger::record(&mut store, &schedule, "1001", &emp, at).expect("record punch");
        let ev = receipt.event.expect("event appended");
        assert_eq!(ev.event_name, expected_event);
        assert_eq!(ev.deviation_min, expected_dev);
        assert!(receipt.feedback.is_success());
    }
}

#[test]
fn punch_after_day_complete_is_a_soft_noop() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();
    let emp = maria();

    for hour in [8, 11, 12, 18] {
        Ledger::record(&mut store, &schedule, "1001", &emp, stamp(2026, 3, 2, hour, 0, 0))
            .expect("record punch");
    }

    let receipt = Ledger::record(&mut store, &schedule, "1001", &emp, stamp(2026, 3, 2, 18, 30, 0))
        .expect("record punch");

    assert_eq!(receipt.feedback.outcome, Outcome::Warning);
    assert!(receipt.event.is_none());
    assert_eq!(store.len(), 4);
}

#[test]
fn next_expected_walks_the_schedule_by_count() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();
    let emp = maria();
    let d = date(2026, 3, 2);

    let next = Ledger::next_expected(&store, &schedule, "1001", d).expect("next");
    assert_eq!(
        next,
        NextPunch::Slot {
            index: 0,
            event: "Start of Shift".to_string(),
            expected: time(8, 0, 0),
        }
    );

    Ledger::record(&mut store, &schedule, "1001", &emp, stamp(2026, 3, 2, 8, 0, 0)).expect("record");

    let next = Ledger::next_expected(&store, &schedule, "1001", d).expect("next");
    assert_eq!(
        next,
        NextPunch::Slot {
            index: 1,
            event: "Lunch Start".to_string(),
            expected: time(11, 0, 0),
        }
    );

    for hour in [11, 12, 18] {
        Ledger::record(&mut store, &schedule, "1001", &emp, stamp(2026, 3, 2, hour, 0, 0))
            .expect("record");
    }

    let next = Ledger::next_expected(&store, &schedule, "1001", d).expect("next");
    assert_eq!(next, NextPunch::DayComplete);
}

#[test]
fn next_expected_counts_per_employee_and_day() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();
    let emp = maria();

    Ledger::record(&mut store, &schedule, "1001", &emp, stamp(2026, 3, 2, 8, 0, 0)).expect("record");

    // A different employee and a different day both start from slot 0.
    let other = Ledger::next_expected(&store, &schedule, "1002", date(2026, 3, 2)).expect("next");
    assert!(matches!(other, NextPunch::Slot { index: 0, .. }));

    let tomorrow = Ledger::next_expected(&store, &schedule, "1001", date(2026, 3, 3)).expect("next");
    assert!(matches!(tomorrow, NextPunch::Slot { index: 0, .. }));
}

#[test]
fn colliding_punch_ids_surface_as_integrity_errors() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();
    let emp = maria();
    let at = stamp(2026, 3, 2, 8, 0, 0);

    Ledger::record(&mut store, &schedule, "1001", &emp, at).expect("record");
    let err = Ledger::record(&mut store, &schedule, "1001", &emp, at)
        .expect_err("same employee and instant must collide");

    assert!(matches!(err, AppError::Store(StoreError::DuplicateId(_))));
    assert_eq!(store.len(), 1);
}

#[test]
fn correct_recomputes_the_deviation_with_the_time() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();

    let receipt = Ledger::record(&mut store, &schedule, "1001", &maria(), stamp(2026, 3, 2, 8, 10, 0))
        .expect("record");
    let id = receipt.event.expect("event appended").id;

    let feedback = Ledger::correct(&mut store, &schedule, &id, Some("08:15:00"), None).expect("correct");
    assert!(feedback.is_success());
    assert!(feedback.message.contains("15 min late"));

    let ev = &store.list_all().expect("list")[0];
    assert_eq!(ev.time, time(8, 15, 0));
    assert_eq!(ev.deviation_min, 15);
}

#[test]
fn correct_with_note_only_keeps_the_deviation() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();

    let receipt = Ledger::record(&mut store, &schedule, "1001", &maria(), stamp(2026, 3, 2, 8, 10, 0))
        .expect("record");
    let id = receipt.event.expect("event appended").id;

    let feedback = Ledger::correct(&mut store, &schedule, &id, None, Some("late bus")).expect("correct");
    assert!(feedback.is_success());

    let ev = &store.list_all().expect("list")[0];
    assert_eq!(ev.deviation_min, 10);
    assert_eq!(ev.note, "late bus");
}

#[test]
fn correct_rejects_malformed_times_without_touching_the_store() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();

    let receipt = Ledger::record(&mut store, &schedule, "1001", &maria(), stamp(2026, 3, 2, 8, 10, 0))
        .expect("record");
    let id = receipt.event.expect("event appended").id;

    let feedback = Ledger::correct(&mut store, &schedule, &id, Some("9h15"), None).expect("correct");
    assert_eq!(feedback.outcome, Outcome::Error);
    assert!(feedback.message.contains("Invalid time format"));

    let ev = &store.list_all().expect("list")[0];
    assert_eq!(ev.time, time(8, 10, 0));
    assert_eq!(ev.deviation_min, 10);
}

#[test]
fn correct_reports_unknown_ids_as_recoverable() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();

    let feedback =
        Ledger::correct(&mut store, &schedule, "0000-bogus", Some("08:00:00"), None).expect("correct");
    assert_eq!(feedback.outcome, Outcome::Error);
    assert!(feedback.message.contains("not found"));
}

#[test]
fn correct_without_changes_is_a_noop() {
    let mut store = MemoryStore::new();
    let schedule = Schedule::standard();

    let feedback = Ledger::correct(&mut store, &schedule, "irrelevant", None, None).expect("correct");
    assert!(feedback.is_success());
    assert_eq!(feedback.message, "Nothing to update.");
}

// ---- report ----

#[test]
fn report_pivots_a_full_day_into_one_row() {
    let schedule = Schedule::standard();
    let d = date(2026, 3, 2);
    let events = vec![
        sample_event("1001", d, time(8, 0, 0), "Start of Shift", "late bus"),
        sample_event("1001", d, time(11, 5, 0), "Lunch Start", ""),
        sample_event("1001", d, time(12, 0, 0), "Lunch End", ""),
        sample_event("1001", d, time(18, 10, 0), "End of Shift", ""),
    ];

    let rows = organize_report(&events, &schedule, " | ");
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.date, d);
    assert_eq!(row.employee_code, "1001");
    assert_eq!(row.slots, vec![
        Some(time(8, 0, 0)),
        Some(time(11, 5, 0)),
        Some(time(12, 0, 0)),
        Some(time(18, 10, 0)),
    ]);
    assert_eq!(row.break_duration, "00:55");
    assert_eq!(row.worked_duration, "09:15");
    assert_eq!(row.notes, "late bus");
}

#[test]
fn report_keeps_the_first_punch_per_slot() {
    let schedule = Schedule::standard();
    let d = date(2026, 3, 2);
    let events = vec![
        sample_event("1001", d, time(8, 0, 0), "Start of Shift", ""),
        sample_event("1001", d, time(8, 5, 0), "Start of Shift", ""),
    ];

    let rows = organize_report(&events, &schedule, " | ");
    assert_eq!(rows[0].slots[0], Some(time(8, 0, 0)));
}

#[test]
fn report_ignores_unknown_events_but_keeps_their_notes() {
    let schedule = Schedule::standard();
    let d = date(2026, 3, 2);
    let events = vec![
        sample_event("1001", d, time(8, 0, 0), "Start of Shift", ""),
        sample_event("1001", d, time(19, 0, 0), "Overtime", "extra hour"),
    ];

    let rows = organize_report(&events, &schedule, " | ");
    let row = &rows[0];
    assert_eq!(row.slots[0], Some(time(8, 0, 0)));
    assert!(row.slots[1..].iter().all(Option::is_none));
    assert_eq!(row.notes, "extra hour");
}

#[test]
fn report_clamps_negative_durations_to_zero() {
    let schedule = Schedule::standard();
    let d = date(2026, 3, 2);
    let events = vec![
        sample_event("1001", d, time(8, 0, 0), "Start of Shift", ""),
        sample_event("1001", d, time(7, 0, 0), "End of Shift", ""),
    ];

    let rows = organize_report(&events, &schedule, " | ");
    assert_eq!(rows[0].worked_duration, "00:00");
    assert_eq!(rows[0].break_duration, "00:00");
}

#[test]
fn report_merges_notes_with_the_configured_separator() {
    let schedule = Schedule::standard();
    let d = date(2026, 3, 2);
    let events = vec![
        sample_event("1001", d, time(8, 0, 0), "Start of Shift", "traffic"),
        sample_event("1001", d, time(11, 0, 0), "Lunch Start", "traffic"),
        sample_event("1001", d, time(12, 0, 0), "Lunch End", "meeting ran long"),
    ];

    let rows = organize_report(&events, &schedule, "; ");
    assert_eq!(rows[0].notes, "traffic; meeting ran long");
}

#[test]
fn report_orders_rows_by_date_then_employee() {
    let schedule = Schedule::standard();
    let events = vec![
        sample_event("1002", date(2026, 3, 3), time(8, 0, 0), "Start of Shift", ""),
        sample_event("1002", date(2026, 3, 2), time(8, 0, 0), "Start of Shift", ""),
        sample_event("1001", date(2026, 3, 2), time(8, 0, 0), "Start of Shift", ""),
    ];

    let rows = organize_report(&events, &schedule, " | ");
    let keys: Vec<(NaiveDate, &str)> = rows
        .iter()
        .map(|r| (r.date, r.employee_code.as_str()))
        .collect();
    assert_eq!(keys, vec![
        (date(2026, 3, 2), "1001"),
        (date(2026, 3, 2), "1002"),
        (date(2026, 3, 3), "1002"),
    ]);
}

// ---- store filter ----

#[test]
fn memory_store_round_trips_events() {
    let mut store = MemoryStore::new();
    let ev = sample_event("1001", date(2026, 3, 2), time(8, 0, 0), "Start of Shift", "x");

    store.append(&ev).expect("append");
    assert_eq!(store.list_all().expect("list"), vec![ev]);
}

#[test]
fn employee_listing_spans_days_in_order() {
    let mut store = MemoryStore::new();
    store
        .append(&sample_event("1001", date(2026, 3, 3), time(8, 0, 0), "Start of Shift", ""))
        .expect("append");
    store
        .append(&sample_event("1002", date(2026, 3, 2), time(8, 0, 0), "Start of Shift", ""))
        .expect("append");
    store
        .append(&sample_event("1001", date(2026, 3, 2), time(11, 0, 0), "Lunch Start", ""))
        .expect("append");

    let events = Ledger::list_for_employee(&store, "1001").expect("list");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].date, date(2026, 3, 2));
    assert_eq!(events[1].date, date(2026, 3, 3));
    assert!(events.iter().all(|e| e.employee_code == "1001"));
}

#[test]
fn filtered_listing_applies_employee_and_date_bounds() {
    let mut store = MemoryStore::new();
    store
        .append(&sample_event("1001", date(2026, 3, 2), time(8, 0, 0), "Start of Shift", ""))
        .expect("append");
    store
        .append(&sample_event("1002", date(2026, 3, 2), time(8, 5, 0), "Start of Shift", ""))
        .expect("append");
    store
        .append(&sample_event("1001", date(2026, 4, 1), time(8, 0, 0), "Start of Shift", ""))
        .expect("append");

    let filter = EventFilter {
        employee: Some("1001".to_string()),
        from: Some(date(2026, 3, 1)),
        to: Some(date(2026, 3, 31)),
    };
    let hits = store.list_filtered(&filter).expect("list filtered");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].employee_code, "1001");
    assert_eq!(hits[0].date, date(2026, 3, 2));
}

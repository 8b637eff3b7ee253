//! Daily report assembly: pivot raw punch events into one row per
//! `(date, employee)` with schedule-shaped time columns and computed
//! break/worked durations.

use crate::models::event::PunchEvent;
use crate::models::report::ReportRow;
use crate::models::schedule::Schedule;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Pivot `events` into per-day report rows.
///
/// Within a group, each event lands in the slot named by its
/// `event_name`; on duplicates the chronologically first punch wins and
/// later ones only contribute their notes. Events whose name matches no
/// schedule entry fill no slot. Durations clamp at zero so a reversed or
/// partial day never renders negative.
pub fn organize_report(
    events: &[PunchEvent],
    schedule: &Schedule,
    note_separator: &str,
) -> Vec<ReportRow> {
    let mut ordered: Vec<&PunchEvent> = events.iter().collect();
    ordered.sort_by_key(|e| (e.date, e.time));

    let mut groups: BTreeMap<(NaiveDate, String), Vec<&PunchEvent>> = BTreeMap::new();
    for ev in ordered {
        groups
            .entry((ev.date, ev.employee_code.clone()))
            .or_default()
            .push(ev);
    }

    let mut rows = Vec::with_capacity(groups.len());
    for ((date, code), day_events) in groups {
        let mut slots = vec![None; schedule.len()];
        let mut notes: Vec<&str> = Vec::new();

        for ev in &day_events {
            if let Some(pos) = schedule.position(&ev.event_name)
                && slots[pos].is_none()
            {
                slots[pos] = Some(ev.time);
            }
            let note = ev.note.trim();
            if !note.is_empty() && !notes.contains(&note) {
                notes.push(note);
            }
        }

        let break_min = break_minutes(&slots);
        let worked_min = worked_minutes(&slots, break_min);

        let employee_name = day_events
            .first()
            .map(|e| e.employee_name.clone())
            .unwrap_or_default();

        rows.push(ReportRow {
            date,
            employee_code: code,
            employee_name,
            slots,
            break_duration: format_duration(break_min),
            worked_duration: format_duration(worked_min),
            notes: notes.join(note_separator),
        });
    }

    rows
}

/// Minutes between the second and third slots (lunch out/in), when the
/// schedule has at least four entries and both slots are filled.
fn break_minutes(slots: &[Option<NaiveTime>]) -> i64 {
    if slots.len() < 4 {
        return 0;
    }
    match (slots[1], slots[2]) {
        (Some(out), Some(back)) => back.signed_duration_since(out).num_minutes().max(0),
        _ => 0,
    }
}

/// Minutes from the first to the last slot, minus the break. Zero unless
/// both ends of the day are present.
fn worked_minutes(slots: &[Option<NaiveTime>], break_min: i64) -> i64 {
    let (Some(Some(first)), Some(Some(last))) = (slots.first(), slots.last()) else {
        return 0;
    };
    let span = last.signed_duration_since(*first).num_minutes();
    (span - break_min).max(0)
}

fn format_duration(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

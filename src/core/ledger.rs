//! Ledger engine: the punch state machine.
//!
//! Each `(employee, date)` pair walks the schedule positionally: the Nth
//! punch of the day fulfills the Nth schedule entry, never the nearest
//! expected time. An out-of-order punch therefore gets the slot's name and
//! deviation, not its own; that is deliberate policy, not an oversight.
//!
//! Business-rule violations surface as `Feedback` (message + outcome) so
//! callers can show them and move on; store and integrity failures
//! propagate as hard errors.

use crate::core::deviation::{describe_deviation, deviation_minutes};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::event::PunchEvent;
use crate::models::outcome::Feedback;
use crate::models::schedule::Schedule;
use crate::store::{EventFilter, EventStore, PunchPatch, StoreError};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike};

/// What the next punch of the day would fulfill.
#[derive(Debug, Clone, PartialEq)]
pub enum NextPunch {
    Slot {
        index: usize,
        event: String,
        expected: NaiveTime,
    },
    DayComplete,
}

/// Result of a `record` call: the feedback to show, plus the created
/// event when one was appended.
#[derive(Debug)]
pub struct PunchReceipt {
    pub feedback: Feedback,
    pub event: Option<PunchEvent>,
}

pub struct Ledger;

impl Ledger {
    /// Next expected schedule slot for `code` on `date`, by punch count.
    pub fn next_expected(
        store: &dyn EventStore,
        schedule: &Schedule,
        code: &str,
        date: NaiveDate,
    ) -> AppResult<NextPunch> {
        let today = store.list_filtered(&EventFilter::for_day(code, date))?;
        let count = today.len();

        match schedule.entry_at(count) {
            Some(entry) => Ok(NextPunch::Slot {
                index: count,
                event: entry.event.clone(),
                expected: entry.time,
            }),
            None => Ok(NextPunch::DayComplete),
        }
    }

    /// Record a punch for `code` at `now`.
    ///
    /// When the day is already complete this is a soft no-op: the store is
    /// left untouched and the receipt carries a warning, so calling it
    /// again is always safe.
    pub fn record(
        store: &mut dyn EventStore,
        schedule: &Schedule,
        code: &str,
        employee: &Employee,
        now: DateTime<FixedOffset>,
    ) -> AppResult<PunchReceipt> {
        // Sub-second precision would leak into ids and stored times.
        let now = now.with_nanosecond(0).unwrap_or(now);
        let date = now.date_naive();
        let time = now.time();

        let next = Self::next_expected(store, schedule, code, date)?;

        let (event_name, expected) = match next {
            NextPunch::DayComplete => {
                return Ok(PunchReceipt {
                    feedback: Feedback::warning(format!(
                        "Workday already complete for {}.",
                        employee.name
                    )),
                    event: None,
                });
            }
            NextPunch::Slot {
                event, expected, ..
            } => (event, expected),
        };

        let deviation = deviation_minutes(date, time, expected);

        let event = PunchEvent {
            id: format!("{}-{}", code, now.to_rfc3339()),
            employee_code: code.to_string(),
            employee_name: employee.name.clone(),
            title: employee.title.clone(),
            date,
            time,
            event_name: event_name.clone(),
            deviation_min: deviation,
            note: String::new(),
        };

        store.append(&event)?;

        let message = format!(
            "'{}' recorded for {} at {} ({}).",
            event_name,
            employee.name,
            time.format("%H:%M:%S"),
            describe_deviation(deviation)
        );

        Ok(PunchReceipt {
            feedback: Feedback::success(message),
            event: Some(event),
        })
    }

    /// Admin correction of a stored punch: new time and/or new note.
    ///
    /// A new time must parse as HH:MM:SS and triggers a deviation
    /// recomputation against the event's stored date and event name; time
    /// and deviation are persisted in one patch. A note-only edit leaves
    /// the deviation untouched. With neither argument the call is a no-op
    /// success.
    pub fn correct(
        store: &mut dyn EventStore,
        schedule: &Schedule,
        id: &str,
        new_time: Option<&str>,
        new_note: Option<&str>,
    ) -> AppResult<Feedback> {
        if new_time.is_none() && new_note.is_none() {
            return Ok(Feedback::success("Nothing to update."));
        }

        let events = store.list_all()?;
        let Some(current) = events.into_iter().find(|e| e.id == id) else {
            return Ok(Feedback::error(format!("Punch '{}' not found.", id)));
        };

        let mut patch = PunchPatch {
            note: new_note.map(|n| n.to_string()),
            ..PunchPatch::default()
        };

        let mut new_deviation = None;
        if let Some(raw) = new_time {
            let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M:%S") else {
                return Ok(Feedback::error("Invalid time format. Use HH:MM:SS."));
            };

            let Some(expected) = schedule.expected_time(&current.event_name) else {
                return Ok(Feedback::error(format!(
                    "Event '{}' is not part of the daily schedule.",
                    current.event_name
                )));
            };

            let deviation = deviation_minutes(current.date, time, expected);
            patch.time = Some(time);
            patch.deviation_min = Some(deviation);
            new_deviation = Some(deviation);
        }

        match store.update_by_id(id, &patch) {
            Ok(()) => {}
            Err(StoreError::NotFound(_)) => {
                return Ok(Feedback::error(format!("Punch '{}' not found.", id)));
            }
            Err(e) => return Err(e.into()),
        }

        let message = match new_deviation {
            Some(dev) => format!(
                "Punch '{}' updated. New deviation: {}.",
                id,
                describe_deviation(dev)
            ),
            None => format!("Punch '{}' updated.", id),
        };

        Ok(Feedback::success(message))
    }

    /// All events matching `filter`, sorted by `(date, time)`.
    pub fn list_events(
        store: &dyn EventStore,
        filter: &EventFilter,
    ) -> AppResult<Vec<PunchEvent>> {
        let mut events = store.list_filtered(filter)?;
        events.sort_by_key(|e| (e.date, e.time));
        Ok(events)
    }

    /// Every event for one employee, sorted by `(date, time)`.
    pub fn list_for_employee(store: &dyn EventStore, code: &str) -> AppResult<Vec<PunchEvent>> {
        let filter = EventFilter {
            employee: Some(code.to_string()),
            ..EventFilter::default()
        };
        Self::list_events(store, &filter)
    }
}

//! The daily schedule: an ordered list of named events with expected times.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One named slot of the working day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub event: String,    // ⇔ punches.event_name
    pub time: NaiveTime,  // expected time of day ("HH:MM:SS")
}

impl ScheduleEntry {
    pub fn new(event: &str, time: NaiveTime) -> Self {
        Self {
            event: event.to_string(),
            time,
        }
    }
}

/// The canonical four-event day used when the config file does not
/// override the schedule.
pub fn standard_entries() -> Vec<ScheduleEntry> {
    vec![
        ScheduleEntry::new("Start of Shift", NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
        ScheduleEntry::new("Lunch Start", NaiveTime::from_hms_opt(11, 0, 0).unwrap()),
        ScheduleEntry::new("Lunch End", NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
        ScheduleEntry::new("End of Shift", NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
    ]
}

/// Ordered, name-unique daily schedule.
///
/// The order is load-bearing: the Nth punch of an employee's day is matched
/// to the Nth entry, never to the nearest expected time.
#[derive(Debug, Clone)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Build a schedule, rejecting empty lists and duplicate event names.
    pub fn new(entries: Vec<ScheduleEntry>) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::Config("schedule must not be empty".to_string()));
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.event == entry.event) {
                return Err(AppError::Config(format!(
                    "duplicate schedule event '{}'",
                    entry.event
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn standard() -> Self {
        Self {
            entries: standard_entries(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn entry_at(&self, index: usize) -> Option<&ScheduleEntry> {
        self.entries.get(index)
    }

    /// Event names in canonical daily order.
    pub fn event_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.event.as_str()).collect()
    }

    /// Expected time for a named event, if it belongs to the schedule.
    pub fn expected_time(&self, event: &str) -> Option<NaiveTime> {
        self.entries
            .iter()
            .find(|e| e.event == event)
            .map(|e| e.time)
    }

    /// Position of a named event in the daily order.
    pub fn position(&self, event: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.event == event)
    }
}

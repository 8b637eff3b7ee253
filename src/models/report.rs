//! The organized daily report row: one row per (date, employee), with one
//! column per schedule slot plus derived durations. Derived on demand,
//! never persisted.

use crate::models::schedule::Schedule;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Placeholder for schedule slots with no recorded punch.
pub const MISSING_SLOT: &str = "N/A";

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub employee_code: String,
    pub employee_name: String,
    /// Recorded time per schedule slot, in canonical order.
    pub slots: Vec<Option<NaiveTime>>,
    /// "HH:MM", clamped at zero.
    pub break_duration: String,
    /// "HH:MM", clamped at zero.
    pub worked_duration: String,
    /// De-duplicated non-empty notes, joined with the configured separator.
    pub notes: String,
}

impl ReportRow {
    /// Column headers for this row shape, fixed by the schedule.
    pub fn headers(schedule: &Schedule) -> Vec<String> {
        let mut out = vec![
            "Date".to_string(),
            "Code".to_string(),
            "Name".to_string(),
        ];
        out.extend(schedule.event_names().iter().map(|n| n.to_string()));
        out.push("Break".to_string());
        out.push("Worked".to_string());
        out.push("Notes".to_string());
        out
    }

    /// Flat string cells in header order. Missing slots render as "N/A".
    pub fn cells(&self) -> Vec<String> {
        let mut out = vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.employee_code.clone(),
            self.employee_name.clone(),
        ];
        for slot in &self.slots {
            out.push(match slot {
                Some(t) => t.format("%H:%M:%S").to_string(),
                None => MISSING_SLOT.to_string(),
            });
        }
        out.push(self.break_duration.clone());
        out.push(self.worked_duration.clone());
        out.push(self.notes.clone());
        out
    }
}

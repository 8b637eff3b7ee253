// src/export/model.rs

use crate::models::event::PunchEvent;
use serde::Serialize;

/// Flat, string-friendly projection of a punch event for export.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: String,
    pub employee_code: String,
    pub employee_name: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub event: String,
    pub deviation_min: i64,
    pub note: String,
}

impl From<&PunchEvent> for PunchExport {
    fn from(ev: &PunchEvent) -> Self {
        Self {
            id: ev.id.clone(),
            employee_code: ev.employee_code.clone(),
            employee_name: ev.employee_name.clone(),
            title: ev.title.clone(),
            date: ev.date_str(),
            time: ev.time_str(),
            event: ev.event_name.clone(),
            deviation_min: ev.deviation_min,
            note: ev.note.clone(),
        }
    }
}

/// Header for CSV / XLSX / TXT event exports.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "employee_code",
        "employee_name",
        "title",
        "date",
        "time",
        "event",
        "deviation_min",
        "note",
    ]
}

pub(crate) fn punch_to_row(e: &PunchExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.employee_code.clone(),
        e.employee_name.clone(),
        e.title.clone(),
        e.date.clone(),
        e.time.clone(),
        e.event.clone(),
        e.deviation_min.to_string(),
        e.note.clone(),
    ]
}

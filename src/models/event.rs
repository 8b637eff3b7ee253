use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One recorded attendance punch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PunchEvent {
    pub id: String,            // ⇔ punches.id ("{code}-{RFC3339 timestamp}")
    pub employee_code: String, // ⇔ punches.employee_code
    pub employee_name: String, // ⇔ punches.employee_name
    pub title: String,         // ⇔ punches.title
    pub date: NaiveDate,       // ⇔ punches.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,       // ⇔ punches.time (TEXT "HH:MM:SS")
    pub event_name: String,    // ⇔ punches.event_name, one of the schedule names
    pub deviation_min: i64,    // ⇔ punches.deviation_min (signed, positive = late)
    pub note: String,          // ⇔ punches.note (TEXT, default '')
}

impl PunchEvent {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

//! Clock helpers. Every timestamp in the system is taken in the
//! configured UTC offset, never in the machine-local zone, so punches
//! recorded from different hosts land on the same workday.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Current instant expressed in the configured offset.
pub fn now_in(offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&offset)
}

/// Parse a wall-clock stamp (`YYYY-MM-DDTHH:MM:SS`) as a local time in
/// the configured offset.
pub fn parse_local_stamp(raw: &str, offset: FixedOffset) -> AppResult<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| AppError::InvalidDate(format!("'{raw}'. Use YYYY-MM-DDTHH:MM:SS.")))?;

    naive.and_local_timezone(offset).single().ok_or_else(|| {
        AppError::InvalidDate(format!("'{raw}' is ambiguous in the configured offset."))
    })
}

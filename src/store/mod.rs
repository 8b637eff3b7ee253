//! Event persistence: one abstract store interface with pluggable
//! backends (SQLite for the CLI, in-memory for embedding and tests).

pub mod audit;
pub mod backup;
pub mod memory;
pub mod migrate;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::event::PunchEvent;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Id collision on append. Should never occur under correct id
    /// generation; treated as an integrity error when seen.
    #[error("Duplicate punch id: {0}")]
    DuplicateId(String),

    #[error("Punch not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),
}

/// Partial mutation for `update_by_id`. `time` and `deviation_min` are
/// always patched together so the pair stays consistent on disk.
#[derive(Debug, Clone, Default)]
pub struct PunchPatch {
    pub time: Option<NaiveTime>,
    pub deviation_min: Option<i64>,
    pub note: Option<String>,
}

/// Employee/date-range filter for listings and exports.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub employee: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl EventFilter {
    pub fn for_day(employee: &str, date: NaiveDate) -> Self {
        Self {
            employee: Some(employee.to_string()),
            from: Some(date),
            to: Some(date),
        }
    }

    pub fn matches(&self, ev: &PunchEvent) -> bool {
        if let Some(code) = &self.employee
            && &ev.employee_code != code
        {
            return false;
        }
        if let Some(from) = self.from
            && ev.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && ev.date > to
        {
            return false;
        }
        true
    }
}

/// The persistence contract the ledger is written against.
///
/// Every mutating call persists fully before returning; `list_all` makes
/// no ordering promise, callers sort by `(date, time)` themselves.
pub trait EventStore {
    fn append(&mut self, event: &PunchEvent) -> Result<(), StoreError>;

    fn list_all(&self) -> Result<Vec<PunchEvent>, StoreError>;

    fn update_by_id(&mut self, id: &str, patch: &PunchPatch) -> Result<(), StoreError>;

    fn list_filtered(&self, filter: &EventFilter) -> Result<Vec<PunchEvent>, StoreError> {
        let mut out = self.list_all()?;
        out.retain(|ev| filter.matches(ev));
        Ok(out)
    }
}

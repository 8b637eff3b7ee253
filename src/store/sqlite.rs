//! SQLite backend for the event store.

use crate::errors::AppError;
use crate::models::event::PunchEvent;
use crate::store::{EventFilter, EventStore, PunchPatch, StoreError};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    /// Open the database file. Schema creation is the migration engine's
    /// job (`init` runs it); opening does not touch the schema.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}

pub fn map_row(row: &Row) -> rusqlite::Result<PunchEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = NaiveTime::parse_from_str(&time_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    Ok(PunchEvent {
        id: row.get("id")?,
        employee_code: row.get("employee_code")?,
        employee_name: row.get("employee_name")?,
        title: row.get("title")?,
        date,
        time,
        event_name: row.get("event_name")?,
        deviation_min: row.get("deviation_min")?,
        note: row.get("note")?,
    })
}

impl EventStore for SqliteStore {
    fn append(&mut self, event: &PunchEvent) -> Result<(), StoreError> {
        let exists = self
            .conn
            .prepare_cached("SELECT 1 FROM punches WHERE id = ?1")?
            .exists([event.id.as_str()])?;

        if exists {
            return Err(StoreError::DuplicateId(event.id.clone()));
        }

        self.conn.execute(
            "INSERT INTO punches
                 (id, employee_code, employee_name, title, date, time, event_name, deviation_min, note)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                event.id,
                event.employee_code,
                event.employee_name,
                event.title,
                event.date_str(),
                event.time_str(),
                event.event_name,
                event.deviation_min,
                event.note,
            ],
        )?;

        Ok(())
    }

    fn list_all(&self) -> Result<Vec<PunchEvent>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, employee_code, employee_name, title, date, time, event_name, deviation_min, note
             FROM punches",
        )?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn update_by_id(&mut self, id: &str, patch: &PunchPatch) -> Result<(), StoreError> {
        let time_str = patch.time.map(|t| t.format("%H:%M:%S").to_string());

        let changed = self.conn.execute(
            "UPDATE punches
             SET time          = COALESCE(?1, time),
                 deviation_min = COALESCE(?2, deviation_min),
                 note          = COALESCE(?3, note)
             WHERE id = ?4",
            params![time_str, patch.deviation_min, patch.note, id],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Push the filter down into SQL instead of scanning the full table.
    fn list_filtered(&self, filter: &EventFilter) -> Result<Vec<PunchEvent>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, employee_code, employee_name, title, date, time, event_name, deviation_min, note
             FROM punches
             WHERE (?1 IS NULL OR employee_code = ?1)
               AND (?2 IS NULL OR date >= ?2)
               AND (?3 IS NULL OR date <= ?3)",
        )?;

        let from = filter.from.map(|d| d.format("%Y-%m-%d").to_string());
        let to = filter.to.map(|d| d.format("%Y-%m-%d").to_string());

        let rows = stmt.query_map(params![filter.employee, from, to], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

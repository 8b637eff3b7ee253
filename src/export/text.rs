// src/export/text.rs

use crate::errors::AppResult;
use crate::export::model::{get_headers, punch_to_row};
use crate::export::{PunchExport, notify_export_success};
use crate::models::report::ReportRow;
use crate::models::schedule::Schedule;
use crate::ui::messages::info;
use crate::utils::table::Table;
use chrono::{DateTime, FixedOffset};
use std::fs;
use std::path::Path;

/// Export the organized report as a plain-text document.
pub(crate) fn export_report_txt(
    rows: &[ReportRow],
    schedule: &Schedule,
    generated: DateTime<FixedOffset>,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to TXT: {}", path.display()));

    let mut table = Table::new(ReportRow::headers(schedule));
    for row in rows {
        table.add_row(row.cells());
    }

    let body = render_document("ATTENDANCE REPORT", generated, &table);
    fs::write(path, body)?;

    notify_export_success("TXT", path);
    Ok(())
}

/// Export the raw event log as a plain-text document.
pub(crate) fn export_events_txt(
    events: &[PunchExport],
    generated: DateTime<FixedOffset>,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to TXT: {}", path.display()));

    let mut table = Table::new(get_headers());
    for ev in events {
        table.add_row(punch_to_row(ev));
    }

    let body = render_document("EVENT LOG", generated, &table);
    fs::write(path, body)?;

    notify_export_success("TXT", path);
    Ok(())
}

fn render_document(title: &str, generated: DateTime<FixedOffset>, table: &Table) -> String {
    format!(
        "{}\nGenerated: {}\n\n{}",
        title,
        generated.format("%Y-%m-%d %H:%M:%S %:z"),
        table.render()
    )
}

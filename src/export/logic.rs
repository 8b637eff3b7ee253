// src/export/logic.rs

use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::report::organize_report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::PunchExport;
use crate::export::range::parse_bounds;
use crate::store::audit::record_audit;
use crate::store::{EventFilter, SqliteStore};
use crate::ui::messages::warning;
use crate::utils::time::now_in;

use crate::export::json_csv::{
    export_events_csv, export_events_json, export_report_csv, export_report_json,
};
use crate::export::text::{export_events_txt, export_report_txt};
use crate::export::xlsx::{export_events_xlsx, export_report_xlsx};
use std::path::Path;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the organized report (default) or the raw event log.
    ///
    /// - `format`: one of csv, json, xlsx, txt
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        store: &SqliteStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        events_only: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let bounds = parse_bounds(range)?;
        let filter = EventFilter {
            employee: None,
            from: bounds.map(|(start, _)| start),
            to: bounds.map(|(_, end)| end),
        };

        let events = Ledger::list_events(store, &filter)?;

        if events.is_empty() {
            warning("No events found for selected range.");
            return Ok(());
        }

        let exports: Vec<PunchExport> = events.iter().map(PunchExport::from).collect();

        if events_only {
            match format {
                ExportFormat::Csv => export_events_csv(&exports, path)?,
                ExportFormat::Json => export_events_json(&exports, path)?,
                ExportFormat::Xlsx => export_events_xlsx(&exports, path)?,
                ExportFormat::Txt => {
                    let generated = now_in(cfg.offset()?);
                    export_events_txt(&exports, generated, path)?;
                }
            }
        } else {
            let schedule = cfg.schedule()?;
            let rows = organize_report(&events, &schedule, &cfg.note_separator);

            match format {
                ExportFormat::Csv => export_report_csv(&rows, &schedule, path)?,
                ExportFormat::Json => export_report_json(&rows, path)?,
                ExportFormat::Xlsx => export_report_xlsx(&rows, &exports, &schedule, path)?,
                ExportFormat::Txt => {
                    let generated = now_in(cfg.offset()?);
                    export_report_txt(&rows, &schedule, generated, path)?;
                }
            }
        }

        if let Err(e) = record_audit(
            &store.conn,
            "export",
            file,
            &format!("Exported {} event(s) as {}", events.len(), format.as_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

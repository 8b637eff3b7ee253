// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, punch_to_row};
use crate::export::{PunchExport, notify_export_success};
use crate::models::report::ReportRow;
use crate::models::schedule::Schedule;
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// How a column's cells should land in the sheet. Typed per column so
/// numeric-looking text such as employee codes stays text.
#[derive(Clone, Copy, Debug)]
enum CellKind {
    Text,
    Date,
    Time,
    Number,
}

/// Export the raw event log, styled and with auto column widths.
pub(crate) fn export_events_xlsx(events: &[PunchExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let headers: Vec<String> = get_headers().iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = events.iter().map(punch_to_row).collect();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Event Log").map_err(to_xlsx_app_error)?;
    fill_sheet(worksheet, &headers, &rows, &event_kinds())?;

    workbook.save(path).map_err(to_xlsx_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Export the organized report as a two-sheet workbook: the daily pivot
/// plus the raw events it was built from.
pub(crate) fn export_report_xlsx(
    report: &[ReportRow],
    events: &[PunchExport],
    schedule: &Schedule,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let report_headers = ReportRow::headers(schedule);
    let report_rows: Vec<Vec<String>> = report.iter().map(|r| r.cells()).collect();

    let event_headers: Vec<String> = get_headers().iter().map(|h| h.to_string()).collect();
    let event_rows: Vec<Vec<String>> = events.iter().map(punch_to_row).collect();

    let mut workbook = Workbook::new();

    let daily = workbook.add_worksheet();
    daily.set_name("Daily Report").map_err(to_xlsx_app_error)?;
    fill_sheet(daily, &report_headers, &report_rows, &report_kinds(schedule))?;

    let log = workbook.add_worksheet();
    log.set_name("Event Log").map_err(to_xlsx_app_error)?;
    fill_sheet(log, &event_headers, &event_rows, &event_kinds())?;

    workbook.save(path).map_err(to_xlsx_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn event_kinds() -> Vec<CellKind> {
    vec![
        CellKind::Text,   // id
        CellKind::Text,   // employee_code
        CellKind::Text,   // employee_name
        CellKind::Text,   // title
        CellKind::Date,   // date
        CellKind::Time,   // time
        CellKind::Text,   // event
        CellKind::Number, // deviation_min
        CellKind::Text,   // note
    ]
}

fn report_kinds(schedule: &Schedule) -> Vec<CellKind> {
    let mut kinds = vec![CellKind::Date, CellKind::Text, CellKind::Text];
    kinds.extend(vec![CellKind::Time; schedule.len()]);
    kinds.push(CellKind::Time); // break
    kinds.push(CellKind::Time); // worked
    kinds.push(CellKind::Text); // notes
    kinds
}

/// Write one full sheet: styled header, banded rows, frozen header row,
/// column widths sized to content.
fn fill_sheet(
    worksheet: &mut Worksheet,
    headers: &[String],
    rows: &[Vec<String>],
    kinds: &[CellKind],
) -> AppResult<()> {
    // ---------------------------
    // Empty dataset
    // ---------------------------
    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_xlsx_app_error)?;
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_xlsx_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Rows + column width tracking
    // ---------------------------
    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in cells.iter().enumerate() {
            let kind = kinds.get(col).copied().unwrap_or(CellKind::Text);
            write_cell(worksheet, row, col as u16, value, kind, band_color)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_xlsx_app_error)?;
    }

    Ok(())
}

/// Write a single cell as its column kind, falling back to plain text
/// when the value does not parse (placeholders such as "N/A").
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    kind: CellKind,
    bg: Color,
) -> AppResult<()> {
    match kind {
        CellKind::Date => {
            if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                let fmt = cell_format(bg).set_num_format("yyyy-mm-dd");
                worksheet
                    .write_with_format(row, col, date_serial(d), &fmt)
                    .map_err(to_xlsx_app_error)?;
                return Ok(());
            }
        }
        CellKind::Time => {
            if let Ok(t) = NaiveTime::parse_from_str(value, "%H:%M:%S") {
                let fmt = cell_format(bg).set_num_format("hh:mm:ss");
                worksheet
                    .write_with_format(row, col, time_fraction(t), &fmt)
                    .map_err(to_xlsx_app_error)?;
                return Ok(());
            }
            if let Ok(t) = NaiveTime::parse_from_str(value, "%H:%M") {
                let fmt = cell_format(bg).set_num_format("hh:mm");
                worksheet
                    .write_with_format(row, col, time_fraction(t), &fmt)
                    .map_err(to_xlsx_app_error)?;
                return Ok(());
            }
        }
        CellKind::Number => {
            if let Ok(num) = value.parse::<f64>() {
                let fmt = cell_format(bg).set_align(FormatAlign::Right);
                worksheet
                    .write_with_format(row, col, num, &fmt)
                    .map_err(to_xlsx_app_error)?;
                return Ok(());
            }
        }
        CellKind::Text => {}
    }

    worksheet
        .write_with_format(row, col, value, &cell_format(bg))
        .map_err(to_xlsx_app_error)?;

    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Days since the Excel epoch (1899-12-30).
fn date_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    d.signed_duration_since(epoch).num_days() as f64
}

/// Time of day as a fraction of 24 hours.
fn time_fraction(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}

fn to_xlsx_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

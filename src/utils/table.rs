//! Table rendering for terminal listings and text reports.
//!
//! Column widths grow to fit the widest cell. ANSI escapes are stripped
//! before measuring, so colored cells do not break the alignment.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(strip_ansi(cell).width());
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        lines.push(render_line(&self.headers, &widths));

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        lines.push(render_line(&rule, &widths));

        for row in &self.rows {
            lines.push(render_line(row, &widths));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut parts = Vec::with_capacity(cells.len());
    for (i, cell) in cells.iter().enumerate() {
        let width = widths.get(i).copied().unwrap_or(0);
        parts.push(pad_cell(cell, width));
    }
    parts.join("  ").trim_end().to_string()
}

/// Pad on visible width so ANSI codes do not shift the column.
fn pad_cell(cell: &str, width: usize) -> String {
    let visible = strip_ansi(cell).width();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(visible)))
}

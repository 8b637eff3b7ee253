use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::report::organize_report;
use crate::errors::AppResult;
use crate::export::range::parse_bounds;
use crate::models::report::ReportRow;
use crate::store::{EventFilter, SqliteStore};
use crate::ui::messages;
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;

/// Show the organized daily report, one row per (date, employee).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { employee, period } = cmd {
        let schedule = cfg.schedule()?;
        let store = SqliteStore::open(&cfg.database)?;

        let bounds = parse_bounds(period)?;
        let filter = EventFilter {
            employee: employee.clone(),
            from: bounds.map(|(start, _)| start),
            to: bounds.map(|(_, end)| end),
        };

        let events = Ledger::list_events(&store, &filter)?;

        if events.is_empty() {
            messages::info("No punches recorded for the selected filter.");
            return Ok(());
        }

        let rows = organize_report(&events, &schedule, &cfg.note_separator);

        let mut table = Table::new(ReportRow::headers(&schedule));
        for row in &rows {
            let cells = row
                .cells()
                .into_iter()
                .map(|cell| colorize_optional(&cell))
                .collect();
            table.add_row(cells);
        }

        print!("{}", table.render());
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::deviation::format_deviation;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::export::range::parse_bounds;
use crate::store::{EventFilter, SqliteStore};
use crate::ui::messages;
use crate::utils::colors::{RESET, color_for_deviation};
use crate::utils::table::Table;

/// List raw punch events, optionally filtered by employee and period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { employee, period } = cmd {
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

        let mut table = Table::new(vec![
            "Id", "Date", "Time", "Code", "Name", "Event", "Dev", "Note",
        ]);

        for ev in &events {
            let dev_color = color_for_deviation(ev.deviation_min);
            table.add_row(vec![
                ev.id.clone(),
                ev.date_str(),
                ev.time_str(),
                ev.employee_code.clone(),
                ev.employee_name.clone(),
                ev.event_name.clone(),
                format!(
                    "{}{}{}",
                    dev_color,
                    format_deviation(ev.deviation_min),
                    RESET
                ),
                ev.note.clone(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}

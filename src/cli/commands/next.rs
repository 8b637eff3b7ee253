use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::{Ledger, NextPunch};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use crate::store::SqliteStore;
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use crate::utils::time::now_in;

/// Show which schedule event the employee's next punch would fulfill.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { code } = cmd {
        let offset = cfg.offset()?;
        let schedule = cfg.schedule()?;
        let roster = Roster::load(&expand_tilde(&cfg.roster))?;

        let employee = roster
            .lookup(code)
            .ok_or_else(|| AppError::UnknownEmployee(code.to_string()))?;

        let store = SqliteStore::open(&cfg.database)?;
        let today = now_in(offset).date_naive();

        match Ledger::next_expected(&store, &schedule, code, today)? {
            NextPunch::Slot {
                event, expected, ..
            } => {
                messages::info(format!(
                    "Next expected event for {}: '{}' at {}.",
                    employee.name,
                    event,
                    expected.format("%H:%M:%S")
                ));
            }
            NextPunch::DayComplete => {
                messages::warning(format!("Workday already complete for {}.", employee.name));
            }
        }
    }

    Ok(())
}

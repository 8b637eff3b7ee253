use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Roster;
use crate::store::SqliteStore;
use crate::store::audit::record_audit;
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use crate::utils::time::{now_in, parse_local_stamp};

/// Record the next scheduled punch for an employee.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { code, at } = cmd {
        //
        // 1️⃣ Resolve collaborators from config
        //
        let offset = cfg.offset()?;
        let schedule = cfg.schedule()?;
        let roster = Roster::load(&expand_tilde(&cfg.roster))?;

        let employee = roster
            .lookup(code)
            .ok_or_else(|| AppError::UnknownEmployee(code.to_string()))?;

        //
        // 2️⃣ Resolve the punch instant
        //
        let now = match at {
            Some(stamp) => parse_local_stamp(stamp, offset)?,
            None => now_in(offset),
        };

        //
        // 3️⃣ Record through the ledger
        //
        let mut store = SqliteStore::open(&cfg.database)?;
        let receipt = Ledger::record(&mut store, &schedule, code, employee, now)?;

        messages::emit(&receipt.feedback);

        //
        // 4️⃣ Internal log (non blocking)
        //
        if let Some(ev) = &receipt.event {
            if let Err(e) = record_audit(
                &store.conn,
                "punch",
                &ev.id,
                &format!(
                    "{} for {} at {} {}",
                    ev.event_name,
                    ev.employee_code,
                    ev.date_str(),
                    ev.time_str()
                ),
            ) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }
    }

    Ok(())
}

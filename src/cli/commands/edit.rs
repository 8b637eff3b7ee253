use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::store::audit::record_audit;
use crate::ui::messages;

/// Correct a recorded punch: new time and/or new note.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, time, note } = cmd {
        let schedule = cfg.schedule()?;
        let mut store = SqliteStore::open(&cfg.database)?;

        let feedback = Ledger::correct(&mut store, &schedule, id, time.as_deref(), note.as_deref())?;
        messages::emit(&feedback);

        // Only applied corrections land in the internal log
        if feedback.is_success() && (time.is_some() || note.is_some()) {
            if let Err(e) = record_audit(&store.conn, "edit", id, &feedback.message) {
                eprintln!("⚠️ Failed to write internal log: {}", e);
            }
        }
    }

    Ok(())
}

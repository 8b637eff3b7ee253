use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::SqliteStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        events,
        report: _,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        ExportLogic::export(&store, cfg, *format, file, range, *events, *force)?;
    }
    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit::record_audit;
use crate::store::migrate::run_pending_migrations;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the employee roster (if missing)
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ Prepare configuration and data files
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_display = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing punchclock…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_display);

    //
    // 2️⃣ Open DB
    //
    let conn = Connection::open(&db_path)?;

    //
    // 3️⃣ Create tables and run pending migrations
    //
    run_pending_migrations(&conn)?;

    println!("✅ Database initialized at {}", &db_display);

    //
    // 4️⃣ Internal log (non blocking)
    //
    if let Err(e) = record_audit(
        &conn,
        "init",
        &db_display,
        &format!("Database initialized at {}", &db_display),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 punchclock initialization completed!");
    Ok(())
}

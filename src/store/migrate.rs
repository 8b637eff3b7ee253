use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `punches` table exists.
fn punches_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='punches'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `punches` table has a `note` column.
fn punches_has_note_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('punches')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "note" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `punches` table with the modern schema (including `note`).
fn create_punches_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punches (
            id            TEXT PRIMARY KEY,
            employee_code TEXT NOT NULL,
            employee_name TEXT NOT NULL,
            title         TEXT NOT NULL DEFAULT '',
            date          TEXT NOT NULL,
            time          TEXT NOT NULL,
            event_name    TEXT NOT NULL,
            deviation_min INTEGER NOT NULL DEFAULT 0,
            note          TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_punches_employee_date ON punches(employee_code, date);
        CREATE INDEX IF NOT EXISTS idx_punches_date_time ON punches(date, time);
        "#,
    )?;
    Ok(())
}

/// Migrate a legacy `punches` table (written before notes existed) to
/// include the `note` column, defaulting old rows to the empty string.
fn migrate_add_note_to_punches(conn: &Connection) -> Result<()> {
    let version = "20250618_0004_add_punch_note";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE punches ADD COLUMN note TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added note column to punches')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'note' to punches table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by the `init` command and by tests that build their own
/// database file.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create punches table if missing, otherwise upgrade in place
    if !punches_table_exists(conn)? {
        create_punches_table(conn)?;
        success("Created punches table (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_punches_employee_date ON punches(employee_code, date);
            CREATE INDEX IF NOT EXISTS idx_punches_date_time ON punches(date, time);
            "#,
        )?;

        if !punches_has_note_column(conn)? {
            migrate_add_note_to_punches(conn)?;
        }
    }

    Ok(())
}

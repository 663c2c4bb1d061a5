//! Database migrations for repkit.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::RepkitError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
///
/// # Errors
///
/// Returns an error if the version pragma cannot be read.
pub fn get_version(conn: &Connection) -> Result<i32, RepkitError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| RepkitError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), RepkitError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| RepkitError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub fn run(conn: &Connection) -> Result<(), RepkitError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), RepkitError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(RepkitError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `workout_history`: Completed workout log
/// - `habits` / `habit_log`: Daily habits and completions
/// - `water_log`: Per-day hydration counter
fn migrate_v1(conn: &Connection) -> Result<(), RepkitError> {
    conn.execute_batch(
        r"
        -- Completed workouts, append-only
        CREATE TABLE IF NOT EXISTS workout_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_id TEXT NOT NULL,
            title TEXT NOT NULL,
            intensity TEXT NOT NULL,
            completed_at TEXT NOT NULL,
            duration_seconds INTEGER NOT NULL,
            calories INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_workout_history_completed
        ON workout_history(completed_at);

        -- Daily habits
        CREATE TABLE IF NOT EXISTS habits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            icon TEXT NOT NULL DEFAULT 'check-circle',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS habit_log (
            habit_id INTEGER NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            PRIMARY KEY (habit_id, date)
        );

        -- Hydration counter, one row per day
        CREATE TABLE IF NOT EXISTS water_log (
            date TEXT PRIMARY KEY,
            glasses INTEGER NOT NULL DEFAULT 0
        );
        ",
    )
    .map_err(|e| RepkitError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        // Verify tables exist by inserting data
        conn.execute(
            "INSERT INTO workout_history (workout_id, title, intensity, completed_at, duration_seconds, calories)
             VALUES ('int-1', 'HIIT 20min', 'intermediate', '2026-01-01T10:00:00Z', 600, 90)",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO habits (name, created_at) VALUES ('No Sugar', '2026-01-01T00:00:00Z')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run(&conn).unwrap();
        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }
}

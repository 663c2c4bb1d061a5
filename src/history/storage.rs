//! Workout history storage.
//!
//! Persists completed workouts to the local database. The log is
//! append-only: entries are inserted once and never updated.

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::catalog::Intensity;
use crate::error::RepkitError;
use crate::storage::Database;

use super::HistoryEntry;

/// Storage for the workout log.
pub struct HistoryStorage {
    db: Database,
}

impl HistoryStorage {
    /// Create a new history storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, RepkitError> {
        let db = Database::open()?;
        Ok(Self { db })
    }

    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Append a completed workout to the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add(&self, entry: &mut HistoryEntry) -> Result<(), RepkitError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO workout_history
              (workout_id, title, intensity, completed_at, duration_seconds, calories)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.workout_id,
                entry.title,
                intensity_to_string(entry.intensity),
                entry.completed_at.to_rfc3339(),
                entry.duration_seconds,
                entry.calories,
            ],
        )
        .map_err(|e| RepkitError::Database(format!("Failed to insert history entry: {e}")))?;

        entry.id = Some(conn.last_insert_rowid());
        Ok(())
    }

    /// Get the most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, RepkitError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, workout_id, title, intensity, completed_at,
                         duration_seconds, calories
                  FROM workout_history
                  ORDER BY completed_at DESC
                  LIMIT ?1",
            )
            .map_err(|e| RepkitError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([limit], row_to_entry)
            .map_err(|e| RepkitError::Database(format!("Failed to query history: {e}")))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| RepkitError::Database(e.to_string()))?);
        }

        Ok(entries)
    }

    /// Get entries completed in a date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HistoryEntry>, RepkitError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, workout_id, title, intensity, completed_at,
                         duration_seconds, calories
                  FROM workout_history
                  WHERE completed_at >= ?1 AND completed_at < ?2
                  ORDER BY completed_at DESC",
            )
            .map_err(|e| RepkitError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([start.to_rfc3339(), end.to_rfc3339()], row_to_entry)
            .map_err(|e| RepkitError::Database(format!("Failed to query history: {e}")))?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.map_err(|e| RepkitError::Database(e.to_string()))?);
        }

        Ok(entries)
    }

    /// Total worked seconds in a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn total_seconds(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64, RepkitError> {
        let conn = self.db.connection();

        let total: i64 = conn
            .query_row(
                r"SELECT COALESCE(SUM(duration_seconds), 0)
                  FROM workout_history
                  WHERE completed_at >= ?1 AND completed_at < ?2",
                [start.to_rfc3339(), end.to_rfc3339()],
                |row| row.get(0),
            )
            .map_err(|e| RepkitError::Database(format!("Failed to query total time: {e}")))?;

        Ok(total)
    }
}

/// Convert a database row to a `HistoryEntry`.
fn row_to_entry(row: &Row<'_>) -> Result<HistoryEntry, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let workout_id: String = row.get(1)?;
    let title: String = row.get(2)?;
    let intensity_str: String = row.get(3)?;
    let completed_at_str: String = row.get(4)?;
    let duration_seconds: u32 = row.get(5)?;
    let calories: u32 = row.get(6)?;

    let completed_at = DateTime::parse_from_rfc3339(&completed_at_str)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(HistoryEntry {
        id: Some(id),
        workout_id,
        title,
        intensity: Intensity::parse(&intensity_str),
        completed_at,
        duration_seconds,
        calories,
    })
}

fn intensity_to_string(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Beginner => "beginner",
        Intensity::Intermediate => "intermediate",
        Intensity::Advanced => "advanced",
    }
}

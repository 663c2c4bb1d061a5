//! Habit and hydration storage.

use chrono::{Duration, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension};

use crate::error::RepkitError;
use crate::storage::Database;

use super::{Habit, WaterStatus};

/// The habits every fresh install starts with.
const DEFAULT_HABITS: [(&str, &str); 4] = [
    ("Morning Checklist", "check-circle"),
    ("No Sugar", "minus"),
    ("8h Sleep", "moon"),
    ("Read 10 Pages", "book"),
];

/// Storage for habits and the water counter.
pub struct HabitStorage {
    db: Database,
}

impl HabitStorage {
    /// Create a new habit storage, seeding the default habits on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or seeded.
    pub fn new() -> Result<Self, RepkitError> {
        let db = Database::open()?;
        let storage = Self { db };
        storage.ensure_defaults()?;
        Ok(storage)
    }

    /// Create storage with an existing database connection.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding the default habits fails.
    pub fn with_database(db: Database) -> Result<Self, RepkitError> {
        let storage = Self { db };
        storage.ensure_defaults()?;
        Ok(storage)
    }

    /// Seed the default habits into an empty table.
    fn ensure_defaults(&self) -> Result<(), RepkitError> {
        let conn = self.db.connection();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))
            .map_err(|e| RepkitError::Database(format!("Failed to count habits: {e}")))?;

        if count > 0 {
            return Ok(());
        }

        for (name, icon) in DEFAULT_HABITS {
            conn.execute(
                "INSERT INTO habits (name, icon, created_at) VALUES (?1, ?2, ?3)",
                params![name, icon, Utc::now().to_rfc3339()],
            )
            .map_err(|e| RepkitError::Database(format!("Failed to seed habits: {e}")))?;
        }

        Ok(())
    }

    /// Add a new habit.
    ///
    /// # Errors
    ///
    /// Returns an error if a habit with this name already exists.
    pub fn add(&self, name: &str, icon: &str) -> Result<i64, RepkitError> {
        let conn = self.db.connection();

        conn.execute(
            "INSERT INTO habits (name, icon, created_at) VALUES (?1, ?2, ?3)",
            params![name, icon, Utc::now().to_rfc3339()],
        )
        .map_err(|e| RepkitError::Database(format!("Failed to add habit '{name}': {e}")))?;

        Ok(conn.last_insert_rowid())
    }

    /// Remove a habit and its log by name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no habit has this name.
    pub fn remove(&self, name: &str) -> Result<(), RepkitError> {
        let conn = self.db.connection();

        let rows = conn
            .execute("DELETE FROM habits WHERE name = ?1", [name])
            .map_err(|e| RepkitError::Database(format!("Failed to remove habit: {e}")))?;

        if rows == 0 {
            return Err(RepkitError::NotFound(format!("Habit '{name}'")));
        }
        Ok(())
    }

    /// All habits with completion state and streak for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&self, date: NaiveDate) -> Result<Vec<Habit>, RepkitError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT id, name, icon FROM habits ORDER BY id")
            .map_err(|e| RepkitError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| RepkitError::Database(format!("Failed to query habits: {e}")))?;

        let mut habits = Vec::new();
        for row in rows {
            let (id, name, icon) = row.map_err(|e| RepkitError::Database(e.to_string()))?;
            habits.push(Habit {
                id,
                name,
                icon,
                completed: self.is_logged(id, date)?,
                streak: self.streak(id, date)?,
            });
        }

        Ok(habits)
    }

    /// Flip a habit's completion for `date`. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no habit has this name.
    pub fn toggle(&self, name: &str, date: NaiveDate) -> Result<bool, RepkitError> {
        let conn = self.db.connection();

        let id: Option<i64> = conn
            .query_row("SELECT id FROM habits WHERE name = ?1", [name], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| RepkitError::Database(format!("Failed to look up habit: {e}")))?;

        let Some(id) = id else {
            return Err(RepkitError::NotFound(format!("Habit '{name}'")));
        };

        if self.is_logged(id, date)? {
            conn.execute(
                "DELETE FROM habit_log WHERE habit_id = ?1 AND date = ?2",
                params![id, date.to_string()],
            )
            .map_err(|e| RepkitError::Database(format!("Failed to unlog habit: {e}")))?;
            Ok(false)
        } else {
            conn.execute(
                "INSERT INTO habit_log (habit_id, date) VALUES (?1, ?2)",
                params![id, date.to_string()],
            )
            .map_err(|e| RepkitError::Database(format!("Failed to log habit: {e}")))?;
            Ok(true)
        }
    }

    fn is_logged(&self, habit_id: i64, date: NaiveDate) -> Result<bool, RepkitError> {
        let conn = self.db.connection();

        let logged: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM habit_log WHERE habit_id = ?1 AND date = ?2",
                params![habit_id, date.to_string()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| RepkitError::Database(format!("Failed to query habit log: {e}")))?;

        Ok(logged.is_some())
    }

    /// Consecutive completed days ending at `date` (or at yesterday when
    /// `date` itself is not yet logged).
    fn streak(&self, habit_id: i64, date: NaiveDate) -> Result<u32, RepkitError> {
        let mut day = date;
        if !self.is_logged(habit_id, day)? {
            day = day - Duration::days(1);
        }

        let mut streak = 0;
        while self.is_logged(habit_id, day)? {
            streak += 1;
            day = day - Duration::days(1);
        }

        Ok(streak)
    }

    /// Hydration state for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn water(
        &self,
        date: NaiveDate,
        goal: u32,
        glass_ml: u32,
    ) -> Result<WaterStatus, RepkitError> {
        let conn = self.db.connection();

        let glasses: Option<u32> = conn
            .query_row(
                "SELECT glasses FROM water_log WHERE date = ?1",
                [date.to_string()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| RepkitError::Database(format!("Failed to query water log: {e}")))?;

        Ok(WaterStatus {
            glasses: glasses.unwrap_or(0),
            goal,
            glass_ml,
        })
    }

    /// Adjust the glass count for `date` by `delta`, clamped to `0..=goal`.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn adjust_water(
        &self,
        date: NaiveDate,
        delta: i32,
        goal: u32,
        glass_ml: u32,
    ) -> Result<WaterStatus, RepkitError> {
        let current = self.water(date, goal, glass_ml)?;

        #[allow(clippy::cast_possible_wrap)]
        let next = (current.glasses as i64 + i64::from(delta))
            .clamp(0, i64::from(goal));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let next = next as u32;

        let conn = self.db.connection();
        conn.execute(
            r"INSERT INTO water_log (date, glasses) VALUES (?1, ?2)
              ON CONFLICT(date) DO UPDATE SET glasses = ?2",
            params![date.to_string(), next],
        )
        .map_err(|e| RepkitError::Database(format!("Failed to update water log: {e}")))?;

        Ok(WaterStatus {
            glasses: next,
            goal,
            glass_ml,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn create_test_storage() -> HabitStorage {
        HabitStorage::with_database(Database::open_in_memory().unwrap()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_defaults_seeded_once() {
        let storage = create_test_storage();
        let habits = storage.list(today()).unwrap();
        assert_eq!(habits.len(), 4);
        assert_eq!(habits[0].name, "Morning Checklist");

        // Re-running the seed must not duplicate.
        storage.ensure_defaults().unwrap();
        assert_eq!(storage.list(today()).unwrap().len(), 4);
    }

    #[test]
    fn test_toggle() {
        let storage = create_test_storage();

        assert!(storage.toggle("No Sugar", today()).unwrap());
        let habits = storage.list(today()).unwrap();
        let habit = habits.iter().find(|h| h.name == "No Sugar").unwrap();
        assert!(habit.completed);
        assert_eq!(habit.streak, 1);

        assert!(!storage.toggle("No Sugar", today()).unwrap());
        let habits = storage.list(today()).unwrap();
        let habit = habits.iter().find(|h| h.name == "No Sugar").unwrap();
        assert!(!habit.completed);
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn test_toggle_unknown_habit() {
        let storage = create_test_storage();
        assert!(matches!(
            storage.toggle("Juggling", today()),
            Err(RepkitError::NotFound(_))
        ));
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let storage = create_test_storage();

        for days_ago in 0..3 {
            storage
                .toggle("8h Sleep", today() - Duration::days(days_ago))
                .unwrap();
        }
        // A gap four days back must not extend the streak.
        storage
            .toggle("8h Sleep", today() - Duration::days(5))
            .unwrap();

        let habits = storage.list(today()).unwrap();
        let habit = habits.iter().find(|h| h.name == "8h Sleep").unwrap();
        assert_eq!(habit.streak, 3);
    }

    #[test]
    fn test_streak_survives_unlogged_today() {
        let storage = create_test_storage();

        for days_ago in 1..=2 {
            storage
                .toggle("Read 10 Pages", today() - Duration::days(days_ago))
                .unwrap();
        }

        let habits = storage.list(today()).unwrap();
        let habit = habits.iter().find(|h| h.name == "Read 10 Pages").unwrap();
        assert!(!habit.completed);
        assert_eq!(habit.streak, 2);
    }

    #[test]
    fn test_add_and_remove() {
        let storage = create_test_storage();

        storage.add("Stretch", "activity").unwrap();
        assert_eq!(storage.list(today()).unwrap().len(), 5);

        storage.remove("Stretch").unwrap();
        assert_eq!(storage.list(today()).unwrap().len(), 4);

        assert!(matches!(
            storage.remove("Stretch"),
            Err(RepkitError::NotFound(_))
        ));
    }

    #[test]
    fn test_water_clamps_to_goal() {
        let storage = create_test_storage();

        let status = storage.water(today(), 8, 250).unwrap();
        assert_eq!(status.glasses, 0);

        let status = storage.adjust_water(today(), 3, 8, 250).unwrap();
        assert_eq!(status.glasses, 3);
        assert_eq!(status.milliliters(), 750);

        let status = storage.adjust_water(today(), 100, 8, 250).unwrap();
        assert_eq!(status.glasses, 8);

        let status = storage.adjust_water(today(), -100, 8, 250).unwrap();
        assert_eq!(status.glasses, 0);
    }
}

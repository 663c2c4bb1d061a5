//! Custom workout storage.
//!
//! Custom workouts are stored as individual YAML files in
//! `~/.repkit/workouts/`. A workout file is written once on save and never
//! rewritten; editing means building a new workout.

use std::path::PathBuf;

use crate::config::Paths;
use crate::error::RepkitError;

use super::Workout;

/// Manages custom workout files.
pub struct WorkoutStore {
    /// Path to the workouts directory.
    workouts_dir: PathBuf,
}

impl WorkoutStore {
    /// Create a new workout store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the workouts directory cannot be created.
    pub fn new() -> Result<Self, RepkitError> {
        let paths = Paths::default();
        paths.ensure_dirs()?;

        Ok(Self {
            workouts_dir: paths.workouts,
        })
    }

    /// Create a store with a custom directory (for testing).
    #[must_use]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { workouts_dir: dir }
    }

    fn workout_path(&self, id: &str) -> PathBuf {
        let safe: String = id
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.workouts_dir.join(format!("{safe}.yaml"))
    }

    /// Save a custom workout.
    ///
    /// # Errors
    ///
    /// Returns an error if a workout with this id already exists (saved
    /// workouts are immutable) or the file cannot be written.
    pub fn save(&self, workout: &Workout) -> Result<(), RepkitError> {
        let path = self.workout_path(&workout.id);

        if path.exists() {
            return Err(RepkitError::Config(format!(
                "Workout '{}' already exists. Saved workouts cannot be changed.",
                workout.id
            )));
        }

        let content = serde_yaml::to_string(workout)
            .map_err(|e| RepkitError::Config(format!("Failed to serialize workout: {e}")))?;

        std::fs::write(&path, content).map_err(RepkitError::Io)?;
        Ok(())
    }

    /// Load a custom workout by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the workout doesn't exist or cannot be parsed.
    pub fn load(&self, id: &str) -> Result<Workout, RepkitError> {
        let path = self.workout_path(id);

        if !path.exists() {
            return Err(RepkitError::NotFound(format!("Workout '{id}'")));
        }

        let content = std::fs::read_to_string(&path).map_err(RepkitError::Io)?;
        let workout: Workout = serde_yaml::from_str(&content)
            .map_err(|e| RepkitError::Config(format!("Failed to parse workout file: {e}")))?;

        Ok(workout)
    }

    /// List all saved custom workouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the workouts directory cannot be read.
    pub fn list(&self) -> Result<Vec<Workout>, RepkitError> {
        if !self.workouts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut workouts = Vec::new();

        let entries = std::fs::read_dir(&self.workouts_dir).map_err(RepkitError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepkitError::Io)?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "yaml") {
                let content = std::fs::read_to_string(&path).map_err(RepkitError::Io)?;
                if let Ok(workout) = serde_yaml::from_str::<Workout>(&content) {
                    workouts.push(workout);
                }
            }
        }

        workouts.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(workouts)
    }

    /// Delete a custom workout.
    ///
    /// # Errors
    ///
    /// Returns an error if the workout doesn't exist or cannot be removed.
    pub fn delete(&self, id: &str) -> Result<(), RepkitError> {
        let path = self.workout_path(id);

        if !path.exists() {
            return Err(RepkitError::NotFound(format!("Workout '{id}'")));
        }

        std::fs::remove_file(&path).map_err(RepkitError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_exercise, Intensity};
    use tempfile::TempDir;

    fn sample_workout() -> Workout {
        Workout::custom(
            "Test Routine",
            Intensity::Intermediate,
            vec![find_exercise("plank").unwrap().clone()],
        )
        .unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = WorkoutStore::with_dir(dir.path().to_path_buf());

        let workout = sample_workout();
        store.save(&workout).unwrap();

        let loaded = store.load(&workout.id).unwrap();
        assert_eq!(loaded.title, "Test Routine");
        assert_eq!(loaded.exercises.len(), 1);
    }

    #[test]
    fn test_saved_workouts_are_immutable() {
        let dir = TempDir::new().unwrap();
        let store = WorkoutStore::with_dir(dir.path().to_path_buf());

        let workout = sample_workout();
        store.save(&workout).unwrap();

        assert!(matches!(
            store.save(&workout),
            Err(RepkitError::Config(_))
        ));
    }

    #[test]
    fn test_list_and_delete() {
        let dir = TempDir::new().unwrap();
        let store = WorkoutStore::with_dir(dir.path().to_path_buf());

        assert!(store.list().unwrap().is_empty());

        let workout = sample_workout();
        store.save(&workout).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);

        store.delete(&workout.id).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(
            store.load(&workout.id),
            Err(RepkitError::NotFound(_))
        ));
    }
}

//! Path resolution for repkit configuration and data files.
//!
//! All repkit data is stored in `~/.repkit/`:
//! - `config.yaml` - Main configuration file
//! - `profile.yaml` - The user profile from onboarding
//! - `repkit.db` - SQLite database for history and habits
//! - `workouts/` - Custom workouts (YAML files)
//! - `cache/` - Cached data

use std::path::PathBuf;

use crate::error::RepkitError;

/// Paths to repkit configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.repkit/`
    pub root: PathBuf,
    /// Config file: `~/.repkit/config.yaml`
    pub config_file: PathBuf,
    /// Profile file: `~/.repkit/profile.yaml`
    pub profile_file: PathBuf,
    /// Database file: `~/.repkit/repkit.db`
    pub database: PathBuf,
    /// Custom workouts directory: `~/.repkit/workouts/`
    pub workouts: PathBuf,
    /// Cache directory: `~/.repkit/cache/`
    pub cache: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RepkitError> {
        let home = std::env::var("HOME")
            .map_err(|_| RepkitError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".repkit");

        Ok(Self {
            config_file: root.join("config.yaml"),
            profile_file: root.join("profile.yaml"),
            database: root.join("repkit.db"),
            workouts: root.join("workouts"),
            cache: root.join("cache"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            profile_file: root.join("profile.yaml"),
            database: root.join("repkit.db"),
            workouts: root.join("workouts"),
            cache: root.join("cache"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), RepkitError> {
        let dirs = [&self.root, &self.workouts, &self.cache];

        for dir in dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    RepkitError::Config(format!("Failed to create directory {dir:?}: {e}"))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".repkit"))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-repkit");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.profile_file, root.join("profile.yaml"));
        assert_eq!(paths.database, root.join("repkit.db"));
        assert_eq!(paths.workouts, root.join("workouts"));
        assert_eq!(paths.cache, root.join("cache"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.workouts.exists());
        assert!(paths.cache.exists());
    }
}

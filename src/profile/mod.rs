//! The user profile.
//!
//! Collected once during onboarding and stored as YAML. The workout list
//! and the default player intensity follow the profile's level.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::Intensity;
use crate::config::Paths;
use crate::error::RepkitError;

/// What the user is training for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Cut weight.
    LoseWeight,
    /// Gain muscle.
    BuildMuscle,
    /// General activity.
    StayActive,
    /// Mobility and stretching.
    ImproveFlexibility,
}

impl Goal {
    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LoseWeight => "Lose Weight",
            Self::BuildMuscle => "Build Muscle",
            Self::StayActive => "Stay Active",
            Self::ImproveFlexibility => "Improve Flexibility",
        }
    }

    /// All goals, in onboarding order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::LoseWeight,
            Self::BuildMuscle,
            Self::StayActive,
            Self::ImproveFlexibility,
        ]
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The onboarded user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Training goal.
    pub goal: Goal,
    /// Experience level; drives workout selection and durations.
    pub level: Intensity,
    /// Height, e.g. `5'10"` or `178cm`.
    pub height: String,
    /// Current weight, e.g. `180 lbs`.
    pub current_weight: String,
    /// Target weight.
    pub target_weight: String,
}

#[allow(clippy::unwrap_used)]
static HEIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\d{1,2}'\s*\d{1,2}"?|\d{2,3}(\.\d+)?\s*cm|\d{2,3})$"#).unwrap()
});

#[allow(clippy::unwrap_used)]
static WEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2,3}(\.\d+)?\s*(lbs|lb|kg)?$").unwrap());

/// Validate a height input like `5'10"`, `178cm`, or `178`.
///
/// # Errors
///
/// Returns `RepkitError::Config` if the input is not a recognizable height.
pub fn validate_height(input: &str) -> Result<String, RepkitError> {
    let trimmed = input.trim();
    if HEIGHT_RE.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(RepkitError::Config(format!(
            "'{trimmed}' is not a height (try 5'10\" or 178cm)"
        )))
    }
}

/// Validate a weight input like `180`, `82.5 kg`, or `180lbs`.
///
/// # Errors
///
/// Returns `RepkitError::Config` if the input is not a recognizable weight.
pub fn validate_weight(input: &str) -> Result<String, RepkitError> {
    let trimmed = input.trim();
    if WEIGHT_RE.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(RepkitError::Config(format!(
            "'{trimmed}' is not a weight (try 180 or 82 kg)"
        )))
    }
}

impl UserProfile {
    /// Load the profile from the default path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if onboarding has not been run yet, or a config
    /// error if the file cannot be parsed.
    pub fn load() -> Result<Self, RepkitError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.profile_file)
    }

    /// Load the profile from a specific path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the file doesn't exist or a config error if it
    /// cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, RepkitError> {
        if !path.exists() {
            return Err(RepkitError::NotFound(
                "No profile yet. Run 'repkit onboard' first".to_string(),
            ));
        }

        let contents = std::fs::read_to_string(path).map_err(RepkitError::Io)?;
        serde_yaml::from_str(&contents)
            .map_err(|e| RepkitError::Config(format!("Failed to parse profile: {e}")))
    }

    /// Save the profile to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), RepkitError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.profile_file)
    }

    /// Save the profile to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), RepkitError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| RepkitError::Config(format!("Failed to serialize profile: {e}")))?;
        std::fs::write(path, contents).map_err(RepkitError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Alex".to_string(),
            goal: Goal::BuildMuscle,
            level: Intensity::Intermediate,
            height: "178cm".to_string(),
            current_weight: "180 lbs".to_string(),
            target_weight: "170 lbs".to_string(),
        }
    }

    #[test]
    fn test_validate_height() {
        assert!(validate_height("5'10\"").is_ok());
        assert!(validate_height("5'10").is_ok());
        assert!(validate_height("178cm").is_ok());
        assert!(validate_height("178").is_ok());
        assert!(validate_height(" 178 cm ").is_ok());

        assert!(validate_height("tall").is_err());
        assert!(validate_height("").is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight("180").is_ok());
        assert!(validate_weight("82.5 kg").is_ok());
        assert!(validate_weight("180lbs").is_ok());

        assert!(validate_weight("heavy").is_err());
        assert!(validate_weight("1").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.yaml");

        let profile = sample_profile();
        profile.save_to_path(&path).unwrap();

        let loaded = UserProfile::load_from_path(&path).unwrap();
        assert_eq!(loaded.name, "Alex");
        assert_eq!(loaded.goal, Goal::BuildMuscle);
        assert_eq!(loaded.level, Intensity::Intermediate);
    }

    #[test]
    fn test_load_missing_profile() {
        let dir = TempDir::new().unwrap();
        let result = UserProfile::load_from_path(&dir.path().join("profile.yaml"));
        assert!(matches!(result, Err(RepkitError::NotFound(_))));
    }
}

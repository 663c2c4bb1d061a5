//! Workout definitions.
//!
//! Prebuilt workouts are grouped by intensity tier so the catalog can show
//! each user a plan matched to their level. Custom workouts are assembled
//! from the exercise library and become immutable once saved.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::exercises::{find_exercise, library, Exercise};
use crate::error::RepkitError;

/// Workout difficulty tier. Drives the duration policy and calorie math.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Shorter work bouts, longer recovery.
    Beginner,
    /// The catalog baseline.
    #[default]
    Intermediate,
    /// Extended time under tension, minimal recovery.
    Advanced,
}

impl Intensity {
    /// Calories burned per minute of work at this tier.
    #[must_use]
    pub const fn calorie_multiplier(self) -> u32 {
        match self {
            Self::Beginner => 6,
            Self::Intermediate => 9,
            Self::Advanced => 12,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse an intensity from a loose string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "beginner" | "beg" | "b" | "easy" => Self::Beginner,
            "advanced" | "adv" | "a" | "hard" => Self::Advanced,
            _ => Self::Intermediate,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Workout category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// High-intensity interval training.
    Hiit,
    /// Resistance work.
    Strength,
    /// Stretching and mobility.
    Flexibility,
    /// Steady-state conditioning.
    Cardio,
}

impl Category {
    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Hiit => "HIIT",
            Self::Strength => "Strength",
            Self::Flexibility => "Flexibility",
            Self::Cardio => "Cardio",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A playable workout: an ordered, non-empty exercise circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Stable identifier, e.g. `int-1` or `custom-morning-burn`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Ordered exercise circuit.
    pub exercises: Vec<Exercise>,
    /// Rough calorie estimate for the full workout.
    pub estimated_calories: u32,
    /// Rough total duration estimate in minutes.
    pub duration_minutes: u32,
    /// Category tag.
    pub category: Category,
    /// Intensity tier the durations are scaled for.
    pub intensity: Intensity,
}

impl Workout {
    /// Assemble a custom workout from library exercises.
    ///
    /// The duration estimate allows each exercise its base duration plus a
    /// 30 second buffer for rest and transitions, rounded up to a minute.
    ///
    /// # Errors
    ///
    /// Returns `RepkitError::InvalidWorkout` if `exercises` is empty.
    pub fn custom(
        title: &str,
        intensity: Intensity,
        exercises: Vec<Exercise>,
    ) -> Result<Self, RepkitError> {
        if exercises.is_empty() {
            return Err(RepkitError::InvalidWorkout(
                "a workout needs at least one exercise".to_string(),
            ));
        }

        let total_seconds: u32 = exercises.iter().map(|e| e.base_duration + 30).sum();
        let duration_minutes = total_seconds.div_ceil(60);

        Ok(Self {
            id: format!("custom-{}", slug(title)),
            title: title.to_string(),
            description: format!("Custom {} exercise routine.", exercises.len()),
            estimated_calories: duration_minutes * intensity.calorie_multiplier(),
            duration_minutes,
            category: Category::Strength,
            intensity,
            exercises,
        })
    }

    /// Check whether this is a user-built workout.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.id.starts_with("custom-")
    }
}

/// Lowercase a title into an id-safe slug.
fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Build a prebuilt workout from library exercise ids.
///
/// Unknown ids fall back to the first library entry so a typo in the
/// catalog can never produce an unplayable workout.
fn workout(
    id: &str,
    title: &str,
    description: &str,
    minutes: u32,
    intensity: Intensity,
    category: Category,
    exercise_ids: &[&str],
) -> Workout {
    let exercises = exercise_ids
        .iter()
        .map(|eid| {
            find_exercise(eid)
                .cloned()
                .unwrap_or_else(|| library()[0].clone())
        })
        .collect();

    Workout {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        exercises,
        estimated_calories: minutes * intensity.calorie_multiplier(),
        duration_minutes: minutes,
        category,
        intensity,
    }
}

/// The prebuilt workouts for one intensity tier.
#[must_use]
pub fn workouts_for(intensity: Intensity) -> Vec<Workout> {
    use Category::{Cardio, Flexibility, Hiit, Strength};
    use Intensity::{Advanced, Beginner, Intermediate};

    match intensity {
        Beginner => vec![
            workout("beg-1", "Easy Start 10min", "Gentle introduction to movement.", 10, Beginner, Cardio,
                &["jumping-jacks", "wall-sit", "squats", "plank", "jumping-jacks", "lunges", "cat-cow"]),
            workout("beg-2", "Light Cardio 15min", "Get the heart rate up without impact.", 15, Beginner, Cardio,
                &["high-knees", "squats", "shoulder-taps", "crunches", "high-knees", "lunges", "plank", "childs-pose"]),
            workout("beg-3", "Basic Stretch", "Full body flexibility and relaxation.", 5, Beginner, Flexibility,
                &["cat-cow", "childs-pose", "cat-cow", "supermans", "childs-pose"]),
            workout("beg-4", "Core Foundations", "Building blocks for a strong core.", 12, Beginner, Strength,
                &["plank", "crunches", "leg-raises", "plank", "crunches", "supermans"]),
            workout("beg-legs", "Leg Starter", "Simple lower body toning.", 15, Beginner, Strength,
                &["squats", "glute-bridges", "lunges", "calf-raises", "wall-sit"]),
        ],
        Intermediate => vec![
            workout("int-1", "HIIT 20min", "Classic interval training to burn fat.", 20, Intermediate, Hiit,
                &["jumping-jacks", "burpees", "mountain-climbers", "squats", "pushups", "high-knees", "plank", "burpees", "lunges"]),
            workout("int-2", "Core Strength 25min", "Intense focus on abs and obliques.", 25, Intermediate, Strength,
                &["russian-twists", "leg-raises", "plank", "mountain-climbers", "crunches", "russian-twists", "plank"]),
            workout("int-3", "Full Body 30min", "Complete strength and conditioning.", 30, Intermediate, Strength,
                &["squats", "pushups", "lunges", "tricep-dips", "plank", "burpees", "wall-sit", "shoulder-taps"]),
            workout("int-upper", "Upper Body Pump", "Chest, shoulders and triceps focus.", 15, Intermediate, Strength,
                &["pushups", "tricep-dips", "shoulder-taps", "plank", "pushups", "diamond-pushups"]),
            workout("int-legs", "Leg Power", "Build stronger legs.", 20, Intermediate, Strength,
                &["squats", "reverse-lunges", "side-lunges", "glute-bridges", "squats", "wall-sit"]),
        ],
        Advanced => vec![
            workout("adv-1", "Intense HIIT 30min", "Maximum effort, minimum rest.", 30, Advanced, Hiit,
                &["burpees", "mountain-climbers", "jumping-jacks", "burpees", "squats", "pushups", "high-knees", "plank", "burpees"]),
            workout("adv-2", "Advanced Strength 40min", "High volume resistance training.", 40, Advanced, Strength,
                &["squats", "lunges", "pushups", "tricep-dips", "russian-twists", "leg-raises", "wall-sit", "burpees", "supermans"]),
            workout("adv-3", "Endurance Challenge", "Test your stamina and will.", 45, Advanced, Cardio,
                &["high-knees", "mountain-climbers", "burpees", "jumping-jacks", "squats", "lunges", "pushups", "plank", "burpees", "mountain-climbers"]),
            workout("adv-chest", "Chest & Tri Destroyer", "High volume push workout.", 25, Advanced, Strength,
                &["wide-pushups", "diamond-pushups", "pike-pushups", "tricep-dips", "incline-pushups", "pushups"]),
            workout("adv-abs", "Abs of Steel", "No rest core killer.", 15, Advanced, Strength,
                &["bicycle-crunches", "flutter-kicks", "plank", "side-plank", "leg-raises", "russian-twists", "mountain-climbers"]),
        ],
    }
}

/// Every prebuilt workout across all tiers.
#[must_use]
pub fn all_workouts() -> Vec<Workout> {
    let mut all = workouts_for(Intensity::Beginner);
    all.extend(workouts_for(Intensity::Intermediate));
    all.extend(workouts_for(Intensity::Advanced));
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calorie_multipliers() {
        assert_eq!(Intensity::Beginner.calorie_multiplier(), 6);
        assert_eq!(Intensity::Intermediate.calorie_multiplier(), 9);
        assert_eq!(Intensity::Advanced.calorie_multiplier(), 12);
    }

    #[test]
    fn test_intensity_parse() {
        assert_eq!(Intensity::parse("beginner"), Intensity::Beginner);
        assert_eq!(Intensity::parse("adv"), Intensity::Advanced);
        assert_eq!(Intensity::parse("whatever"), Intensity::Intermediate);
    }

    #[test]
    fn test_prebuilt_workouts_non_empty() {
        for workout in all_workouts() {
            assert!(!workout.exercises.is_empty(), "{} has no exercises", workout.id);
        }
        assert_eq!(all_workouts().len(), 15);
    }

    #[test]
    fn test_prebuilt_calories_scale_with_tier() {
        let beg = workouts_for(Intensity::Beginner);
        assert_eq!(beg[0].estimated_calories, 10 * 6);

        let adv = workouts_for(Intensity::Advanced);
        assert_eq!(adv[0].estimated_calories, 30 * 12);
    }

    #[test]
    fn test_custom_workout() {
        let exercises = vec![
            find_exercise("plank").unwrap().clone(),
            find_exercise("squats").unwrap().clone(),
        ];
        let workout = Workout::custom("Morning Burn", Intensity::Advanced, exercises).unwrap();

        assert_eq!(workout.id, "custom-morning-burn");
        assert!(workout.is_custom());
        // (45 + 30) + (40 + 30) = 145 seconds -> 3 minutes
        assert_eq!(workout.duration_minutes, 3);
        assert_eq!(workout.estimated_calories, 3 * 12);
    }

    #[test]
    fn test_custom_workout_rejects_empty() {
        let result = Workout::custom("Nothing", Intensity::Beginner, Vec::new());
        assert!(matches!(result, Err(RepkitError::InvalidWorkout(_))));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Morning Burn!"), "morning-burn");
        assert_eq!(slug("  a  b  "), "a-b");
    }
}

//! JSON output formatting for repkit.

use serde::Serialize;
use serde_json::json;

use crate::catalog::{Exercise, Workout};
use crate::error::RepkitError;
use crate::habits::{Habit, WaterStatus};
use crate::history::HistoryEntry;
use crate::social::{Challenge, Friend};

/// Format workouts as JSON
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_workouts_json(workouts: &[Workout], title: &str) -> Result<String, RepkitError> {
    let output = json!({
        "list": title,
        "count": workouts.len(),
        "items": workouts
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the exercise library as JSON
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_exercises_json(exercises: &[Exercise]) -> Result<String, RepkitError> {
    let output = json!({
        "count": exercises.len(),
        "items": exercises
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format workout history as JSON
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_history_json(entries: &[HistoryEntry]) -> Result<String, RepkitError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format habits and water status as JSON
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_habits_json(habits: &[Habit], water: WaterStatus) -> Result<String, RepkitError> {
    let output = json!({
        "water": water,
        "habits": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the leaderboard as JSON
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_social_json(
    friends: &[Friend],
    challenge: &Challenge,
) -> Result<String, RepkitError> {
    let output = json!({
        "challenge": challenge,
        "leaderboard": friends
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, RepkitError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{find_exercise, Intensity, Workout};
    use crate::nutrition::MealAnalysis;

    fn sample_workout() -> Workout {
        Workout::custom(
            "Test",
            Intensity::Beginner,
            vec![find_exercise("plank").unwrap().clone()],
        )
        .unwrap()
    }

    #[test]
    fn test_format_workouts_json_empty() {
        let result = format_workouts_json(&[], "Workouts").unwrap();
        assert!(result.contains("\"list\": \"Workouts\""));
        assert!(result.contains("\"count\": 0"));
        assert!(result.contains("\"items\": []"));
    }

    #[test]
    fn test_format_workouts_json_fields() {
        let workouts = vec![sample_workout()];
        let result = format_workouts_json(&workouts, "Workouts").unwrap();

        assert!(result.contains("\"count\": 1"));
        assert!(result.contains("\"id\": \"custom-test\""));
        assert!(result.contains("\"intensity\": \"beginner\""));
        assert!(result.contains("\"baseDuration\": 45"));
    }

    #[test]
    fn test_format_exercises_json() {
        let exercises: Vec<_> = crate::catalog::library().iter().take(2).cloned().collect();
        let result = format_exercises_json(&exercises).unwrap();

        assert!(result.contains("\"count\": 2"));
        assert!(result.contains("\"Jumping Jacks\""));
    }

    #[test]
    fn test_to_json_generic() {
        let analysis = MealAnalysis::fallback();
        let result = to_json(&analysis).unwrap();

        assert!(result.contains("\"foodName\": \"Healthy Meal Bowl\""));
        assert!(result.contains("\"healthScore\": 8"));
    }
}

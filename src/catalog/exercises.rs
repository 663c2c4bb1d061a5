//! The static exercise library.
//!
//! Every exercise repkit knows about lives here. Workouts reference these
//! entries by id; the player reads only `base_duration` and `name`.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single bodyweight exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable identifier, e.g. `jumping-jacks`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Base work duration in seconds, before intensity adjustment.
    pub base_duration: u32,
    /// Display icon reference for the UI layer.
    pub icon: String,
}

fn ex(id: &str, name: &str, description: &str, base_duration: u32, icon: &str) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_duration,
        icon: icon.to_string(),
    }
}

static LIBRARY: Lazy<Vec<Exercise>> = Lazy::new(|| {
    vec![
        // Cardio / HIIT
        ex("jumping-jacks", "Jumping Jacks", "Full body cardio warm-up", 30, "activity"),
        ex("burpees", "Burpees", "Full body explosive movement", 30, "arrow-up-circle"),
        ex("high-knees", "High Knees", "Run in place lifting knees high", 30, "chevrons-up"),
        ex("mountain-climbers", "Mountain Climbers", "Core and cardio from plank position", 30, "trending-up"),
        // Chest
        ex("pushups", "Standard Push-ups", "Classic chest and tricep builder", 30, "arrow-down-circle"),
        ex("wide-pushups", "Wide Push-ups", "Focuses on outer chest", 30, "arrow-down"),
        ex("incline-pushups", "Incline Push-ups", "Upper chest focus (hands on elevated surface)", 30, "arrow-up"),
        ex("decline-pushups", "Decline Push-ups", "Upper chest/shoulders (feet elevated)", 30, "arrow-down"),
        // Shoulders
        ex("pike-pushups", "Pike Push-ups", "Vertical push for shoulders", 30, "chevrons-up"),
        ex("shoulder-taps", "Shoulder Taps", "Plank stability and shoulder activation", 30, "hand"),
        ex("arm-circles", "Arm Circles", "Deltoid endurance and warmup", 40, "refresh-cw"),
        ex("plank-walks", "Lateral Plank Walks", "Moving plank for shoulders", 40, "move"),
        // Arms
        ex("tricep-dips", "Tricep Dips", "Back of arm strength using chair/floor", 30, "corner-right-down"),
        ex("diamond-pushups", "Diamond Push-ups", "Close grip for tricep isolation", 30, "minus"),
        ex("plank-ups", "Plank Up-Downs", "Forearm to palm transition", 30, "trending-up"),
        // Back
        ex("supermans", "Supermans", "Lower back extension", 30, "user-check"),
        ex("snow-angels", "Reverse Snow Angels", "Upper back and scapular mobility", 40, "git-merge"),
        ex("prone-y", "Prone Y-Raises", "Traps and shoulder health", 30, "arrow-up"),
        ex("good-mornings", "Bodyweight Good Mornings", "Lower back and hamstring hinge", 40, "refresh-cw"),
        // Core
        ex("plank", "Plank", "Isometric core hold", 45, "minus"),
        ex("crunches", "Crunches", "Abdominal isolation", 30, "circle"),
        ex("russian-twists", "Russian Twists", "Oblique rotation seated", 30, "refresh-cw"),
        ex("leg-raises", "Leg Raises", "Lower abs focus", 30, "arrow-up"),
        ex("bicycle-crunches", "Bicycle Crunches", "Dynamic oblique and abs", 40, "activity"),
        ex("flutter-kicks", "Flutter Kicks", "Lower ab endurance", 30, "trending-up"),
        ex("side-plank", "Side Plank", "Oblique isometric hold", 30, "minus"),
        // Legs
        ex("squats", "Air Squats", "Fundamental lower body strength", 40, "arrow-down"),
        ex("lunges", "Walking Lunges", "Unilateral leg strength", 40, "move"),
        ex("wall-sit", "Wall Sit", "Isometric quad hold", 45, "square"),
        ex("glute-bridges", "Glute Bridges", "Hip extension and glutes", 40, "arrow-up-circle"),
        ex("side-lunges", "Side Lunges", "Adductor and glute focus", 40, "move"),
        ex("calf-raises", "Calf Raises", "Lower leg isolation", 40, "arrow-up"),
        ex("reverse-lunges", "Reverse Lunges", "Glute focused lunge variation", 40, "arrow-down"),
        // Stretch
        ex("cat-cow", "Cat-Cow Stretch", "Spine flexibility", 60, "git-merge"),
        ex("childs-pose", "Child's Pose", "Resting back stretch", 60, "user"),
    ]
});

/// The full exercise library, in display order.
#[must_use]
pub fn library() -> &'static [Exercise] {
    &LIBRARY
}

/// Look up an exercise by id.
#[must_use]
pub fn find_exercise(id: &str) -> Option<&'static Exercise> {
    LIBRARY.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_not_empty() {
        assert!(library().len() >= 30);
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = library().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn test_find_exercise() {
        let plank = find_exercise("plank").unwrap();
        assert_eq!(plank.name, "Plank");
        assert_eq!(plank.base_duration, 45);

        assert!(find_exercise("bench-press").is_none());
    }

    #[test]
    fn test_all_durations_positive() {
        assert!(library().iter().all(|e| e.base_duration > 0));
    }
}

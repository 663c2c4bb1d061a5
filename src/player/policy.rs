//! Duration policy.
//!
//! Pure functions mapping an exercise and an intensity tier to phase
//! durations. Lower tiers get shorter work bouts and longer recovery;
//! advanced users get extended time under tension and minimal rest.

use crate::catalog::{Exercise, Intensity};

/// Seconds of preparation before the first exercise.
pub const PREPARE_SECONDS: u32 = 5;

/// A beginner work bout never drops below this many seconds.
pub const MIN_WORK_SECONDS: u32 = 15;

/// Work duration in seconds for one exercise at the given tier.
#[must_use]
pub fn work_duration(exercise: &Exercise, intensity: Intensity) -> u32 {
    match intensity {
        Intensity::Beginner => exercise
            .base_duration
            .saturating_sub(10)
            .max(MIN_WORK_SECONDS),
        Intensity::Intermediate => exercise.base_duration,
        Intensity::Advanced => exercise.base_duration + 15,
    }
}

/// Rest duration in seconds between exercises at the given tier.
#[must_use]
pub const fn rest_duration(intensity: Intensity) -> u32 {
    match intensity {
        Intensity::Beginner => 20,
        Intensity::Intermediate => 15,
        Intensity::Advanced => 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(base_duration: u32) -> Exercise {
        Exercise {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            base_duration,
            icon: String::new(),
        }
    }

    #[test]
    fn test_work_duration_by_tier() {
        let ex = exercise(30);
        assert_eq!(work_duration(&ex, Intensity::Beginner), 20);
        assert_eq!(work_duration(&ex, Intensity::Intermediate), 30);
        assert_eq!(work_duration(&ex, Intensity::Advanced), 45);
    }

    #[test]
    fn test_beginner_floor() {
        // max(base - 10, 15) even for very short exercises
        assert_eq!(work_duration(&exercise(25), Intensity::Beginner), 15);
        assert_eq!(work_duration(&exercise(20), Intensity::Beginner), 15);
        assert_eq!(work_duration(&exercise(5), Intensity::Beginner), 15);
        assert_eq!(work_duration(&exercise(26), Intensity::Beginner), 16);
    }

    #[test]
    fn test_rest_duration() {
        assert_eq!(rest_duration(Intensity::Beginner), 20);
        assert_eq!(rest_duration(Intensity::Intermediate), 15);
        assert_eq!(rest_duration(Intensity::Advanced), 10);
    }
}

//! Workout history.
//!
//! Every completed session produces one append-only log entry; the report
//! aggregates them into training totals.

mod report;
mod storage;

pub use report::{HistoryReport, ReportPeriod};
pub use storage::HistoryStorage;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Intensity, Workout};
use crate::player::CompletionReport;

/// One completed workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// Id of the workout that was played.
    pub workout_id: String,
    /// Workout title at completion time.
    pub title: String,
    /// Tier the session ran at.
    pub intensity: Intensity,
    /// When the session completed.
    pub completed_at: DateTime<Utc>,
    /// Seconds spent working, from the session's completion report.
    pub duration_seconds: u32,
    /// Calories burned, derived from duration and intensity.
    pub calories: u32,
}

impl HistoryEntry {
    /// Build an entry from a finished session.
    #[must_use]
    pub fn from_report(workout: &Workout, report: &CompletionReport) -> Self {
        Self {
            id: None,
            workout_id: workout.id.clone(),
            title: workout.title.clone(),
            intensity: workout.intensity,
            completed_at: Utc::now(),
            duration_seconds: report.duration_seconds,
            calories: calories_burned(report.duration_seconds, workout.intensity),
        }
    }
}

/// Calories burned for a work duration at a tier.
///
/// `floor(minutes * multiplier)`, computed in whole seconds so no float is
/// involved.
#[must_use]
pub const fn calories_burned(duration_seconds: u32, intensity: Intensity) -> u32 {
    duration_seconds * intensity.calorie_multiplier() / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_burned() {
        // 10 minutes at each tier
        assert_eq!(calories_burned(600, Intensity::Beginner), 60);
        assert_eq!(calories_burned(600, Intensity::Intermediate), 90);
        assert_eq!(calories_burned(600, Intensity::Advanced), 120);

        // Partial minutes floor: 90s advanced = floor(1.5 * 12) = 18
        assert_eq!(calories_burned(90, Intensity::Advanced), 18);
    }
}

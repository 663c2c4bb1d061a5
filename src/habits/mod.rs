//! Daily habits and hydration tracking.

mod storage;

pub use storage::HabitStorage;

use serde::{Deserialize, Serialize};

/// A daily habit with its state for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Database id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Display icon reference.
    pub icon: String,
    /// Whether it was completed on the queried day.
    pub completed: bool,
    /// Consecutive completed days ending at the queried day.
    pub streak: u32,
}

/// Hydration state for one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterStatus {
    /// Glasses drunk.
    pub glasses: u32,
    /// Daily goal in glasses.
    pub goal: u32,
    /// Milliliters per glass.
    pub glass_ml: u32,
}

impl WaterStatus {
    /// Total milliliters drunk.
    #[must_use]
    pub const fn milliliters(&self) -> u32 {
        self.glasses * self.glass_ml
    }
}

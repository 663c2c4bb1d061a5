//! Configuration management for repkit.
//!
//! This module handles loading and saving configuration from `~/.repkit/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, HabitsConfig, NutritionConfig, PlayerConfig};

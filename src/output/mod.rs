//! Output formatting for repkit.
//!
//! This module provides formatters for displaying catalog, history, habit,
//! and social data in either pretty (colored) or JSON form.

mod json;
mod pretty;

use crate::catalog::{Exercise, Workout};
use crate::cli::args::OutputFormat;
use crate::error::RepkitError;
use crate::habits::{Habit, WaterStatus};
use crate::history::HistoryEntry;
use crate::nutrition::MealAnalysis;
use crate::social::{Challenge, Friend};

pub use json::*;
pub use pretty::*;

/// Format a workout list based on output format
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_workouts(
    workouts: &[Workout],
    title: &str,
    format: OutputFormat,
) -> Result<String, RepkitError> {
    match format {
        OutputFormat::Pretty => Ok(format_workouts_pretty(workouts, title)),
        OutputFormat::Json => format_workouts_json(workouts, title),
    }
}

/// Format the exercise library based on output format
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_exercises(
    exercises: &[Exercise],
    format: OutputFormat,
) -> Result<String, RepkitError> {
    match format {
        OutputFormat::Pretty => Ok(format_exercises_pretty(exercises)),
        OutputFormat::Json => format_exercises_json(exercises),
    }
}

/// Format workout history based on output format
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_history(
    entries: &[HistoryEntry],
    format: OutputFormat,
) -> Result<String, RepkitError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(entries)),
        OutputFormat::Json => format_history_json(entries),
    }
}

/// Format the habit list and water status based on output format
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_habits(
    habits: &[Habit],
    water: WaterStatus,
    format: OutputFormat,
) -> Result<String, RepkitError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits, water)),
        OutputFormat::Json => format_habits_json(habits, water),
    }
}

/// Format the leaderboard based on output format
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_social(
    friends: &[Friend],
    challenge: &Challenge,
    format: OutputFormat,
) -> Result<String, RepkitError> {
    match format {
        OutputFormat::Pretty => Ok(format_social_pretty(friends, challenge)),
        OutputFormat::Json => format_social_json(friends, challenge),
    }
}

/// Format a meal analysis based on output format
///
/// # Errors
///
/// Returns `RepkitError::Parse` if JSON serialization fails.
pub fn format_meal(analysis: &MealAnalysis, format: OutputFormat) -> Result<String, RepkitError> {
    match format {
        OutputFormat::Pretty => Ok(format_meal_pretty(analysis)),
        OutputFormat::Json => to_json(analysis),
    }
}

//! The start command: resolve a workout and run the player.

use colored::Colorize;

use crate::catalog::{self, Workout, WorkoutStore};
use crate::cli::args::{OutputFormat, StartArgs};
use crate::cli::picker;
use crate::config::Config;
use crate::error::RepkitError;
use crate::history::{HistoryEntry, HistoryStorage};
use crate::output::to_json;
use crate::profile::UserProfile;
use crate::tui::{self, PlayerOutcome};

/// Execute the start command.
///
/// # Errors
///
/// Returns an error if the workout cannot be resolved, the player fails,
/// or the history entry cannot be recorded.
pub fn start(args: &StartArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let config = Config::load()?;
    let store = WorkoutStore::new()?;

    let mut workout = match args.workout.as_deref() {
        Some(id) => find_workout(id, &store)?,
        None => pick_interactively(&store)?,
    };

    // Session tier: explicit flag wins, then the profile level for prebuilt
    // workouts. Custom workouts keep the tier they were built for.
    if let Some(tier) = args.intensity {
        workout.intensity = tier;
    } else if !workout.is_custom() {
        if let Ok(profile) = UserProfile::load() {
            workout.intensity = profile.level;
        }
    }

    let sound = !args.no_sound && config.player.sound;
    let outcome = tui::run_player(&workout, sound)?;

    match outcome {
        PlayerOutcome::Completed(report) => {
            let mut entry = HistoryEntry::from_report(&workout, &report);
            let storage = HistoryStorage::new()?;
            storage.add(&mut entry)?;

            match format {
                OutputFormat::Json => to_json(&entry),
                OutputFormat::Pretty => Ok(summary(&entry)),
            }
        }
        PlayerOutcome::Exited => match format {
            OutputFormat::Json => Ok("null".to_string()),
            OutputFormat::Pretty => Ok(format!(
                "Workout exited early. Nothing recorded.\n\n{}",
                "Ready to try again? 'repkit start'".dimmed()
            )),
        },
    }
}

/// Find a workout by id across the prebuilt catalog and the custom store.
fn find_workout(id: &str, store: &WorkoutStore) -> Result<Workout, RepkitError> {
    if let Some(workout) = catalog::all_workouts().into_iter().find(|w| w.id == id) {
        return Ok(workout);
    }

    if let Ok(workout) = store.load(id) {
        return Ok(workout);
    }

    Err(RepkitError::NotFound(format!(
        "Workout '{id}'. See 'repkit workouts --all' for ids"
    )))
}

/// Open the fuzzy picker over the user's customs plus their tier's
/// prebuilt workouts.
fn pick_interactively(store: &WorkoutStore) -> Result<Workout, RepkitError> {
    let tier = UserProfile::load().map(|p| p.level).unwrap_or_default();

    let mut candidates = store.list()?;
    candidates.extend(catalog::workouts_for(tier));

    picker::pick_workout(candidates)
        .ok_or_else(|| RepkitError::NotFound("No workout selected".to_string()))
}

/// The post-workout celebration card.
fn summary(entry: &HistoryEntry) -> String {
    let minutes = entry.duration_seconds / 60;
    let seconds = entry.duration_seconds % 60;

    let mut output = Vec::new();
    output.push(format!("🏆 {}", "Crushed it!".green().bold()));
    output.push("Another workout in the books.".dimmed().to_string());
    output.push(String::new());
    output.push(format!("   Workout:  {}", entry.title.bold()));
    output.push(format!("   Duration: {minutes}:{seconds:02}"));
    output.push(format!(
        "   Calories: {}",
        entry.calories.to_string().yellow()
    ));
    output.push(String::new());
    output.push("   See your week with 'repkit report'".dimmed().to_string());

    output.join("\n")
}

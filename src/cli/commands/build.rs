//! The build command: assemble and save a custom workout.

use colored::Colorize;

use crate::catalog::{self, Exercise, Intensity, Workout, WorkoutStore};
use crate::cli::args::{BuildArgs, OutputFormat, StartArgs};
use crate::cli::picker;
use crate::error::RepkitError;
use crate::output::{format_workout_pretty, to_json};

/// Execute the build command.
///
/// # Errors
///
/// Returns an error if no exercises are chosen, an id is unknown, or the
/// workout cannot be saved.
pub fn build(args: &BuildArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let exercises = match &args.exercises {
        Some(ids) => resolve_exercises(ids)?,
        None => picker::pick_exercises(catalog::library())
            .ok_or_else(|| RepkitError::InvalidWorkout("no exercises selected".to_string()))?,
    };

    let name = args.name.as_deref().unwrap_or("My Custom Routine");
    let intensity = args.intensity.unwrap_or(Intensity::Intermediate);

    let workout = Workout::custom(name, intensity, exercises)?;

    let store = WorkoutStore::new()?;
    store.save(&workout)?;

    if args.start {
        let start_args = StartArgs {
            workout: Some(workout.id.clone()),
            intensity: None,
            no_sound: false,
        };
        return super::start(&start_args, format);
    }

    match format {
        OutputFormat::Json => to_json(&workout),
        OutputFormat::Pretty => Ok(format!(
            "{} Saved '{}'\n\n{}\n{}",
            "✓".green(),
            workout.title.bold(),
            format_workout_pretty(&workout),
            format!("Play it with 'repkit start {}'", workout.id).dimmed()
        )),
    }
}

/// Map exercise ids from the command line to library entries.
fn resolve_exercises(ids: &[String]) -> Result<Vec<Exercise>, RepkitError> {
    let mut exercises = Vec::new();

    for id in ids {
        let exercise = catalog::find_exercise(id).ok_or_else(|| {
            RepkitError::NotFound(format!(
                "Exercise '{id}'. See 'repkit exercises' for the library"
            ))
        })?;
        exercises.push(exercise.clone());
    }

    Ok(exercises)
}

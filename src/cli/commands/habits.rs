//! Habit and water commands.

use chrono::Local;
use colored::Colorize;

use crate::cli::args::{HabitsArgs, HabitsCommands, OutputFormat, WaterArgs, WaterCommands};
use crate::config::Config;
use crate::error::RepkitError;
use crate::habits::HabitStorage;
use crate::output::{format_habits, to_json};

/// Execute habits subcommands.
///
/// # Errors
///
/// Returns an error if the habit store cannot be read or updated.
pub fn habits(args: &HabitsArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let storage = HabitStorage::new()?;
    let today = Local::now().date_naive();

    match &args.command {
        HabitsCommands::List => list(&storage, format),

        HabitsCommands::Toggle { name } => {
            let completed = storage.toggle(name, today)?;
            match format {
                OutputFormat::Json => list(&storage, format),
                OutputFormat::Pretty => Ok(if completed {
                    format!("{} {name}", "[x]".green())
                } else {
                    format!("[ ] {name}")
                }),
            }
        }

        HabitsCommands::Add { name, icon } => {
            storage.add(name, icon)?;
            match format {
                OutputFormat::Json => list(&storage, format),
                OutputFormat::Pretty => Ok(format!("{} Now tracking '{name}'", "✓".green())),
            }
        }

        HabitsCommands::Remove { name } => {
            storage.remove(name)?;
            match format {
                OutputFormat::Json => list(&storage, format),
                OutputFormat::Pretty => Ok(format!("Stopped tracking '{name}'")),
            }
        }
    }
}

/// Execute water subcommands.
///
/// # Errors
///
/// Returns an error if the water log cannot be read or updated.
pub fn water(args: &WaterArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let config = Config::load()?;
    let storage = HabitStorage::new()?;
    let today = Local::now().date_naive();
    let goal = config.habits.water_goal_glasses;
    let glass_ml = config.habits.glass_ml;

    let status = match args.command.as_ref().unwrap_or(&WaterCommands::Show) {
        WaterCommands::Show => storage.water(today, goal, glass_ml)?,
        #[allow(clippy::cast_possible_wrap)]
        WaterCommands::Add { glasses } => {
            storage.adjust_water(today, *glasses as i32, goal, glass_ml)?
        }
        #[allow(clippy::cast_possible_wrap)]
        WaterCommands::Remove { glasses } => {
            storage.adjust_water(today, -(*glasses as i32), goal, glass_ml)?
        }
    };

    match format {
        OutputFormat::Json => to_json(&status),
        OutputFormat::Pretty => {
            let filled = "▮".repeat(status.glasses as usize).blue().to_string();
            let empty = "▯"
                .repeat(status.goal.saturating_sub(status.glasses) as usize)
                .dimmed()
                .to_string();
            Ok(format!(
                "Hydration  {}{}  {} / {} glasses ({} ml)",
                filled,
                empty,
                status.glasses,
                status.goal,
                status.milliliters()
            ))
        }
    }
}

fn list(storage: &HabitStorage, format: OutputFormat) -> Result<String, RepkitError> {
    let config = Config::load()?;
    let today = Local::now().date_naive();

    let habits = storage.list(today)?;
    let water = storage.water(
        today,
        config.habits.water_goal_glasses,
        config.habits.glass_ml,
    )?;

    format_habits(&habits, water, format)
}

//! Interactive onboarding.
//!
//! Collects the profile in the same five steps the app has always used:
//! welcome, name, metrics, goal, level.

use std::io::{self, Write};

use colored::Colorize;

use crate::catalog::Intensity;
use crate::error::RepkitError;
use crate::profile::{validate_height, validate_weight, Goal, UserProfile};

/// Run the onboarding flow and save the profile.
///
/// # Errors
///
/// Returns an error if stdin is closed or the profile cannot be saved.
pub fn onboard() -> Result<String, RepkitError> {
    welcome();

    let name = prompt_nonempty("What should we call you?")?;

    println!();
    println!("{}", "Your metrics".cyan().bold());
    let height = prompt_validated("Height (e.g. 5'10\" or 178cm)", validate_height)?;
    let current_weight = prompt_validated("Current weight (e.g. 180 lbs)", validate_weight)?;
    let target_weight = prompt_validated("Goal weight", validate_weight)?;

    let goal = prompt_goal()?;
    let level = prompt_level()?;

    let profile = UserProfile {
        name: name.clone(),
        goal,
        level,
        height,
        current_weight,
        target_weight,
    };
    profile.save()?;

    Ok(format!(
        "\n{} Your plan is ready, {}.\n  Level: {}  Goal: {}\n\n  Browse workouts with 'repkit workouts', then 'repkit start'.",
        "Done!".green().bold(),
        name,
        level,
        goal
    ))
}

fn welcome() {
    println!();
    println!("{}", "  One day".bold());
    println!("{}", "  — or —".dimmed());
    println!("{}", "  day one.".green().bold());
    println!();
    println!("Your journey to a stronger, healthier you begins with a single decision.");
    println!();
}

/// Read one trimmed line from stdin.
fn read_line() -> Result<String, RepkitError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(RepkitError::Io)?;
    Ok(input.trim().to_string())
}

/// Prompt until the user enters something non-empty.
fn prompt_nonempty(question: &str) -> Result<String, RepkitError> {
    loop {
        print!("{} ", format!("{question}:").bold());
        io::stdout().flush().map_err(RepkitError::Io)?;

        let answer = read_line()?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        println!("{}", "Please enter a value.".yellow());
    }
}

/// Prompt until the input passes validation.
fn prompt_validated(
    question: &str,
    validate: fn(&str) -> Result<String, RepkitError>,
) -> Result<String, RepkitError> {
    loop {
        let answer = prompt_nonempty(question)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}

fn prompt_goal() -> Result<Goal, RepkitError> {
    println!();
    println!("{}", "What's your main goal?".cyan().bold());
    for (i, goal) in Goal::all().iter().enumerate() {
        println!("  {}. {}", i + 1, goal);
    }

    loop {
        print!("{} ", "Pick 1-4:".bold());
        io::stdout().flush().map_err(RepkitError::Io)?;

        if let Ok(choice) = read_line()?.parse::<usize>() {
            if (1..=4).contains(&choice) {
                return Ok(Goal::all()[choice - 1]);
            }
        }
        println!("{}", "Please pick a number between 1 and 4.".yellow());
    }
}

fn prompt_level() -> Result<Intensity, RepkitError> {
    let levels = [
        (Intensity::Beginner, "I am just starting my fitness journey."),
        (Intensity::Intermediate, "I workout regularly but want to improve."),
        (Intensity::Advanced, "I am ready to be pushed to the limit."),
    ];

    println!();
    println!("{}", "Experience level".cyan().bold());
    println!("{}", "We'll tailor the workouts to you.".dimmed());
    for (i, (level, description)) in levels.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, level.to_string().bold(), description.dimmed());
    }

    loop {
        print!("{} ", "Pick 1-3:".bold());
        io::stdout().flush().map_err(RepkitError::Io)?;

        if let Ok(choice) = read_line()?.parse::<usize>() {
            if (1..=3).contains(&choice) {
                return Ok(levels[choice - 1].0);
            }
        }
        println!("{}", "Please pick a number between 1 and 3.".yellow());
    }
}

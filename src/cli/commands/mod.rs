//! Command implementations for repkit.
//!
//! This module contains the implementation of all CLI commands.

mod build;
mod habits;
mod history;
mod meal;
mod onboard;
mod start;
mod workouts;

pub use build::build;
pub use habits::{habits, water};
pub use history::{history, report};
pub use meal::meal;
pub use onboard::onboard;
pub use start::start;
pub use workouts::workouts;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, OutputFormat};
use crate::error::RepkitError;
use crate::output::{format_exercises, format_social, to_json};
use crate::profile::UserProfile;
use crate::{catalog, social};

/// Execute the exercises command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn exercises(format: OutputFormat) -> Result<String, RepkitError> {
    format_exercises(catalog::library(), format)
}

/// Execute the profile command
///
/// # Errors
///
/// Returns an error if no profile exists or formatting fails.
pub fn profile(format: OutputFormat) -> Result<String, RepkitError> {
    let profile = UserProfile::load()?;

    match format {
        OutputFormat::Json => to_json(&profile),
        OutputFormat::Pretty => {
            use colored::Colorize;
            let mut output = Vec::new();
            output.push(format!("{}", profile.name.bold()));
            output.push(format!("  {}: {}", "Goal".dimmed(), profile.goal));
            output.push(format!("  {}: {}", "Level".dimmed(), profile.level));
            output.push(format!("  {}: {}", "Height".dimmed(), profile.height));
            output.push(format!(
                "  {}: {} -> {}",
                "Weight".dimmed(),
                profile.current_weight,
                profile.target_weight
            ));
            Ok(output.join("\n"))
        }
    }
}

/// Execute the social command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn social_hub(format: OutputFormat) -> Result<String, RepkitError> {
    format_social(&social::leaderboard(), &social::current_challenge(), format)
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, RepkitError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "repkit", &mut buf);
    String::from_utf8(buf).map_err(|e| RepkitError::Config(format!("UTF-8 error: {e}")))
}

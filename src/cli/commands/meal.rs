//! The meal command: macro estimation from a photo.

use crate::cli::args::{MealArgs, OutputFormat};
use crate::config::Config;
use crate::error::RepkitError;
use crate::nutrition::MealAnalyzer;
use crate::output::format_meal;

/// Execute the meal command.
///
/// # Errors
///
/// Returns an error if the image cannot be read or formatting fails. A
/// failed analysis call is not an error; it falls back to a generic
/// estimate.
pub fn meal(args: &MealArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let config = Config::load()?;
    let analyzer = MealAnalyzer::new(config.nutrition.api_key)?;

    let analysis = analyzer.analyze(&args.image)?;
    format_meal(&analysis, format)
}

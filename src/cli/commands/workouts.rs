//! Workout catalog listing.

use crate::catalog::{self, Intensity, Workout, WorkoutStore};
use crate::cli::args::{OutputFormat, WorkoutsArgs};
use crate::error::RepkitError;
use crate::output::format_workouts;
use crate::profile::UserProfile;

/// Execute the workouts command.
///
/// # Errors
///
/// Returns an error if custom workouts cannot be read or formatting fails.
pub fn workouts(args: &WorkoutsArgs, format: OutputFormat) -> Result<String, RepkitError> {
    let store = WorkoutStore::new()?;
    let custom = store.list()?;

    let (mut list, title) = if args.all {
        (catalog::all_workouts(), "All Workouts".to_string())
    } else {
        let tier = resolve_tier(args.intensity);
        (
            catalog::workouts_for(tier),
            format!("{tier} Workouts"),
        )
    };

    // Custom workouts always show, ahead of the prebuilt ones.
    let mut combined: Vec<Workout> = custom;
    combined.append(&mut list);

    format_workouts(&combined, &title, format)
}

/// The tier to browse: explicit flag, then profile level, then the default.
fn resolve_tier(flag: Option<Intensity>) -> Intensity {
    flag.unwrap_or_else(|| {
        UserProfile::load()
            .map(|p| p.level)
            .unwrap_or_default()
    })
}

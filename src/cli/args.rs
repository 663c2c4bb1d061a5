use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Intensity;

#[derive(Parser)]
#[command(name = "repkit")]
#[command(about = "A guided bodyweight workout timer and fitness tracker for the terminal")]
#[command(long_about = "repkit - guided workouts in your terminal

Pick a workout, and repkit walks you through it: a preparation countdown,
timed work bouts scaled to your level, rest between exercises, and audio
cues at every transition. Completed workouts land in a local training log.

QUICK START:
  repkit onboard            Set up your profile
  repkit workouts           Browse workouts for your level
  repkit start              Pick one and go
  repkit report             See your week

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  repkit <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up your profile
    ///
    /// Walks through the one-time setup: your name, height and weight,
    /// training goal, and experience level. The level decides which
    /// workouts the catalog shows you and how long each work bout runs.
    ///
    /// # Examples
    ///
    ///   repkit onboard            Run the interactive setup
    #[command(alias = "setup")]
    Onboard,

    /// Show your profile
    ///
    /// Prints the stored profile: name, metrics, goal, and level.
    /// Re-run 'repkit onboard' to change it.
    Profile,

    /// List workouts for your level
    ///
    /// Shows the prebuilt workouts matched to your profile level plus any
    /// custom workouts you have saved. Use --intensity to browse another
    /// tier, or --all for the whole catalog.
    ///
    /// # Examples
    ///
    ///   repkit workouts                   Workouts for your level
    ///   repkit workouts -i advanced       Browse the advanced tier
    ///   repkit workouts --all             The whole catalog
    #[command(alias = "w")]
    Workouts(WorkoutsArgs),

    /// List the exercise library
    ///
    /// Every exercise repkit knows, with its base work duration. These are
    /// the building blocks for 'repkit build'.
    #[command(alias = "ex")]
    Exercises,

    /// Play a workout
    ///
    /// Starts the guided player for a workout: 5 seconds of preparation,
    /// then timed work and rest phases with audio cues. With no WORKOUT
    /// argument an interactive picker opens.
    ///
    /// Keys in the player: space pauses, s skips the current phase,
    /// m toggles sound, q exits without recording anything.
    ///
    /// # Examples
    ///
    ///   repkit start                      Pick interactively
    ///   repkit start int-1                Start by workout id
    ///   repkit start int-1 -i beginner    Override the intensity
    ///   repkit start --no-sound           Start muted
    #[command(alias = "go")]
    Start(StartArgs),

    /// Build a custom workout
    ///
    /// Assemble a circuit from the exercise library and save it. Saved
    /// workouts are immutable; build a new one to make changes. With no
    /// --exercises list an interactive multi-select picker opens.
    ///
    /// # Examples
    ///
    ///   repkit build --name "Morning Burn" --exercises plank,squats,burpees
    ///   repkit build -n "Leg Day" -i advanced --start
    #[command(alias = "b")]
    Build(BuildArgs),

    /// Show completed workouts
    ///
    /// The training log, newest first. Every finished session records its
    /// worked time and calories; exited sessions record nothing.
    ///
    /// # Examples
    ///
    ///   repkit history            Last 10 workouts
    ///   repkit history -l 50      More of them
    #[command(alias = "log")]
    History(HistoryArgs),

    /// Training report for a period
    ///
    /// Totals, averages, and a per-weekday volume chart over the chosen
    /// period.
    ///
    /// # Examples
    ///
    ///   repkit report             This week
    ///   repkit report -p month    Last 30 days
    ///   repkit report -p all      Everything
    Report(ReportArgs),

    /// Track daily habits
    ///
    /// A small habit list with per-day completion and streaks. A fresh
    /// install starts with a few common habits; add your own or remove
    /// them freely.
    ///
    /// # Examples
    ///
    ///   repkit habits list                 Today's habits and streaks
    ///   repkit habits toggle "No Sugar"    Mark done / not done
    ///   repkit habits add "Stretch"        Track something new
    #[command(alias = "h")]
    Habits(HabitsArgs),

    /// Track hydration
    ///
    /// A per-day glass counter with a configurable goal.
    ///
    /// # Examples
    ///
    ///   repkit water              Today's count
    ///   repkit water add          One more glass
    ///   repkit water remove       One fewer
    Water(WaterArgs),

    /// Estimate macros from a meal photo
    ///
    /// Sends the photo to the analysis backend and prints a calorie and
    /// macro estimate with a health score. Needs GEMINI_API_KEY (or
    /// nutrition.api_key in config); without it, or when the call fails,
    /// a generic fallback estimate is shown.
    ///
    /// # Examples
    ///
    ///   repkit meal lunch.jpg
    ///   repkit meal dinner.png -o json
    Meal(MealArgs),

    /// Show the community leaderboard
    ///
    /// The weekly challenge and your friends ranked by XP.
    Social,

    /// Generate shell completions
    ///
    /// Prints a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   repkit completions zsh > ~/.zfunc/_repkit
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct WorkoutsArgs {
    /// Browse a specific intensity tier
    #[arg(short, long, value_enum)]
    pub intensity: Option<Intensity>,

    /// Show the whole catalog, all tiers
    #[arg(long, conflicts_with = "intensity")]
    pub all: bool,
}

#[derive(Args)]
pub struct StartArgs {
    /// Workout id (prebuilt or custom); omit to pick interactively
    pub workout: Option<String>,

    /// Override the intensity tier for this session
    #[arg(short, long, value_enum)]
    pub intensity: Option<Intensity>,

    /// Start with audio cues muted
    #[arg(long)]
    pub no_sound: bool,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Name for the new workout
    #[arg(short, long)]
    pub name: Option<String>,

    /// Intensity tier the workout is built for
    #[arg(short, long, value_enum)]
    pub intensity: Option<Intensity>,

    /// Comma-separated exercise ids; omit to pick interactively
    #[arg(short, long, value_delimiter = ',')]
    pub exercises: Option<Vec<String>>,

    /// Start the workout right after saving it
    #[arg(long)]
    pub start: bool,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Maximum number of entries to show
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Report period: today, week, month, or all
    #[arg(short, long, default_value = "week")]
    pub period: String,
}

#[derive(Args)]
pub struct HabitsArgs {
    #[command(subcommand)]
    pub command: HabitsCommands,
}

#[derive(Subcommand)]
pub enum HabitsCommands {
    /// Show today's habits and streaks
    List,
    /// Flip a habit's completion for today
    Toggle {
        /// Habit name
        name: String,
    },
    /// Start tracking a new habit
    Add {
        /// Habit name
        name: String,
        /// Display icon reference
        #[arg(long, default_value = "check-circle")]
        icon: String,
    },
    /// Stop tracking a habit
    Remove {
        /// Habit name
        name: String,
    },
}

#[derive(Args)]
pub struct WaterArgs {
    #[command(subcommand)]
    pub command: Option<WaterCommands>,
}

#[derive(Subcommand)]
pub enum WaterCommands {
    /// Show today's count
    Show,
    /// Log glasses drunk
    Add {
        /// How many glasses
        #[arg(default_value = "1")]
        glasses: u32,
    },
    /// Un-log glasses
    Remove {
        /// How many glasses
        #[arg(default_value = "1")]
        glasses: u32,
    },
}

#[derive(Args)]
pub struct MealArgs {
    /// Path to the meal photo (jpeg, png, or webp)
    pub image: PathBuf,
}

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use repkit::cli::args::{Cli, Commands};
use repkit::cli::commands;
use repkit::error::RepkitError;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RepkitError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Onboard => commands::onboard()?,
        Commands::Profile => commands::profile(format)?,
        Commands::Workouts(args) => commands::workouts(&args, format)?,
        Commands::Exercises => commands::exercises(format)?,
        Commands::Start(args) => commands::start(&args, format)?,
        Commands::Build(args) => commands::build(&args, format)?,
        Commands::History(args) => commands::history(&args, format)?,
        Commands::Report(args) => commands::report(&args, format)?,
        Commands::Habits(args) => commands::habits(&args, format)?,
        Commands::Water(args) => commands::water(&args, format)?,
        Commands::Meal(args) => commands::meal(&args, format)?,
        Commands::Social => commands::social_hub(format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

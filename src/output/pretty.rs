use colored::Colorize;

use crate::catalog::{Exercise, Workout};
use crate::habits::{Habit, WaterStatus};
use crate::history::HistoryEntry;
use crate::nutrition::MealAnalysis;
use crate::social::{Challenge, Friend};

/// Format a list of workouts as a pretty table
#[must_use]
pub fn format_workouts_pretty(workouts: &[Workout], title: &str) -> String {
    if workouts.is_empty() {
        return format!("{title} (0 workouts)\n  No workouts");
    }

    let mut output = format!("{} ({} workouts)\n", title, workouts.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for workout in workouts {
        let tag = format!("[{}]", workout.category).cyan();
        let mut line = format!("{} {}", tag, workout.title.bold());

        line.push_str(&format!("  {}", workout.id.dimmed()));
        line.push_str(&format!(
            "  {} min  ~{} cal  {}",
            workout.duration_minutes,
            workout.estimated_calories,
            workout.intensity.to_string().yellow()
        ));

        output.push_str(&line);
        output.push('\n');
        output.push_str(&format!("    {}\n", workout.description.dimmed()));
    }

    output
}

/// Format a single workout with its circuit
#[must_use]
pub fn format_workout_pretty(workout: &Workout) -> String {
    let mut output = format!(
        "{} {}\n",
        format!("[{}]", workout.category).cyan(),
        workout.title.bold()
    );
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), workout.id));
    output.push_str(&format!("  {}: {}\n", "Intensity".dimmed(), workout.intensity));
    output.push_str(&format!(
        "  {}: {} min (~{} cal)\n",
        "Duration".dimmed(),
        workout.duration_minutes,
        workout.estimated_calories
    ));
    output.push_str(&format!("  {}:\n", "Circuit".dimmed()));

    for (i, exercise) in workout.exercises.iter().enumerate() {
        output.push_str(&format!(
            "    {:>2}. {} ({}s)\n",
            i + 1,
            exercise.name,
            exercise.base_duration
        ));
    }

    output
}

/// Format the exercise library
#[must_use]
pub fn format_exercises_pretty(exercises: &[Exercise]) -> String {
    if exercises.is_empty() {
        return "No exercises".to_string();
    }

    let mut output = format!("Exercise Library ({} exercises)\n", exercises.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for exercise in exercises {
        output.push_str(&format!(
            "{}  {}s  {}\n",
            format!("{:<20}", exercise.name).bold(),
            format!("{:>3}", exercise.base_duration).yellow(),
            exercise.description.dimmed()
        ));
    }

    output
}

/// Format workout history entries
#[must_use]
pub fn format_history_pretty(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No workouts logged yet.\n\nStart one with: repkit start".to_string();
    }

    let mut output = "Workout History".bold().to_string();
    output.push('\n');
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output.push_str(&format!(
        "{:<12} {:<9} {:<8} {:<25}\n",
        "Date", "Duration", "Calories", "Workout"
    ));
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for entry in entries {
        let date = entry.completed_at.format("%Y-%m-%d").to_string();
        let minutes = entry.duration_seconds / 60;
        let seconds = entry.duration_seconds % 60;

        output.push_str(&format!(
            "{:<12} {:>5}:{:02}  {:>6}   {}\n",
            date,
            minutes,
            seconds,
            entry.calories,
            entry.title
        ));
    }

    output
}

/// Format the habit list and water tracker
#[must_use]
pub fn format_habits_pretty(habits: &[Habit], water: WaterStatus) -> String {
    let mut output = "Daily Habits".bold().to_string();
    output.push('\n');
    output.push_str(&"─".repeat(50));
    output.push('\n');

    // Hydration row: one pip per glass
    let filled = "▮".repeat(water.glasses as usize).blue();
    let empty = "▯".repeat(water.goal.saturating_sub(water.glasses) as usize);
    output.push_str(&format!(
        "Hydration  {}{}  {} ml\n\n",
        filled,
        empty.dimmed(),
        water.milliliters()
    ));

    if habits.is_empty() {
        output.push_str("No habits tracked.\n");
        return output;
    }

    for habit in habits {
        let check = if habit.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };
        let streak = if habit.streak > 0 {
            format!("  {} day streak", habit.streak).yellow().to_string()
        } else {
            String::new()
        };
        output.push_str(&format!("{} {}{}\n", check, habit.name.bold(), streak));
    }

    output
}

/// Format the leaderboard and weekly challenge
#[must_use]
pub fn format_social_pretty(friends: &[Friend], challenge: &Challenge) -> String {
    let mut output = "Community".bold().to_string();
    output.push('\n');
    output.push_str(&"─".repeat(50));
    output.push('\n');

    output.push_str(&format!(
        "{}  {}\n",
        "Weekly Challenge:".cyan(),
        challenge.title.bold()
    ));
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((challenge.progress * 20.0) as usize).min(20);
    output.push_str(&format!(
        "[{}{}] ends in {} days - {} is leading\n\n",
        "█".repeat(filled).green(),
        "░".repeat(20 - filled).dimmed(),
        challenge.ends_in_days,
        challenge.leader
    ));

    output.push_str(&format!("{}\n", "Leaderboard".dimmed()));
    for friend in friends {
        let trophy = match friend.rank {
            1 => " 🏆",
            2 | 3 => " 🏅",
            _ => "",
        };
        let active = if friend.active {
            " ●".green().to_string()
        } else {
            String::new()
        };
        output.push_str(&format!(
            "{:>2}. {} {} XP{}{}\n",
            friend.rank,
            format!("{:<10}", friend.name).bold(),
            friend.points,
            trophy,
            active
        ));
    }

    output
}

/// Format a meal analysis card
#[must_use]
pub fn format_meal_pretty(analysis: &MealAnalysis) -> String {
    let mut output = format!(
        "{}  {} kcal\n",
        analysis.food_name.bold(),
        analysis.calories.to_string().yellow()
    );
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Protein: {}   Carbs: {}   Fats: {}\n",
        analysis.protein.cyan(),
        analysis.carbs.green(),
        analysis.fats.yellow()
    ));
    output.push_str(&format!("Health score: {}/10\n", analysis.health_score));
    output.push_str(&format!("Tip: {}\n", analysis.quick_tip.italic()));
    output
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{find_exercise, Intensity, Workout};

    fn sample_workout() -> Workout {
        Workout::custom(
            "Morning Burn",
            Intensity::Intermediate,
            vec![
                find_exercise("plank").unwrap().clone(),
                find_exercise("squats").unwrap().clone(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_format_workouts_empty() {
        let out = format_workouts_pretty(&[], "Workouts");
        assert!(out.contains("0 workouts"));
    }

    #[test]
    fn test_format_workouts_lists_each() {
        let out = format_workouts_pretty(&[sample_workout()], "Workouts");
        assert!(out.contains("Morning Burn"));
        assert!(out.contains("custom-morning-burn"));
    }

    #[test]
    fn test_format_workout_lists_circuit() {
        let out = format_workout_pretty(&sample_workout());
        assert!(out.contains("1. Plank (45s)"));
        assert!(out.contains("2. Air Squats (40s)"));
    }

    #[test]
    fn test_format_history_empty() {
        let out = format_history_pretty(&[]);
        assert!(out.contains("repkit start"));
    }

    #[test]
    fn test_format_habits_shows_water() {
        let water = WaterStatus {
            glasses: 3,
            goal: 8,
            glass_ml: 250,
        };
        let out = format_habits_pretty(&[], water);
        assert!(out.contains("750 ml"));
    }

    #[test]
    fn test_format_meal() {
        let out = format_meal_pretty(&MealAnalysis::fallback());
        assert!(out.contains("Healthy Meal Bowl"));
        assert!(out.contains("450"));
    }
}

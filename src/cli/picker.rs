//! Fuzzy pickers built on skim.
//!
//! Used by `start` to choose a workout and by `build` to assemble a
//! circuit when no ids are given on the command line.

use std::sync::Arc;

use skim::prelude::*;

use crate::catalog::{Exercise, Workout};

/// A wrapper around Workout that implements `SkimItem`.
struct WorkoutItem {
    workout: Workout,
    display: String,
}

impl WorkoutItem {
    fn new(workout: Workout) -> Self {
        let display = format!(
            "{}  [{}] {} min ~{} cal ({})",
            workout.title,
            workout.category,
            workout.duration_minutes,
            workout.estimated_calories,
            workout.intensity
        );
        Self { workout, display }
    }
}

impl SkimItem for WorkoutItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.display)
    }

    fn preview(&self, _context: PreviewContext<'_>) -> ItemPreview {
        let mut preview = String::new();

        preview.push_str(&format!("{}\n", self.workout.title));
        preview.push_str(&format!("{}\n\n", self.workout.description));
        preview.push_str(&format!("Intensity: {}\n", self.workout.intensity));
        preview.push_str(&format!(
            "Duration: {} min (~{} cal)\n\n",
            self.workout.duration_minutes, self.workout.estimated_calories
        ));

        preview.push_str("Circuit:\n");
        for (i, exercise) in self.workout.exercises.iter().enumerate() {
            preview.push_str(&format!(
                "  {:>2}. {} ({}s)\n",
                i + 1,
                exercise.name,
                exercise.base_duration
            ));
        }

        ItemPreview::Text(preview)
    }

    fn output(&self) -> Cow<'_, str> {
        // Return the ID for easy processing
        Cow::Borrowed(&self.workout.id)
    }
}

/// A wrapper around Exercise that implements `SkimItem`.
struct ExerciseItem {
    exercise: Exercise,
    display: String,
}

impl ExerciseItem {
    fn new(exercise: Exercise) -> Self {
        let display = format!(
            "{} ({}s)  {}",
            exercise.name, exercise.base_duration, exercise.description
        );
        Self { exercise, display }
    }
}

impl SkimItem for ExerciseItem {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.display)
    }

    fn output(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.exercise.id)
    }
}

/// Pick one workout interactively.
///
/// Returns None if the list is empty or the user aborts.
pub fn pick_workout(workouts: Vec<Workout>) -> Option<Workout> {
    if workouts.is_empty() {
        return None;
    }

    let skim_options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(false)
        .prompt(Some("Start workout > "))
        .preview(Some(""))
        .preview_window(Some("right:50%:wrap"))
        .header(Some("Enter: start | Ctrl-C: cancel"))
        .build()
        .ok()?;

    let candidates = workouts.clone();

    let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
    for workout in workouts {
        let item: Arc<dyn SkimItem> = Arc::new(WorkoutItem::new(workout));
        let _ = tx.send(item);
    }
    drop(tx);

    let output = Skim::run_with(&skim_options, Some(rx))?;
    if output.is_abort {
        return None;
    }

    let id = output.selected_items.first()?.output().to_string();
    candidates.into_iter().find(|w| w.id == id)
}

/// Pick a circuit of exercises interactively (Tab toggles selection).
///
/// Returns the selection in library order, or None if the user aborts or
/// selects nothing.
pub fn pick_exercises(exercises: &[Exercise]) -> Option<Vec<Exercise>> {
    if exercises.is_empty() {
        return None;
    }

    let skim_options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(true)
        .prompt(Some("Add exercises > "))
        .header(Some("Tab: toggle | Enter: accept | Ctrl-C: cancel"))
        .build()
        .ok()?;

    let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
    for exercise in exercises {
        let item: Arc<dyn SkimItem> = Arc::new(ExerciseItem::new(exercise.clone()));
        let _ = tx.send(item);
    }
    drop(tx);

    let output = Skim::run_with(&skim_options, Some(rx))?;
    if output.is_abort {
        return None;
    }

    let ids: Vec<String> = output
        .selected_items
        .iter()
        .map(|item| item.output().to_string())
        .collect();

    let picked: Vec<Exercise> = exercises
        .iter()
        .filter(|e| ids.contains(&e.id))
        .cloned()
        .collect();

    if picked.is_empty() {
        None
    } else {
        Some(picked)
    }
}

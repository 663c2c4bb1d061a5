//! The workout session state machine.
//!
//! One `WorkoutSession` exists per playback. It is mutated exclusively by
//! `tick`, `skip`, `pause`, `resume`, `set_sound_enabled`, and `exit`; all
//! of them run on the caller's thread, so transitions are serialized by
//! construction. The clock lives elsewhere ([`super::clock`]) and simply
//! delivers ticks.
//!
//! Phases run `Preparing -> Working(0) -> Resting -> Working(1) -> ... ->
//! Complete`. A phase of `D` seconds consumes exactly `D` ticks; the
//! transition fires on the tick whose decrement reaches zero. Only ticks
//! spent in a Working phase count toward `elapsed_work_seconds`, which makes
//! the completion report equal the sum of the per-exercise work durations
//! when nothing is skipped.

use serde::Serialize;

use crate::catalog::{Exercise, Intensity, Workout};
use crate::error::RepkitError;

use super::cues::CueDispatcher;
use super::policy::{self, PREPARE_SECONDS};

/// Countdown pips fire while `time_left` is within this many seconds.
const COUNTDOWN_PULSE_FROM: u32 = 3;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Pre-workout countdown.
    Preparing,
    /// An exercise is in progress.
    Working {
        /// Index of the active exercise.
        index: usize,
    },
    /// Recovery between exercises.
    Resting {
        /// Index of the exercise that starts when rest ends.
        next: usize,
    },
    /// The final exercise finished. No further ticks are processed.
    Complete,
}

impl Phase {
    /// Short display label for the phase.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Preparing => "Get Ready",
            Self::Working { .. } => "Work It",
            Self::Resting { .. } => "Rest",
            Self::Complete => "Done",
        }
    }
}

/// Read-only view of the session after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Index of the exercise the session is on.
    pub current_index: usize,
    /// Seconds remaining in the current phase.
    pub time_left: u32,
    /// Accumulated Working-phase seconds.
    pub elapsed_work_seconds: u32,
    /// Whether the countdown is frozen.
    pub paused: bool,
}

/// Terminal report surfaced exactly once, when the session completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    /// Total seconds spent working (the authoritative session duration).
    pub duration_seconds: u32,
}

/// One playback of a workout.
pub struct WorkoutSession {
    exercises: Vec<Exercise>,
    intensity: Intensity,
    phase: Phase,
    time_left: u32,
    paused: bool,
    elapsed_work_seconds: u32,
    exited: bool,
    cues: CueDispatcher,
}

impl WorkoutSession {
    /// Start a session for a workout.
    ///
    /// Emits the "get ready" cue immediately; no tick is required for it.
    ///
    /// # Errors
    ///
    /// Returns `RepkitError::InvalidWorkout` if the workout has no
    /// exercises. No session is constructed in that case.
    pub fn new(workout: &Workout, cues: CueDispatcher) -> Result<Self, RepkitError> {
        if workout.exercises.is_empty() {
            return Err(RepkitError::InvalidWorkout(format!(
                "workout '{}' has no exercises",
                workout.id
            )));
        }

        let session = Self {
            exercises: workout.exercises.clone(),
            intensity: workout.intensity,
            phase: Phase::Preparing,
            time_left: PREPARE_SECONDS,
            paused: false,
            elapsed_work_seconds: 0,
            exited: false,
            cues,
        };

        session.cues.get_ready(&session.exercises[0].name);
        Ok(session)
    }

    /// Advance the countdown by one second.
    ///
    /// Ignored while paused and after the session has ended; a late tick
    /// from a not-yet-cancelled clock is a no-op, not an error. Returns the
    /// completion report on the tick that finishes the last exercise.
    pub fn tick(&mut self) -> Option<CompletionReport> {
        if self.paused || self.is_terminal() {
            return None;
        }

        if self.time_left > 0 {
            self.time_left -= 1;
            if matches!(self.phase, Phase::Working { .. }) {
                self.elapsed_work_seconds += 1;
            }
            if (1..=COUNTDOWN_PULSE_FROM).contains(&self.time_left) {
                self.cues.countdown_pulse();
            }
        }

        if self.time_left == 0 {
            // The transition consumes this tick; nothing is decremented twice.
            return self.advance();
        }

        None
    }

    /// Force an immediate phase transition, as if the countdown hit zero.
    ///
    /// Skipped seconds never count toward `elapsed_work_seconds`.
    pub fn skip(&mut self) -> Option<CompletionReport> {
        if self.is_terminal() {
            return None;
        }
        self.advance()
    }

    /// Freeze the countdown. Ticks are ignored entirely while paused.
    pub fn pause(&mut self) {
        if !self.is_terminal() {
            self.paused = true;
        }
    }

    /// Continue from the exact `time_left` value at pause time.
    pub fn resume(&mut self) {
        if !self.is_terminal() {
            self.paused = false;
        }
    }

    /// Flip between paused and running.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// End the session early.
    ///
    /// Returns `true` only on the call that actually ends it; a completed
    /// or already-exited session returns `false`.
    pub fn exit(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.exited = true;
        true
    }

    /// Gate the cue dispatcher. Timing is unaffected.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.cues.set_sound_enabled(enabled);
    }

    /// Whether cues are currently audible.
    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.cues.sound_enabled()
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            current_index: self.current_index(),
            time_left: self.time_left,
            elapsed_work_seconds: self.elapsed_work_seconds,
            paused: self.paused,
        }
    }

    /// The exercise the session is on.
    #[must_use]
    pub fn current_exercise(&self) -> &Exercise {
        &self.exercises[self.current_index()]
    }

    /// The exercise after the current one, if any.
    #[must_use]
    pub fn next_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.current_index() + 1)
    }

    /// Full duration in seconds of the phase currently running.
    ///
    /// Derived on demand so the presentation layer can compute ratios; the
    /// session itself stores nothing display-related.
    #[must_use]
    pub fn phase_seconds(&self) -> u32 {
        match self.phase {
            Phase::Preparing => PREPARE_SECONDS,
            Phase::Working { index } => {
                policy::work_duration(&self.exercises[index], self.intensity)
            }
            Phase::Resting { .. } => policy::rest_duration(self.intensity),
            Phase::Complete => 0,
        }
    }

    /// Number of exercises in the circuit.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// The tier this session runs at.
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Accumulated Working-phase seconds so far.
    #[must_use]
    pub const fn elapsed_work_seconds(&self) -> u32 {
        self.elapsed_work_seconds
    }

    /// Whether the session finished naturally.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete)
    }

    /// Whether no further ticks will be processed.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.exited || self.is_complete()
    }

    fn current_index(&self) -> usize {
        match self.phase {
            Phase::Preparing => 0,
            Phase::Working { index } => index,
            Phase::Resting { next } => next - 1,
            Phase::Complete => self.exercises.len() - 1,
        }
    }

    /// Fire the phase transition. Durations for the phase being entered are
    /// always computed from the entered variant's own index.
    fn advance(&mut self) -> Option<CompletionReport> {
        match self.phase {
            Phase::Preparing => {
                self.phase = Phase::Working { index: 0 };
                self.time_left = policy::work_duration(&self.exercises[0], self.intensity);
                self.cues.go();
                None
            }
            Phase::Working { index } if index + 1 >= self.exercises.len() => {
                self.phase = Phase::Complete;
                self.time_left = 0;
                self.cues.complete();
                Some(CompletionReport {
                    duration_seconds: self.elapsed_work_seconds,
                })
            }
            Phase::Working { index } => {
                let next = index + 1;
                self.phase = Phase::Resting { next };
                self.time_left = policy::rest_duration(self.intensity);
                self.cues.rest(Some(&self.exercises[next].name));
                None
            }
            Phase::Resting { next } => {
                self.phase = Phase::Working { index: next };
                self.time_left = policy::work_duration(&self.exercises[next], self.intensity);
                self.cues.exercise_start(&self.exercises[next].name);
                None
            }
            Phase::Complete => None,
        }
    }
}

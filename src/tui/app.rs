//! Player state for the TUI.

use std::sync::mpsc::{Receiver, Sender};

use crate::audio::AudioCueSink;
use crate::catalog::{Exercise, Intensity};
use crate::history::calories_burned;
use crate::player::cues::{Cue, CueError, CueSink};
use crate::player::{CompletionReport, SessionSnapshot, WorkoutSession};

/// How a player run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// The final exercise finished naturally.
    Completed(CompletionReport),
    /// The user left mid-session. Nothing is recorded.
    Exited,
}

/// A cue sink for the player: tones go to the audio engine, phrases go to
/// the UI over a channel. Both paths are non-blocking.
pub struct AppCueSink {
    audio: AudioCueSink,
    tx: Sender<Cue>,
}

impl AppCueSink {
    /// Bundle the audio sink with the UI channel.
    #[must_use]
    pub const fn new(audio: AudioCueSink, tx: Sender<Cue>) -> Self {
        Self { audio, tx }
    }
}

impl CueSink for AppCueSink {
    fn emit(&self, cue: &Cue) -> Result<(), CueError> {
        // The UI channel only closes when the player is being torn down;
        // a cue lost at that point is fine.
        let _ = self.tx.send(cue.clone());
        self.audio.emit(cue)
    }
}

/// Player screen state.
pub struct PlayerApp {
    /// Workout title shown in the header.
    pub title: String,
    /// Latest announced coach line.
    pub last_cue: Option<String>,
    session: WorkoutSession,
    cue_rx: Receiver<Cue>,
    outcome: Option<PlayerOutcome>,
}

impl PlayerApp {
    /// Create the player state around a live session.
    #[must_use]
    pub fn new(title: String, session: WorkoutSession, cue_rx: Receiver<Cue>) -> Self {
        Self {
            title,
            last_cue: None,
            session,
            cue_rx,
            outcome: None,
        }
    }

    /// Feed one clock tick to the session.
    pub fn on_tick(&mut self) {
        if let Some(report) = self.session.tick() {
            self.outcome = Some(PlayerOutcome::Completed(report));
        }
    }

    /// Skip to the next phase.
    pub fn skip(&mut self) {
        if let Some(report) = self.session.skip() {
            self.outcome = Some(PlayerOutcome::Completed(report));
        }
    }

    /// Pause or resume the countdown.
    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    /// Toggle audio cues.
    pub fn toggle_sound(&mut self) {
        let enabled = self.session.sound_enabled();
        self.session.set_sound_enabled(!enabled);
    }

    /// Leave the workout early.
    pub fn exit(&mut self) {
        if self.session.exit() {
            self.outcome = Some(PlayerOutcome::Exited);
        }
    }

    /// Pull announced cues into the coach line.
    pub fn drain_cues(&mut self) {
        while let Ok(cue) = self.cue_rx.try_recv() {
            if let Some(phrase) = cue.phrase() {
                self.last_cue = Some(phrase);
            }
        }
    }

    /// Whether the run is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Consume the player and return how it ended.
    ///
    /// Defaults to `Exited` for defensive callers; the run loop only
    /// returns once an outcome is set.
    #[must_use]
    pub fn into_outcome(self) -> PlayerOutcome {
        self.outcome.unwrap_or(PlayerOutcome::Exited)
    }

    /// Session snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// The exercise the session is on.
    #[must_use]
    pub fn current_exercise(&self) -> &Exercise {
        self.session.current_exercise()
    }

    /// The upcoming exercise, if any.
    #[must_use]
    pub fn next_exercise(&self) -> Option<&Exercise> {
        self.session.next_exercise()
    }

    /// Full duration of the phase currently running.
    #[must_use]
    pub fn phase_seconds(&self) -> u32 {
        self.session.phase_seconds()
    }

    /// Number of exercises in the circuit.
    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.session.exercise_count()
    }

    /// Whether cues are audible.
    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.session.sound_enabled()
    }

    /// The tier the session runs at.
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.session.intensity()
    }

    /// Calories burned so far, derived from worked seconds.
    #[must_use]
    pub fn calories_so_far(&self) -> u32 {
        calories_burned(self.session.elapsed_work_seconds(), self.session.intensity())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Workout};
    use crate::player::cues::CueDispatcher;
    use std::sync::mpsc;

    fn sample_session() -> WorkoutSession {
        let workout = Workout {
            id: "w".to_string(),
            title: "W".to_string(),
            description: String::new(),
            exercises: vec![Exercise {
                id: "e".to_string(),
                name: "E".to_string(),
                description: String::new(),
                base_duration: 30,
                icon: String::new(),
            }],
            estimated_calories: 0,
            duration_minutes: 0,
            category: Category::Strength,
            intensity: Intensity::Intermediate,
        };
        WorkoutSession::new(&workout, CueDispatcher::silent()).unwrap()
    }

    #[test]
    fn test_exit_sets_outcome_once() {
        let (_tx, rx) = mpsc::channel();
        let mut player = PlayerApp::new("W".to_string(), sample_session(), rx);

        assert!(!player.is_finished());
        player.exit();
        assert!(player.is_finished());

        // A second exit cannot overwrite the outcome.
        player.exit();
        assert_eq!(player.into_outcome(), PlayerOutcome::Exited);
    }

    #[test]
    fn test_completion_outcome_carries_report() {
        let (_tx, rx) = mpsc::channel();
        let mut player = PlayerApp::new("W".to_string(), sample_session(), rx);

        // Prep then the whole work bout.
        for _ in 0..5 + 30 {
            player.on_tick();
        }

        assert!(player.is_finished());
        assert_eq!(
            player.into_outcome(),
            PlayerOutcome::Completed(CompletionReport {
                duration_seconds: 30
            })
        );
    }

    #[test]
    fn test_ticks_after_finish_change_nothing() {
        let (_tx, rx) = mpsc::channel();
        let mut player = PlayerApp::new("W".to_string(), sample_session(), rx);

        player.exit();
        let snap = player.snapshot();
        player.on_tick();
        player.skip();
        assert_eq!(player.snapshot(), snap);
        assert_eq!(player.into_outcome(), PlayerOutcome::Exited);
    }
}

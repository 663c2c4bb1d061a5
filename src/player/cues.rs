//! Audio and announcement cues.
//!
//! The session controller reports phase transitions to a [`CueDispatcher`],
//! which forwards them to a [`CueSink`]. Sinks are pure side-effect targets:
//! nothing they do or fail to do ever flows back into the timer. A sink must
//! not block; the shipped audio sink hands work to a dedicated thread.

use thiserror::Error;

/// A single cue tied to a phase transition or countdown moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    /// The session just started; preparation countdown is running.
    GetReady {
        /// Name of the first exercise.
        exercise: String,
    },
    /// Preparation finished; the first work bout begins.
    Go,
    /// A work bout finished; rest begins.
    Rest {
        /// Name of the upcoming exercise, if any.
        next: Option<String>,
    },
    /// Rest finished; the next work bout begins.
    ExerciseStart {
        /// Name of the exercise now starting.
        exercise: String,
    },
    /// The final work bout finished.
    Complete,
    /// An audible pip in the last seconds before a transition.
    CountdownPulse,
}

impl Cue {
    /// The spoken/announced line for this cue, if it has one.
    #[must_use]
    pub fn phrase(&self) -> Option<String> {
        match self {
            Self::GetReady { exercise } => Some(format!("Get ready for {exercise}")),
            Self::Go => Some("Go!".to_string()),
            Self::Rest { next: Some(name) } => Some(format!("Rest. Next up, {name}")),
            Self::Rest { next: None } => Some("Rest.".to_string()),
            Self::ExerciseStart { exercise } => Some(exercise.clone()),
            Self::Complete => Some("Workout complete! Great job.".to_string()),
            Self::CountdownPulse => None,
        }
    }
}

/// Error from a cue sink backend.
#[derive(Debug, Error)]
pub enum CueError {
    /// The audio/announce backend is unavailable or rejected the cue.
    #[error("cue backend unavailable: {0}")]
    Backend(String),
}

/// A destination for cues.
///
/// Implementations must return quickly; anything slow (audio devices,
/// channels to a UI) belongs on another thread.
#[cfg_attr(test, mockall::automock)]
pub trait CueSink: Send {
    /// Deliver one cue.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the cue. The dispatcher
    /// swallows and logs it; it never reaches the session controller.
    fn emit(&self, cue: &Cue) -> Result<(), CueError>;
}

/// A sink that discards every cue.
pub struct NullCueSink;

impl CueSink for NullCueSink {
    fn emit(&self, _cue: &Cue) -> Result<(), CueError> {
        Ok(())
    }
}

/// Dispatches cues to a sink, gated by the sound toggle.
pub struct CueDispatcher {
    sink: Box<dyn CueSink>,
    sound_enabled: bool,
}

impl CueDispatcher {
    /// Create a dispatcher with sound enabled.
    #[must_use]
    pub fn new(sink: Box<dyn CueSink>) -> Self {
        Self {
            sink,
            sound_enabled: true,
        }
    }

    /// A dispatcher that never emits anything.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            sink: Box::new(NullCueSink),
            sound_enabled: false,
        }
    }

    /// Whether cues are currently audible.
    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Toggle the sound gate. Timing is unaffected.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Announce the preparation phase for the first exercise.
    pub fn get_ready(&self, exercise: &str) {
        self.dispatch(Cue::GetReady {
            exercise: exercise.to_string(),
        });
    }

    /// Announce the start of the first work bout.
    pub fn go(&self) {
        self.dispatch(Cue::Go);
    }

    /// Announce a rest phase and the upcoming exercise.
    pub fn rest(&self, next: Option<&str>) {
        self.dispatch(Cue::Rest {
            next: next.map(ToString::to_string),
        });
    }

    /// Announce a work bout after a rest.
    pub fn exercise_start(&self, exercise: &str) {
        self.dispatch(Cue::ExerciseStart {
            exercise: exercise.to_string(),
        });
    }

    /// Announce workout completion.
    pub fn complete(&self) {
        self.dispatch(Cue::Complete);
    }

    /// Fire an audible countdown pip. Purely cosmetic.
    pub fn countdown_pulse(&self) {
        self.dispatch(Cue::CountdownPulse);
    }

    fn dispatch(&self, cue: Cue) {
        if !self.sound_enabled {
            return;
        }
        if let Err(e) = self.sink.emit(&cue) {
            // A missed cue is the worst case; the timer must not care.
            log::warn!("dropped cue {cue:?}: {e}");
        }
    }
}

/// A sink that records every cue it receives, for assertions in tests.
#[cfg(test)]
pub struct RecordingCueSink {
    cues: std::sync::Arc<std::sync::Mutex<Vec<Cue>>>,
}

#[cfg(test)]
impl RecordingCueSink {
    pub fn new() -> (Self, std::sync::Arc<std::sync::Mutex<Vec<Cue>>>) {
        let cues = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        (
            Self {
                cues: std::sync::Arc::clone(&cues),
            },
            cues,
        )
    }
}

#[cfg(test)]
impl CueSink for RecordingCueSink {
    fn emit(&self, cue: &Cue) -> Result<(), CueError> {
        self.cues.lock().unwrap().push(cue.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases() {
        let cue = Cue::GetReady {
            exercise: "Plank".to_string(),
        };
        assert_eq!(cue.phrase().unwrap(), "Get ready for Plank");

        let cue = Cue::Rest {
            next: Some("Squats".to_string()),
        };
        assert_eq!(cue.phrase().unwrap(), "Rest. Next up, Squats");

        assert!(Cue::CountdownPulse.phrase().is_none());
    }

    #[test]
    fn test_sound_gate() {
        let (sink, cues) = RecordingCueSink::new();
        let mut dispatcher = CueDispatcher::new(Box::new(sink));

        dispatcher.go();
        dispatcher.set_sound_enabled(false);
        dispatcher.complete();
        dispatcher.set_sound_enabled(true);
        dispatcher.countdown_pulse();

        let recorded = cues.lock().unwrap();
        assert_eq!(*recorded, vec![Cue::Go, Cue::CountdownPulse]);
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let mut mock = MockCueSink::new();
        mock.expect_emit()
            .returning(|_| Err(CueError::Backend("no audio device".to_string())));

        let dispatcher = CueDispatcher::new(Box::new(mock));
        // Must not panic or propagate.
        dispatcher.go();
        dispatcher.complete();
    }
}

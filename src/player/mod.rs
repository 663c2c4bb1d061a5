//! The workout player core.
//!
//! A session is one playback of a workout: a repeating one-second countdown
//! that moves through preparation, work, and rest phases across the
//! exercise circuit. The pieces are kept deliberately separate:
//!
//! - [`policy`] maps exercises and intensity tiers to phase durations
//! - [`session`] holds the state machine driven by tick/skip/pause/exit
//! - [`cues`] turns phase transitions into fire-and-forget audio/announce
//!   side effects
//! - [`clock`] is the cancellable one-second tick source

pub mod clock;
pub mod cues;
pub mod policy;
pub mod session;

pub use clock::TickSource;
pub use cues::{Cue, CueDispatcher, CueSink, NullCueSink};
pub use session::{CompletionReport, Phase, SessionSnapshot, WorkoutSession};

//! Audio tone playback for workout cues.
//!
//! rodio's output stream and sink are not `Send`, so they live on a
//! dedicated thread that receives commands over a channel. Sends return
//! immediately; a slow or missing audio device can never stall the tick
//! loop. The thread and device are created lazily on the first tone.

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::player::cues::{Cue, CueError, CueSink};

/// Playback volume for generated tones.
const TONE_VOLUME: f32 = 0.3;

/// The distinct sounds the player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Short countdown pip.
    Pulse,
    /// Work-bout start tone.
    Start,
    /// Announcement chime (get ready / rest).
    Chime,
    /// Completion arpeggio.
    Finish,
}

enum AudioCommand {
    Play(Tone),
}

/// Handle to the audio thread.
#[derive(Clone)]
pub struct AudioEngine {
    tx: Arc<Mutex<Option<Sender<AudioCommand>>>>,
}

impl AudioEngine {
    /// Create a handle. No thread or device is touched yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tx: Arc::new(Mutex::new(None)),
        }
    }

    /// Queue a tone for playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio thread cannot be spawned or has died.
    pub fn play(&self, tone: Tone) -> Result<(), CueError> {
        let tx = self.ensure_thread()?;
        tx.send(AudioCommand::Play(tone))
            .map_err(|e| CueError::Backend(e.to_string()))
    }

    fn ensure_thread(&self) -> Result<Sender<AudioCommand>, CueError> {
        let mut guard = self
            .tx
            .lock()
            .map_err(|e| CueError::Backend(e.to_string()))?;

        if let Some(tx) = guard.as_ref() {
            return Ok(tx.clone());
        }

        let (tx, rx) = mpsc::channel::<AudioCommand>();

        // The non-Send rodio objects stay on this thread for its lifetime.
        thread::Builder::new()
            .name("audio-cues".to_string())
            .spawn(move || {
                let mut output: Option<(OutputStream, Sink)> = None;

                while let Ok(cmd) = rx.recv() {
                    match cmd {
                        AudioCommand::Play(tone) => {
                            if output.is_none() {
                                match open_sink() {
                                    Ok(pair) => output = Some(pair),
                                    Err(e) => {
                                        log::debug!("no audio output: {e}");
                                        continue;
                                    }
                                }
                            }
                            if let Some((_, ref sink)) = output {
                                append_tone(sink, tone);
                            }
                        }
                    }
                }
            })
            .map_err(|e| CueError::Backend(e.to_string()))?;

        let tx_clone = tx.clone();
        *guard = Some(tx);
        Ok(tx_clone)
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn open_sink() -> Result<(OutputStream, Sink), String> {
    let (stream, handle) = OutputStream::try_default()
        .map_err(|e| format!("failed to open audio output stream: {e}"))?;
    let sink = Sink::try_new(&handle).map_err(|e| format!("failed to create audio sink: {e}"))?;
    Ok((stream, sink))
}

fn append_tone(sink: &Sink, tone: Tone) {
    match tone {
        Tone::Pulse => beep(sink, 600.0, 100),
        Tone::Start => beep(sink, 1200.0, 400),
        Tone::Chime => beep(sink, 880.0, 150),
        Tone::Finish => {
            // A little arpeggio: C5 E5 G5 C6.
            for freq in [523.25, 659.25, 783.99, 1046.50] {
                beep(sink, freq, 200);
            }
        }
    }
}

fn beep(sink: &Sink, frequency: f32, millis: u64) {
    let source = SineWave::new(frequency)
        .take_duration(Duration::from_millis(millis))
        .amplify(TONE_VOLUME);
    sink.append(source);
}

/// A [`CueSink`] that renders cues as tones through the audio engine.
pub struct AudioCueSink {
    engine: AudioEngine,
}

impl AudioCueSink {
    /// Wrap an engine handle.
    #[must_use]
    pub const fn new(engine: AudioEngine) -> Self {
        Self { engine }
    }
}

impl CueSink for AudioCueSink {
    fn emit(&self, cue: &Cue) -> Result<(), CueError> {
        let tone = match cue {
            Cue::GetReady { .. } | Cue::Rest { .. } => Tone::Chime,
            Cue::Go | Cue::ExerciseStart { .. } => Tone::Start,
            Cue::Complete => Tone::Finish,
            Cue::CountdownPulse => Tone::Pulse,
        };
        self.engine.play(tone)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_handle_is_cheap_to_create() {
        // Creating a handle must not touch any audio device.
        let engine = AudioEngine::new();
        let _clone = engine.clone();
    }
}

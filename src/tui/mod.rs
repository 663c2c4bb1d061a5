//! The workout player screen.
//!
//! A full-screen terminal UI that drives one workout session: countdown,
//! phase gauge, exercise progress, and the coach line. Built with ratatui
//! and crossterm.

mod app;
mod event;
mod ui;

pub use app::{PlayerApp, PlayerOutcome};

use std::io;
use std::sync::mpsc;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::audio::{AudioCueSink, AudioEngine};
use crate::catalog::Workout;
use crate::error::RepkitError;
use crate::player::cues::CueDispatcher;
use crate::player::{TickSource, WorkoutSession};

/// Run the player for one workout.
///
/// Sets up the terminal, drives the session until it completes or the user
/// exits, and always restores the terminal and stops the clock on the way
/// out.
///
/// # Errors
///
/// Returns an error if the workout is invalid or the terminal cannot be
/// driven.
pub fn run_player(workout: &Workout, sound: bool) -> Result<PlayerOutcome, RepkitError> {
    // Build the session before touching the terminal so an invalid workout
    // fails with a normal error message.
    let (cue_tx, cue_rx) = mpsc::channel();
    let sink = app::AppCueSink::new(AudioCueSink::new(AudioEngine::new()), cue_tx);
    let mut dispatcher = CueDispatcher::new(Box::new(sink));
    dispatcher.set_sound_enabled(sound);

    let session = WorkoutSession::new(workout, dispatcher)?;
    let (mut clock, tick_rx) = TickSource::spawn()?;

    // Setup terminal
    enable_raw_mode().map_err(|e| RepkitError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| RepkitError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| RepkitError::Config(format!("Failed to create terminal: {e}")))?;

    let mut player = PlayerApp::new(workout.title.clone(), session, cue_rx);
    let result = run_app(&mut terminal, &mut player, &tick_rx);

    // Exactly one clock per session; stop it before the session is dropped.
    clock.stop();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result.map(|()| player.into_outcome())
}

/// Run the main player loop.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    player: &mut PlayerApp,
    tick_rx: &mpsc::Receiver<()>,
) -> Result<(), RepkitError> {
    loop {
        player.drain_cues();

        terminal
            .draw(|frame| ui::render(frame, player))
            .map_err(|e| RepkitError::Config(format!("Failed to draw: {e}")))?;

        // Deliver every tick that elapsed since the last render.
        while tick_rx.try_recv().is_ok() {
            player.on_tick();
        }

        if player.is_finished() {
            return Ok(());
        }

        if let Some(action) = event::handle_events()? {
            match action {
                event::Action::TogglePause => player.toggle_pause(),
                event::Action::Skip => player.skip(),
                event::Action::ToggleSound => player.toggle_sound(),
                event::Action::Exit => player.exit(),
            }
        }

        if player.is_finished() {
            return Ok(());
        }
    }
}

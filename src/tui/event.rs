//! Event handling for the player.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::RepkitError;

/// Action to take after handling an event.
pub enum Action {
    /// Pause or resume the countdown.
    TogglePause,
    /// Jump to the next phase.
    Skip,
    /// Toggle audio cues.
    ToggleSound,
    /// Leave the workout.
    Exit,
}

/// Handle terminal events.
///
/// Polls briefly so the render loop keeps spinning between key presses.
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, RepkitError> {
    if event::poll(Duration::from_millis(50))
        .map_err(|e| RepkitError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| RepkitError::Config(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Exit));
            }

            match key.code {
                KeyCode::Char(' ') | KeyCode::Char('p') => {
                    return Ok(Some(Action::TogglePause));
                }
                KeyCode::Char('s') | KeyCode::Char('n') | KeyCode::Right => {
                    return Ok(Some(Action::Skip));
                }
                KeyCode::Char('m') => {
                    return Ok(Some(Action::ToggleSound));
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    return Ok(Some(Action::Exit));
                }
                _ => {}
            }
        }
    }

    Ok(None)
}

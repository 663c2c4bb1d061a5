//! The one-second tick source.
//!
//! A `TickSource` owns a dedicated thread that sends one tick per second
//! over an mpsc channel. The player drains the channel between renders and
//! feeds each tick to the session. Stopping is explicit and idempotent, and
//! `Drop` stops the thread too, so tearing down the player can never leave
//! a clock ticking a discarded session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::RepkitError;

/// How often the tick thread re-checks the stop flag while waiting.
const STOP_POLL: Duration = Duration::from_millis(25);

/// A cancellable repeating one-second tick source.
pub struct TickSource {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickSource {
    /// Spawn a tick thread with one-second granularity.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn() -> Result<(Self, Receiver<()>), RepkitError> {
        Self::with_period(Duration::from_secs(1))
    }

    /// Spawn a tick thread with a custom period (shorter in tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn with_period(period: Duration) -> Result<(Self, Receiver<()>), RepkitError> {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("session-clock".to_string())
            .spawn(move || {
                let mut next = Instant::now() + period;
                loop {
                    while Instant::now() < next {
                        if flag.load(Ordering::Relaxed) {
                            return;
                        }
                        thread::sleep(STOP_POLL.min(period));
                    }
                    if flag.load(Ordering::Relaxed) {
                        return;
                    }
                    // Receiver gone means the session was discarded.
                    if tx.send(()).is_err() {
                        return;
                    }
                    next += period;
                }
            })
            .map_err(RepkitError::Io)?;

        Ok((
            Self {
                stop,
                handle: Some(handle),
            },
            rx,
        ))
    }

    /// Stop the tick thread. Safe to call more than once.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::mpsc::RecvTimeoutError;

    #[test]
    fn test_ticks_arrive() {
        let (mut source, rx) = TickSource::with_period(Duration::from_millis(10)).unwrap();

        for _ in 0..3 {
            rx.recv_timeout(Duration::from_secs(1)).unwrap();
        }

        source.stop();
    }

    #[test]
    fn test_stop_cancels_pending_ticks() {
        let (mut source, rx) = TickSource::with_period(Duration::from_millis(10)).unwrap();
        rx.recv_timeout(Duration::from_secs(1)).unwrap();

        source.stop();
        // Drain anything already in flight, then the channel must close.
        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(()) => {}
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => panic!("clock thread still alive after stop"),
            }
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut source, _rx) = TickSource::with_period(Duration::from_millis(10)).unwrap();
        source.stop();
        source.stop();
    }

    #[test]
    fn test_dropping_receiver_ends_thread() {
        let (mut source, rx) = TickSource::with_period(Duration::from_millis(10)).unwrap();
        drop(rx);
        // stop() joins; this would hang forever if the thread ignored the
        // closed channel.
        source.stop();
    }
}

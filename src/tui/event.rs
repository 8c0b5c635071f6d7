//! Event handling for the TUI
//!
//! A background thread polls crossterm and forwards events over a channel,
//! with a tick whenever nothing happened for `tick_rate`.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use tracing::error;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Receives events from the polling thread
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let polled = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(e) => Some(e),
                        Err(e) => {
                            error!(error = %e, "failed to read terminal event");
                            return;
                        }
                    },
                    Ok(false) => None,
                    Err(e) => {
                        error!(error = %e, "failed to poll terminal events");
                        return;
                    }
                };

                let forwarded = match polled {
                    Some(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                    Some(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                    _ => None,
                };
                if let Some(e) = forwarded {
                    if sender.send(e).is_err() {
                        return;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { receiver }
    }

    /// Block until the next event; fails once the polling thread has stopped
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

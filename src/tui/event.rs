//! Event handling for the TUI
//!
//! Terminal events are read on a helper thread and forwarded over a channel,
//! so the main loop is the only place screen state changes.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// The terminal could not be read; the reader thread has stopped
    Failed(String),
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                let polled = event::poll(timeout).and_then(|ready| {
                    if ready {
                        event::read().map(Some)
                    } else {
                        Ok(None)
                    }
                });

                let forwarded = match polled {
                    Ok(Some(CrosstermEvent::Key(key))) => Some(Event::Key(key)),
                    Ok(Some(CrosstermEvent::Mouse(mouse))) => Some(Event::Mouse(mouse)),
                    Ok(Some(CrosstermEvent::Resize(width, height))) => {
                        Some(Event::Resize(width, height))
                    }
                    Ok(_) => None,
                    Err(e) => {
                        let _ = sender.send(Event::Failed(e.to_string()));
                        return;
                    }
                };

                if let Some(event) = forwarded {
                    if sender.send(event).is_err() {
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

        Self { receiver, handler }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

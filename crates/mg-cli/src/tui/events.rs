//! Terminal input, delivered as a stream of [`Event`]s.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    /// No input arrived within one tick.
    Tick,
    Key(KeyEvent),
    /// The terminal was resized; the next draw picks up the size.
    Resize,
}

/// Reads crossterm events on a blocking thread and forwards them.
///
/// The reader stops at the first send after the handler is dropped.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::task::spawn_blocking(move || {
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(CrosstermEvent::Resize(..)) => Event::Resize,
                        Ok(_) => continue,
                        Err(error) => {
                            tracing::error!(%error, "terminal event read failed");
                            break;
                        }
                    }
                } else {
                    Event::Tick
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> anyhow::Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("terminal event channel closed"))
    }
}

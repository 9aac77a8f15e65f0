//! Rotating status lines shown while an analysis is in flight.

use std::time::{Duration, Instant};

pub const PENDING_TITLE: &str = "Deep Breath In...";

pub const STATUS_MESSAGES: [&str; 5] = [
    "MindGuard is analyzing your inputs...",
    "Calibrating stress scoring based on your category...",
    "Gathering supportive coping suggestions...",
    "Searching for content to uplift your mood...",
    "Finalizing your personalized dashboard...",
];

/// The message for a wait of `elapsed`, advancing every `interval`.
#[must_use]
pub fn message_at(elapsed: Duration, interval: Duration) -> &'static str {
    let step = elapsed
        .as_millis()
        .checked_div(interval.as_millis())
        .unwrap_or(0);
    let index = usize::try_from(step % STATUS_MESSAGES.len() as u128).unwrap_or(0);
    STATUS_MESSAGES[index]
}

/// Cosmetic wait indicator. Carries no information about real progress.
#[derive(Debug, Clone, Copy)]
pub struct StatusTicker {
    started: Instant,
    interval: Duration,
}

impl StatusTicker {
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        Self {
            started: Instant::now(),
            interval,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        message_at(self.started.elapsed(), self.interval)
    }
}

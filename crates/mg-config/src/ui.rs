//! Terminal UI timings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default event-loop tick in milliseconds.
const fn default_tick_rate_ms() -> u64 {
    250
}

/// Default rotation interval for the pending-screen status line.
const fn default_status_interval_ms() -> u64 {
    2500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_status_interval_ms")]
    pub status_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            status_interval_ms: default_status_interval_ms(),
        }
    }
}

impl UiConfig {
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub const fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }
}

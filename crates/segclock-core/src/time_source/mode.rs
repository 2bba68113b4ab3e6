use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Read-only wall clock.
    Clock,
    Stopwatch,
    /// Counts up exactly like [`DisplayMode::Stopwatch`].
    Timer,
}

impl DisplayMode {
    pub fn title(self) -> &'static str {
        match self {
            DisplayMode::Clock => "Digital Clock",
            DisplayMode::Stopwatch => "Digital Stopwatch",
            DisplayMode::Timer => "Digital Timer",
        }
    }

    /// Whether the mode carries a start/stop/reset state machine.
    pub fn is_stateful(self) -> bool {
        !matches!(self, DisplayMode::Clock)
    }

    /// Redraw cadence when the configuration does not override it.
    pub fn default_tick_interval(self) -> Duration {
        match self {
            DisplayMode::Clock => Duration::from_millis(250),
            DisplayMode::Stopwatch | DisplayMode::Timer => Duration::from_millis(1000),
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DisplayMode::Clock => "clock",
            DisplayMode::Stopwatch => "stopwatch",
            DisplayMode::Timer => "timer",
        };
        f.write_str(name)
    }
}

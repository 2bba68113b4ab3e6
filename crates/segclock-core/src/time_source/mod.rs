mod format;
mod mode;
mod state;

pub use format::{format_hms, format_wall_clock, CANONICAL_TEXT};
pub use mode::DisplayMode;
pub use state::TimerState;

use chrono::{DateTime, TimeZone, Utc};

use crate::events::Event;

/// Text to display for `mode` at `now`.
///
/// Clock mode ignores `state` and formats `now` in its own timezone;
/// Stopwatch and Timer format the whole seconds elapsed.
pub fn current_text<Tz: TimeZone>(mode: DisplayMode, state: &TimerState, now: &DateTime<Tz>) -> String {
    match mode {
        DisplayMode::Clock => format_wall_clock(now),
        DisplayMode::Stopwatch | DisplayMode::Timer => {
            format_hms(state.elapsed_secs(now.with_timezone(&Utc)))
        }
    }
}

/// A display mode together with its count-up state.
///
/// Commands are no-ops in Clock mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSource {
    mode: DisplayMode,
    state: TimerState,
}

impl TimeSource {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            state: TimerState::new(),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn current_text<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String {
        current_text(self.mode, &self.state, now)
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.state.tick(now)
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.stateful()?.start(now)
    }

    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.stateful()?.stop(now)
    }

    pub fn toggle(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.stateful()?.toggle(now)
    }

    pub fn reset(&mut self, now: DateTime<Utc>) -> Option<Event> {
        self.stateful()?.reset(now)
    }

    fn stateful(&mut self) -> Option<&mut TimerState> {
        self.mode.is_stateful().then_some(&mut self.state)
    }
}

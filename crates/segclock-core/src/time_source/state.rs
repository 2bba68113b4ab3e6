//! Count-up state machine shared by the stopwatch and timer.
//!
//! Elapsed time is sampled from wall-clock deltas. The caller drives the
//! display by calling `tick()` periodically, but ticking never mutates the
//! state, so a missed or late tick cannot lose or gain time.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped(acc) --start--> Running(acc, now)
//! Running(acc, t0) --stop--> Stopped(acc + (now - t0))
//! *            --reset--> Stopped(0)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TimerState {
    Stopped {
        accumulated_ms: u64,
    },
    Running {
        /// Frozen baseline from earlier runs.
        accumulated_ms: u64,
        /// Instant accumulation last resumed.
        started_at: DateTime<Utc>,
    },
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::Stopped { accumulated_ms: 0 }
    }
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn running(&self) -> bool {
        matches!(self, TimerState::Running { .. })
    }

    pub fn accumulated_ms(&self) -> u64 {
        match *self {
            TimerState::Stopped { accumulated_ms } | TimerState::Running { accumulated_ms, .. } => {
                accumulated_ms
            }
        }
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match *self {
            TimerState::Running { started_at, .. } => Some(started_at),
            TimerState::Stopped { .. } => None,
        }
    }

    /// Total elapsed milliseconds as of `now`.
    ///
    /// A `now` earlier than the start instant (clock stepped backwards)
    /// contributes nothing rather than underflowing.
    pub fn elapsed_ms(&self, now: DateTime<Utc>) -> u64 {
        match *self {
            TimerState::Stopped { accumulated_ms } => accumulated_ms,
            TimerState::Running {
                accumulated_ms,
                started_at,
            } => accumulated_ms.saturating_add(span_ms(started_at, now)),
        }
    }

    /// Whole elapsed seconds as of `now`, truncated.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        self.elapsed_ms(now) / 1000
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Resume accumulation. Returns `None` if already running.
    pub fn start(&mut self, now: DateTime<Utc>) -> Option<Event> {
        match *self {
            TimerState::Running { .. } => None,
            TimerState::Stopped { accumulated_ms } => {
                *self = TimerState::Running {
                    accumulated_ms,
                    started_at: now,
                };
                Some(Event::Started {
                    accumulated_ms,
                    at: now,
                })
            }
        }
    }

    /// Fold the running span into the baseline. Returns `None` if stopped.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<Event> {
        match *self {
            TimerState::Stopped { .. } => None,
            TimerState::Running { .. } => {
                let accumulated_ms = self.elapsed_ms(now);
                *self = TimerState::Stopped { accumulated_ms };
                Some(Event::Stopped {
                    accumulated_ms,
                    at: now,
                })
            }
        }
    }

    /// Start if stopped, stop if running.
    pub fn toggle(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.running() {
            self.stop(now)
        } else {
            self.start(now)
        }
    }

    pub fn reset(&mut self, now: DateTime<Utc>) -> Option<Event> {
        *self = TimerState::default();
        Some(Event::Reset { at: now })
    }

    /// Called on every display tick. Elapsed time is derived on read, so
    /// there is nothing to advance.
    pub fn tick(&mut self, _now: DateTime<Utc>) -> Option<Event> {
        None
    }
}

fn span_ms(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    u64::try_from((to - from).num_milliseconds()).unwrap_or(0)
}

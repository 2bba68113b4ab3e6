use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::view::ViewAction;

/// Every state change in the system produces an Event.
/// The presentation layer logs them; nothing else consumes them yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Started {
        accumulated_ms: u64,
        at: DateTime<Utc>,
    },
    Stopped {
        /// Baseline after folding the running span in.
        accumulated_ms: u64,
        at: DateTime<Utc>,
    },
    Reset {
        at: DateTime<Utc>,
    },
    ViewChanged {
        action: ViewAction,
        at: DateTime<Utc>,
    },
}

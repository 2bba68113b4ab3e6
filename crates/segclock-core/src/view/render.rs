use serde::{Deserialize, Serialize};

use super::geometry::{window_size, TextExtent, TextMeasure};
use super::ViewState;
use crate::time_source::TimerState;

/// Run state of a stopwatch or timer as the display shows it. `Stopped`
/// means halted with time accumulated; a zero count is `Reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStatus {
    Running,
    Stopped,
    Reset,
}

impl CounterStatus {
    pub fn of(state: &TimerState) -> Self {
        if state.running() {
            Self::Running
        } else if state.accumulated_ms() > 0 {
            Self::Stopped
        } else {
            Self::Reset
        }
    }

    /// Indicator colour as RGB.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Running => (0, 255, 0),
            Self::Stopped => (255, 0, 0),
            Self::Reset => (255, 255, 255),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Reset => "reset",
        }
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub text: String,
    pub foreground: String,
    pub background: String,
    pub font_size: u32,
    pub pinned: bool,
    pub fullscreen: bool,
    pub menubar_visible: bool,
    /// Requested window size. `None` means leave the window alone.
    pub window_size: Option<TextExtent>,
    /// `None` in clock mode.
    pub counter: Option<CounterStatus>,
}

pub fn render(view: &ViewState, text: impl Into<String>, measure: &dyn TextMeasure) -> Frame {
    Frame {
        text: text.into(),
        foreground: view.foreground.clone(),
        background: view.background.clone(),
        font_size: view.font_size,
        pinned: view.pinned,
        fullscreen: view.fullscreen,
        menubar_visible: view.menubar_visible,
        window_size: window_size(view, measure),
        counter: None,
    }
}

impl Frame {
    pub fn with_counter(self, counter: CounterStatus) -> Self {
        Self {
            counter: Some(counter),
            ..self
        }
    }
}

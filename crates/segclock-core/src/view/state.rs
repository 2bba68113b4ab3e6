//! Presentation state and its update reducer.
//!
//! `ViewState` is never mutated in place by the shell; every change goes
//! through [`reduce`], which returns the next state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub foreground: String,
    pub background: String,
    pub font_size: u32,
    pub default_font_size: u32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    /// Window stays on top of others.
    pub pinned: bool,
    pub fullscreen: bool,
    pub menubar_visible: bool,
}

impl ViewState {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            foreground: display.foreground.clone(),
            background: display.background.clone(),
            font_size: display.default_font_size,
            default_font_size: display.default_font_size,
            min_font_size: display.min_font_size,
            max_font_size: display.max_font_size,
            pinned: false,
            fullscreen: false,
            menubar_visible: true,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ViewAction {
    TogglePin,
    ToggleFullscreen,
    ToggleMenubar,
    ChangeFontSize { delta: i32 },
    ResetFontSize,
    SetForeground { color: String },
    SetBackground { color: String },
    ApplyTheme { foreground: String, background: String },
    SwapColours,
    RandomColours { foreground: String, background: String },
}

/// Next view state after `action`.
///
/// A font size change that would leave `min_font_size..=max_font_size` is
/// rejected outright rather than clamped.
pub fn reduce(state: &ViewState, action: &ViewAction) -> ViewState {
    let mut next = state.clone();
    match action {
        ViewAction::TogglePin => next.pinned = !state.pinned,
        ViewAction::ToggleFullscreen => next.fullscreen = !state.fullscreen,
        ViewAction::ToggleMenubar => next.menubar_visible = !state.menubar_visible,
        ViewAction::ChangeFontSize { delta } => {
            let candidate = i64::from(state.font_size) + i64::from(*delta);
            let bounds = i64::from(state.min_font_size)..=i64::from(state.max_font_size);
            if bounds.contains(&candidate) {
                // In range, so it fits back into u32.
                next.font_size = candidate as u32;
            }
        }
        ViewAction::ResetFontSize => next.font_size = state.default_font_size,
        ViewAction::SetForeground { color } => next.foreground = color.clone(),
        ViewAction::SetBackground { color } => next.background = color.clone(),
        ViewAction::ApplyTheme {
            foreground,
            background,
        }
        | ViewAction::RandomColours {
            foreground,
            background,
        } => {
            next.foreground = foreground.clone();
            next.background = background.clone();
        }
        ViewAction::SwapColours => {
            next.foreground = state.background.clone();
            next.background = state.foreground.clone();
        }
    }
    next
}

/// Two random `#rrggbb` colors, foreground first.
pub fn random_colours<R: Rng>(rng: &mut R) -> (String, String) {
    let mut hex = || format!("#{:06x}", rng.gen_range(0..=0xFF_FF_FFu32));
    let foreground = hex();
    let background = hex();
    (foreground, background)
}

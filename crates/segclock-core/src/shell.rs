//! Generic display shell.
//!
//! One shell serves all three display modes. The event loop feeds it
//! [`ShellEvent`]s one at a time and asks for a [`Frame`] after each; the
//! shell never blocks and never spawns anything.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::Config;
use crate::events::Event;
use crate::font::FontSource;
use crate::theme::ThemeCatalog;
use crate::time_source::{DisplayMode, TimeSource};
use crate::view::{reduce, render, CounterStatus, Frame, TextMeasure, ViewAction, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Periodic redraw trigger.
    Tick,
    StartStop,
    Reset,
    View(ViewAction),
    /// Apply a theme from the catalog by name.
    Theme(String),
}

#[derive(Debug, Clone)]
pub struct Shell {
    source: TimeSource,
    view: ViewState,
    themes: ThemeCatalog,
    tick_interval: Duration,
    font: FontSource,
    font_step: u32,
}

impl Shell {
    pub fn new(mode: DisplayMode, view: ViewState, themes: ThemeCatalog) -> Self {
        Self {
            source: TimeSource::new(mode),
            view,
            themes,
            tick_interval: mode.default_tick_interval(),
            font: FontSource::Default,
            font_step: 5,
        }
    }

    /// Build a shell from loaded configuration. Resolves the font, which may
    /// log a fallback warning.
    pub fn from_config(mode: DisplayMode, config: &Config, themes: ThemeCatalog) -> Self {
        Self {
            source: TimeSource::new(mode),
            view: ViewState::from_config(&config.display),
            themes,
            tick_interval: config.tick_interval(mode),
            font: FontSource::resolve(config.display.font_path.as_deref()),
            font_step: config.display.font_step,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.source.mode()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn source(&self) -> &TimeSource {
        &self.source
    }

    pub fn themes(&self) -> &ThemeCatalog {
        &self.themes
    }

    pub fn font(&self) -> &FontSource {
        &self.font
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Font size increment used by the grow/shrink commands.
    pub fn font_step(&self) -> u32 {
        self.font_step
    }

    /// Apply one event. Returns the resulting state change, if any.
    pub fn handle(&mut self, event: ShellEvent, now: DateTime<Utc>) -> Option<Event> {
        match event {
            ShellEvent::Tick => self.source.tick(now),
            ShellEvent::StartStop => self.source.toggle(now),
            ShellEvent::Reset => self.source.reset(now),
            ShellEvent::View(action) => self.apply_view(action, now),
            ShellEvent::Theme(name) => {
                let Some(theme) = self.themes.find(&name) else {
                    tracing::warn!(theme = %name, "unknown theme");
                    return None;
                };
                let action = ViewAction::ApplyTheme {
                    foreground: theme.foreground_color.clone(),
                    background: theme.background_color.clone(),
                };
                self.apply_view(action, now)
            }
        }
    }

    /// Current frame. `now` is the wall-clock instant in the display timezone.
    pub fn frame<Tz: TimeZone>(&self, now: &DateTime<Tz>, measure: &dyn TextMeasure) -> Frame {
        let frame = render(&self.view, self.source.current_text(now), measure);
        if self.mode().is_stateful() {
            frame.with_counter(CounterStatus::of(self.source.state()))
        } else {
            frame
        }
    }

    pub fn about_text(&self) -> String {
        format!(
            "{} {}\nA seven-segment style {} for the terminal.",
            self.mode().title(),
            env!("CARGO_PKG_VERSION"),
            self.mode()
        )
    }

    fn apply_view(&mut self, action: ViewAction, now: DateTime<Utc>) -> Option<Event> {
        let next = reduce(&self.view, &action);
        if next == self.view {
            tracing::debug!(?action, "view action had no effect");
            return None;
        }
        self.view = next;
        Some(Event::ViewChanged { action, at: now })
    }
}

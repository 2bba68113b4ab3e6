//! # segclock Core Library
//!
//! Core logic for a seven-segment style clock, stopwatch and timer. The
//! presentation layer (see `segclock-cli`) owns the event loop and the
//! drawing; everything here is pure and runs to completion on each call.
//!
//! ## Architecture
//!
//! - **Time Source**: formats wall-clock instants and elapsed durations as
//!   `HH:MM:SS`, and drives the Stopped/Running count-up state machine
//! - **View**: immutable `ViewState`, an update reducer and a render function
//! - **Shell**: one display shell parameterised by [`DisplayMode`]
//! - **Config / Themes**: TOML preferences and a read-only JSON theme catalog
//!
//! ## Key Components
//!
//! - [`TimeSource`]: mode plus count-up state
//! - [`Shell`]: event reducer used by the event loop
//! - [`Config`]: application configuration
//! - [`ThemeCatalog`]: named foreground/background pairs

pub mod config;
pub mod error;
pub mod events;
pub mod font;
pub mod shell;
pub mod theme;
pub mod time_source;
pub mod view;

pub use config::Config;
pub use error::ConfigLoadError;
pub use events::Event;
pub use font::FontSource;
pub use shell::{Shell, ShellEvent};
pub use theme::{Theme, ThemeCatalog, ThemeCategory};
pub use time_source::{current_text, format_hms, format_wall_clock, DisplayMode, TimeSource, TimerState};
pub use view::{CounterStatus, Frame, ViewAction, ViewState};

//! TOML-based application configuration.
//!
//! Stores display preferences:
//! - Default colors and font size bounds
//! - Redraw cadence per mode
//! - Optional custom font and theme catalog paths
//!
//! Configuration is read from `~/.config/segclock/config.toml`. A missing file
//! means defaults; nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigLoadError;
use crate::time_source::DisplayMode;

/// Display appearance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_font_size")]
    pub default_font_size: u32,
    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,
    #[serde(default = "default_max_font_size")]
    pub max_font_size: u32,
    /// Increment applied by the grow/shrink commands.
    #[serde(default = "default_font_step")]
    pub font_step: u32,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
    /// Seven-segment font file. Falls back to the default font when unusable.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

/// Redraw cadence configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickConfig {
    #[serde(default = "default_clock_refresh_ms")]
    pub clock_refresh_ms: u64,
    /// Stopwatch and timer redraw period.
    #[serde(default = "default_counter_tick_ms")]
    pub counter_tick_ms: u64,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ticks: TickConfig,
    /// Theme catalog override. The built-in catalog is used when unset.
    #[serde(default)]
    pub themes_path: Option<PathBuf>,
}

// Default functions
fn default_font_size() -> u32 {
    200
}
fn default_min_font_size() -> u32 {
    50
}
fn default_max_font_size() -> u32 {
    480
}
fn default_font_step() -> u32 {
    5
}
fn default_foreground() -> String {
    "white".into()
}
fn default_background() -> String {
    "black".into()
}
fn default_clock_refresh_ms() -> u64 {
    250
}
fn default_counter_tick_ms() -> u64 {
    1000
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_font_size: default_font_size(),
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            font_step: default_font_step(),
            foreground: default_foreground(),
            background: default_background(),
            font_path: None,
        }
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            clock_refresh_ms: default_clock_refresh_ms(),
            counter_tick_ms: default_counter_tick_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            ticks: TickConfig::default(),
            themes_path: None,
        }
    }
}

impl Config {
    /// Returns `~/.config/segclock/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    pub fn path() -> Result<PathBuf, ConfigLoadError> {
        let home = dirs::home_dir().ok_or(ConfigLoadError::NoConfigDir)?;
        Ok(home.join(".config").join("segclock").join("config.toml"))
    }

    /// Load from the default location, or defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// holds inconsistent values.
    pub fn load() -> Result<Self, ConfigLoadError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigLoadError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let cfg: Config = toml::from_str(&content).map_err(|e| ConfigLoadError::ConfigMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let d = &self.display;
        if d.min_font_size == 0 || d.min_font_size > d.max_font_size {
            return Err(ConfigLoadError::InvalidValue {
                key: "display.min_font_size".into(),
                message: format!(
                    "must be between 1 and max_font_size ({}), got {}",
                    d.max_font_size, d.min_font_size
                ),
            });
        }
        if !(d.min_font_size..=d.max_font_size).contains(&d.default_font_size) {
            return Err(ConfigLoadError::InvalidValue {
                key: "display.default_font_size".into(),
                message: format!(
                    "must be within {}..={}, got {}",
                    d.min_font_size, d.max_font_size, d.default_font_size
                ),
            });
        }
        for (key, ms) in [
            ("ticks.clock_refresh_ms", self.ticks.clock_refresh_ms),
            ("ticks.counter_tick_ms", self.ticks.counter_tick_ms),
        ] {
            if ms == 0 {
                return Err(ConfigLoadError::InvalidValue {
                    key: key.into(),
                    message: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    pub fn tick_interval(&self, mode: DisplayMode) -> Duration {
        match mode {
            DisplayMode::Clock => Duration::from_millis(self.ticks.clock_refresh_ms),
            DisplayMode::Stopwatch | DisplayMode::Timer => {
                Duration::from_millis(self.ticks.counter_tick_ms)
            }
        }
    }
}

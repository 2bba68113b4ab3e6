//! Error types for segclock-core.
//!
//! Startup configuration failures are the only fatal errors in the system;
//! they are collected under [`ConfigLoadError`] so the presentation layer can
//! report them before anything is drawn.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the configuration file or theme catalog.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// File exists but could not be read, or does not exist when required
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme catalog is not valid JSON of the expected shape
    #[error("Malformed theme file {path}: {source}")]
    ThemesMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file is not valid TOML of the expected shape
    #[error("Malformed configuration file {path}: {message}")]
    ConfigMalformed { path: PathBuf, message: String },

    /// Value parsed but is not usable
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home directory could not be determined
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

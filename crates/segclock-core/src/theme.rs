//! Read-only theme catalog.
//!
//! The catalog is a JSON object keyed by category name, each holding an
//! ordered list of `{name, foreground_color, background_color}` records.
//! Color strings are passed through untouched; the renderer decides what to
//! do with values it does not understand.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigLoadError;

const BUILTIN_THEMES: &str = include_str!("../config/themes.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub foreground_color: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeCategory {
    Light,
    Dark,
    Custom,
}

impl ThemeCategory {
    /// Menu order.
    pub const ALL: [ThemeCategory; 3] = [ThemeCategory::Light, ThemeCategory::Dark, ThemeCategory::Custom];

    pub fn label(self) -> &'static str {
        match self {
            ThemeCategory::Light => "Light Themes",
            ThemeCategory::Dark => "Dark Themes",
            ThemeCategory::Custom => "Custom Themes",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    #[serde(rename = "Light Themes", default)]
    light: Vec<Theme>,
    #[serde(rename = "Dark Themes", default)]
    dark: Vec<Theme>,
    #[serde(rename = "Custom Themes", default)]
    custom: Vec<Theme>,
}

impl ThemeCatalog {
    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::Unreadable`] if the file is missing or
    /// unreadable and [`ConfigLoadError::ThemesMalformed`] if it does not
    /// parse.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: ThemeCatalog =
            serde_json::from_str(&content).map_err(|source| ConfigLoadError::ThemesMalformed {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), themes = catalog.len(), "loaded theme catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error if the string does not parse.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        // The embedded file is covered by tests; an empty catalog is still usable.
        Self::from_json_str(BUILTIN_THEMES).unwrap_or_default()
    }

    pub fn category(&self, category: ThemeCategory) -> &[Theme] {
        match category {
            ThemeCategory::Light => &self.light,
            ThemeCategory::Dark => &self.dark,
            ThemeCategory::Custom => &self.custom,
        }
    }

    /// All themes in menu order, tagged with their category.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeCategory, &Theme)> {
        ThemeCategory::ALL
            .into_iter()
            .flat_map(move |c| self.category(c).iter().map(move |t| (c, t)))
    }

    /// First theme with this name in menu order. Case-insensitive.
    pub fn find(&self, name: &str) -> Option<&Theme> {
        self.iter()
            .map(|(_, t)| t)
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.light.len() + self.dark.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

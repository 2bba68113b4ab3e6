//! Display font selection.
//!
//! A custom font that cannot be used is never fatal: the failure is logged
//! and the renderer's default font takes over.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Custom(PathBuf),
    Default,
}

impl FontSource {
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return FontSource::Default;
        };
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => FontSource::Custom(path.to_path_buf()),
            Ok(_) => {
                tracing::warn!(path = %path.display(), "font path is not a file, using default font");
                FontSource::Default
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load font, using default font");
                FontSource::Default
            }
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FontSource::Custom(_))
    }
}

use serde::{Deserialize, Serialize};

use super::ViewState;
use crate::time_source::CANONICAL_TEXT;

/// Padding added on each axis around the measured text.
pub const WINDOW_PADDING: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Font metrics supplied by whatever draws the text.
pub trait TextMeasure {
    /// Bounding box of `text` rendered at `font_size` pixels.
    fn measure(&self, text: &str, font_size: u32) -> TextExtent;
}

/// Fixed-ratio approximation of a monospace font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Horizontal advance per character, as a fraction of the font size.
    pub advance: f64,
    /// Line height as a fraction of the font size.
    pub line_height: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 0.625,
            line_height: 1.25,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font_size: u32) -> TextExtent {
        let size = f64::from(font_size);
        let chars = text.chars().count() as f64;
        TextExtent {
            width: (chars * self.advance * size).ceil() as u32,
            height: (self.line_height * size).ceil() as u32,
        }
    }
}

/// Window size that fits the widest display text, or `None` while
/// fullscreen (the window then takes the screen and must not be resized).
pub fn window_size(view: &ViewState, measure: &dyn TextMeasure) -> Option<TextExtent> {
    if view.fullscreen {
        return None;
    }
    let text = measure.measure(CANONICAL_TEXT, view.font_size);
    Some(TextExtent {
        width: text.width.saturating_add(WINDOW_PADDING),
        height: text.height.saturating_add(WINDOW_PADDING),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl TextMeasure for Fixed {
        fn measure(&self, text: &str, font_size: u32) -> TextExtent {
            assert_eq!(text, CANONICAL_TEXT);
            TextExtent {
                width: font_size * 4,
                height: font_size,
            }
        }
    }

    #[test]
    fn window_wraps_canonical_text_with_padding() {
        let view = ViewState::default();
        assert_eq!(
            window_size(&view, &Fixed),
            Some(TextExtent {
                width: 820,
                height: 220
            })
        );
    }

    #[test]
    fn fullscreen_suppresses_resize() {
        let view = ViewState {
            fullscreen: true,
            ..ViewState::default()
        };
        assert_eq!(window_size(&view, &Fixed), None);
    }

    #[test]
    fn monospace_scales_with_font_size() {
        let m = MonospaceMeasure::default();
        assert_eq!(
            m.measure(CANONICAL_TEXT, 100),
            TextExtent {
                width: 500,
                height: 125
            }
        );
        assert!(m.measure(CANONICAL_TEXT, 200).width > m.measure(CANONICAL_TEXT, 100).width);
    }
}

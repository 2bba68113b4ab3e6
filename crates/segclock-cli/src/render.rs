//! Terminal drawing of shell frames.
//!
//! The display line is redrawn in place with `\r`. Colours become 24-bit ANSI
//! escapes when they are `#rrggbb` or a known CSS name; anything else is drawn
//! uncoloured.

use std::io::{self, Write};

use segclock_core::view::TextExtent;
use segclock_core::Frame;

const CSS_COLOURS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("lime", (0, 255, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("navy", (0, 0, 128)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("cyan", (0, 255, 255)),
    ("aqua", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("fuchsia", (255, 0, 255)),
    ("purple", (128, 0, 128)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("silver", (192, 192, 192)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("teal", (0, 128, 128)),
];

/// RGB for a `#rrggbb` code or a known CSS colour name.
pub fn parse_colour(colour: &str) -> Option<(u8, u8, u8)> {
    let colour = colour.trim();
    if let Some(hex) = colour.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some((channel(0)?, channel(2)?, channel(4)?));
    }
    CSS_COLOURS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(colour))
        .map(|&(_, rgb)| rgb)
}

/// One display line for `frame`, without the leading carriage return.
pub fn format_frame(frame: &Frame, title: &str) -> String {
    let mut out = String::new();
    if let Some((r, g, b)) = parse_colour(&frame.foreground) {
        out.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
    }
    if let Some((r, g, b)) = parse_colour(&frame.background) {
        out.push_str(&format!("\x1b[48;2;{r};{g};{b}m"));
    }
    out.push_str(&format!("  {}  ", frame.text));
    out.push_str("\x1b[0m");
    if let Some(counter) = frame.counter {
        let (r, g, b) = counter.rgb();
        out.push_str(&format!(" \x1b[38;2;{r};{g};{b}m\u{25cf}\x1b[0m"));
    }

    if frame.menubar_visible {
        out.push_str(&format!("  {title} | font {}px", frame.font_size));
        if frame.pinned {
            out.push_str(" | pinned");
        }
        if frame.fullscreen {
            out.push_str(" | fullscreen");
        }
        if let Some(counter) = frame.counter {
            out.push_str(" | ");
            out.push_str(counter.label());
        }
    }
    out
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    title: String,
    last_window: Option<Option<TextExtent>>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, title: impl Into<String>) -> Self {
        Self {
            out,
            title: title.into(),
            last_window: None,
        }
    }

    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        if self.last_window != Some(frame.window_size) {
            match frame.window_size {
                Some(size) => tracing::debug!(width = size.width, height = size.height, "window resize requested"),
                None => tracing::debug!("fullscreen, window size left to the screen"),
            }
            self.last_window = Some(frame.window_size);
        }
        write!(self.out, "\r\x1b[2K{}", format_frame(frame, &self.title))?;
        self.out.flush()
    }

    /// Print a block of text below the display line.
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\r\x1b[2K{text}\n")?;
        self.out.flush()
    }

    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out, "\x1b[0m")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

//! Line commands read from stdin while the display runs.

use segclock_core::{ShellEvent, ViewAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shell(ShellEvent),
    /// Needs a random source, so it is resolved by the event loop.
    RandomColours,
    ListThemes,
    Help,
    About,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands (type, then Enter):
  <Enter>, s       Start/Stop
  r                Reset
  f                Toggle fullscreen
  m, t             Toggle menu bar
  p                Pin window
  +, =             Increase font size
  -, _             Decrease font size
  0                Reset font size
  swap             Swap colours
  random           Random colours
  fg <colour>      Set foreground colour
  bg <colour>      Set background colour
  theme <name>     Apply a preset theme
  themes           List preset themes
  ?, /, help       Show this help
  about            About this program
  q, quit          Quit";

/// Parse one input line. `font_step` is the grow/shrink increment.
pub fn parse(line: &str, font_step: u32) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let step = i32::try_from(font_step).unwrap_or(i32::MAX);

    let view = |action| Command::Shell(ShellEvent::View(action));
    match (word.to_ascii_lowercase().as_str(), rest) {
        ("" | "s", "") => Command::Shell(ShellEvent::StartStop),
        ("r", "") => Command::Shell(ShellEvent::Reset),
        ("f", "") => view(ViewAction::ToggleFullscreen),
        ("m" | "t", "") => view(ViewAction::ToggleMenubar),
        ("p", "") => view(ViewAction::TogglePin),
        ("+" | "=", "") => view(ViewAction::ChangeFontSize { delta: step }),
        ("-" | "_", "") => view(ViewAction::ChangeFontSize { delta: -step }),
        ("0", "") => view(ViewAction::ResetFontSize),
        ("swap", "") => view(ViewAction::SwapColours),
        ("random", "") => Command::RandomColours,
        ("fg", colour) if !colour.is_empty() => view(ViewAction::SetForeground {
            color: colour.to_string(),
        }),
        ("bg", colour) if !colour.is_empty() => view(ViewAction::SetBackground {
            color: colour.to_string(),
        }),
        ("theme", name) if !name.is_empty() => Command::Shell(ShellEvent::Theme(name.to_string())),
        ("themes", "") => Command::ListThemes,
        ("?" | "/" | "help", "") => Command::Help,
        ("about", "") => Command::About,
        ("q" | "quit", "") => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_toggles_start_stop() {
        assert_eq!(parse("", 5), Command::Shell(ShellEvent::StartStop));
        assert_eq!(parse("  s ", 5), Command::Shell(ShellEvent::StartStop));
        assert_eq!(parse("R", 5), Command::Shell(ShellEvent::Reset));
    }

    #[test]
    fn font_commands_use_step() {
        assert_eq!(
            parse("+", 5),
            Command::Shell(ShellEvent::View(ViewAction::ChangeFontSize { delta: 5 }))
        );
        assert_eq!(
            parse("_", 10),
            Command::Shell(ShellEvent::View(ViewAction::ChangeFontSize { delta: -10 }))
        );
        assert_eq!(
            parse("-", 5),
            Command::Shell(ShellEvent::View(ViewAction::ChangeFontSize { delta: -5 }))
        );
        assert_eq!(
            parse("=", 5),
            Command::Shell(ShellEvent::View(ViewAction::ChangeFontSize { delta: 5 }))
        );
        assert_eq!(parse("0", 5), Command::Shell(ShellEvent::View(ViewAction::ResetFontSize)));
    }

    #[test]
    fn window_toggles() {
        let view = |action| Command::Shell(ShellEvent::View(action));
        assert_eq!(parse("f", 5), view(ViewAction::ToggleFullscreen));
        assert_eq!(parse("P", 5), view(ViewAction::TogglePin));
        assert_eq!(parse("m", 5), view(ViewAction::ToggleMenubar));
        assert_eq!(parse("t", 5), view(ViewAction::ToggleMenubar));
        assert_eq!(parse("swap", 5), view(ViewAction::SwapColours));
        assert_eq!(parse("f now", 5), Command::Unknown("f now".into()));
    }

    #[test]
    fn theme_names_keep_spaces() {
        assert_eq!(
            parse("theme  LED Green ", 5),
            Command::Shell(ShellEvent::Theme("LED Green".into()))
        );
    }

    #[test]
    fn colour_commands_take_an_argument() {
        assert_eq!(
            parse("fg #ff0000", 5),
            Command::Shell(ShellEvent::View(ViewAction::SetForeground {
                color: "#ff0000".into()
            }))
        );
        assert_eq!(
            parse("BG  navy ", 5),
            Command::Shell(ShellEvent::View(ViewAction::SetBackground { color: "navy".into() }))
        );
        assert_eq!(parse("bg", 5), Command::Unknown("bg".into()));
    }

    #[test]
    fn misc_commands() {
        assert_eq!(parse("random", 5), Command::RandomColours);
        assert_eq!(parse("themes", 5), Command::ListThemes);
        assert_eq!(parse("?", 5), Command::Help);
        assert_eq!(parse("about", 5), Command::About);
        assert_eq!(parse("quit", 5), Command::Quit);
        assert_eq!(parse("dance", 5), Command::Unknown("dance".into()));
        assert_eq!(parse("r now", 5), Command::Unknown("r now".into()));
    }
}

//! Terminal presentation layer for segclock.
//!
//! Each binary picks a [`DisplayMode`] and hands it to [`run`], which loads
//! configuration, builds the shell and drives it from a single-threaded
//! event loop until the user quits.

use std::io::Stdout;

use chrono::{Local, Utc};
use segclock_core::view::MonospaceMeasure;
use segclock_core::{Config, DisplayMode, Shell, ShellEvent, ThemeCatalog, ViewAction};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

pub mod commands;
mod logging;
pub mod render;

use commands::Command;
use render::TerminalRenderer;

/// Load everything the display needs. Any failure here is fatal and is
/// reported before anything is drawn.
///
/// # Errors
/// Returns an error if the configuration or theme catalog cannot be loaded.
pub fn build_shell(mode: DisplayMode, config: &Config) -> Result<Shell, Box<dyn std::error::Error>> {
    let themes = match &config.themes_path {
        Some(path) => ThemeCatalog::load(path)?,
        None => ThemeCatalog::builtin(),
    };
    info!(themes = themes.len(), "theme catalog ready");
    Ok(Shell::from_config(mode, config, themes))
}

/// Run the display for `mode` until quit or Ctrl-C.
///
/// # Errors
/// Returns an error on startup failure or if the terminal cannot be written.
pub fn run(mode: DisplayMode) -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;
    let config = Config::load()?;
    let shell = build_shell(mode, &config)?;
    info!(%mode, tick = ?shell.tick_interval(), "starting display");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(event_loop(shell));
    // A pending stdin read would otherwise hold shutdown until the next line.
    runtime.shutdown_background();
    result
}

async fn event_loop(mut shell: Shell) -> Result<(), Box<dyn std::error::Error>> {
    let measure = MonospaceMeasure::default();
    let mut renderer = TerminalRenderer::new(std::io::stdout(), shell.mode().title());
    let mut ticks = tokio::time::interval(shell.tick_interval());
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');
    let mut stdin_open = true;
    let mut rng = rand::thread_rng();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    if shell.mode().is_stateful() {
        renderer.message("Press Enter to start/stop, 'r' then Enter to reset, '?' for help.")?;
    }

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                dispatch(&mut shell, ShellEvent::Tick);
            }
            segment = lines.next_segment(), if stdin_open => {
                let line = match segment {
                    Ok(Some(bytes)) => decode_line(&bytes),
                    Ok(None) => {
                        debug!("stdin closed, display keeps running");
                        stdin_open = false;
                        continue;
                    }
                    Err(e) => {
                        warn!(error = %e, "stdin unreadable, input disabled");
                        stdin_open = false;
                        continue;
                    }
                };
                match commands::parse(&line, shell.font_step()) {
                    Command::Shell(event) => dispatch(&mut shell, event),
                    Command::RandomColours => {
                        let (foreground, background) = segclock_core::view::random_colours(&mut rng);
                        dispatch(&mut shell, ShellEvent::View(ViewAction::RandomColours { foreground, background }));
                    }
                    Command::ListThemes => list_themes(&shell, &mut renderer)?,
                    Command::Help => renderer.message(commands::HELP)?,
                    Command::About => renderer.message(&shell.about_text())?,
                    Command::Quit => break,
                    Command::Unknown(input) => {
                        renderer.message(&format!("unknown command: {input} (type ? for help)"))?;
                    }
                }
            }
            _ = &mut ctrl_c => {
                debug!("interrupted");
                break;
            }
        }
        renderer.draw(&shell.frame(&Local::now(), &measure))?;
    }

    renderer.finish()?;
    info!("display closed");
    Ok(())
}

/// Lossy decode of one input line, dropping a trailing `\r`.
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn dispatch(shell: &mut Shell, event: ShellEvent) {
    if let Some(change) = shell.handle(event, Utc::now()) {
        info!(event = ?change, "state changed");
    }
}

fn list_themes(shell: &Shell, renderer: &mut TerminalRenderer<Stdout>) -> std::io::Result<()> {
    let mut text = String::new();
    let mut current = None;
    for (category, theme) in shell.themes().iter() {
        if current != Some(category) {
            text.push_str(category.label());
            text.push('\n');
            current = Some(category);
        }
        text.push_str(&format!(
            "  {}  ({} on {})\n",
            theme.name, theme.foreground_color, theme.background_color
        ));
    }
    if text.is_empty() {
        text.push_str("no themes available\n");
    }
    renderer.message(text.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_tolerates_invalid_utf8() {
        assert_eq!(decode_line(b"theme LED Red\r"), "theme LED Red");
        assert_eq!(decode_line(b"\xffq"), "\u{fffd}q");
        assert!(matches!(commands::parse(&decode_line(b"\xff"), 5), Command::Unknown(_)));
    }

    #[test]
    fn second_logging_init_is_an_error() {
        // Another test may have installed the subscriber first.
        let _ = logging::init();
        assert!(logging::init().is_err());
    }
}

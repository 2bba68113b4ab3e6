//! Integration tests for configuration and theme catalog loading.

use segclock_core::{Config, ConfigLoadError, DisplayMode, Shell, ShellEvent, ThemeCatalog, ThemeCategory};
use std::time::Duration;

#[test]
fn missing_config_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(!dir.path().join("config.toml").exists(), "defaults must not be written");
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "themes_path = \"/tmp/themes.json\"\n\n[display]\ndefault_font_size = 120\nbackground = \"#16161d\"\n\n[ticks]\nclock_refresh_ms = 500\n",
    )
    .unwrap();
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.display.default_font_size, 120);
    assert_eq!(cfg.display.background, "#16161d");
    assert_eq!(cfg.display.foreground, "white");
    assert_eq!(cfg.tick_interval(DisplayMode::Clock), Duration::from_millis(500));
    assert_eq!(cfg.themes_path.as_deref(), Some(std::path::Path::new("/tmp/themes.json")));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[display\nforeground = 3").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigLoadError::ConfigMalformed { .. })
    ));
}

#[test]
fn inconsistent_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[display]\nmin_font_size = 300\nmax_font_size = 100\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigLoadError::InvalidValue { .. })
    ));
}

#[test]
fn missing_theme_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ThemeCatalog::load(&dir.path().join("themes.json")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Unreadable { .. }));
    assert!(err.to_string().contains("themes.json"));
}

#[test]
fn malformed_theme_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("themes.json");
    std::fs::write(&path, "{\"Light Themes\": [").unwrap();
    assert!(matches!(
        ThemeCatalog::load(&path),
        Err(ConfigLoadError::ThemesMalformed { .. })
    ));
}

#[test]
fn loaded_themes_drive_the_shell() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("themes.json");
    std::fs::write(
        &path,
        r##"{"Custom Themes": [{"name": "Office", "foreground_color": "#cccccc", "background_color": "navy"}]}"##,
    )
    .unwrap();
    let catalog = ThemeCatalog::load(&path).unwrap();
    assert_eq!(catalog.category(ThemeCategory::Custom).len(), 1);

    let mut shell = Shell::from_config(DisplayMode::Stopwatch, &Config::default(), catalog);
    shell.handle(ShellEvent::Theme("Office".into()), chrono::Utc::now());
    assert_eq!(shell.view().foreground, "#cccccc");
    assert_eq!(shell.view().background, "navy");
}

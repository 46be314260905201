//! Configuration system tests
//!
//! Tests for config paths, settings and bindings file loading.

use quadnav::config_paths;
use quadnav::keymap::{
    default_bindings, Action, FileSource, KeyBindingTable, KeyCode, Keystroke, Modifiers,
};
use quadnav::model::Direction;
use quadnav::Settings;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("quadnav"));
    }
}

#[test]
fn test_bindings_file_lives_in_config_dir() {
    if let (Some(dir), Some(file)) = (config_paths::config_dir(), config_paths::bindings_file()) {
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert_eq!(file.file_name().unwrap(), "bindings");
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(file) = config_paths::config_file() {
        assert_eq!(file.extension().unwrap(), "yaml");
    }
}

// ========================================================================
// Settings Tests
// ========================================================================

#[test]
fn test_settings_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let settings = Settings {
        settle_primary_ms: 80,
        scroll_lines: 5,
        ..Settings::default()
    };
    std::fs::write(&path, serde_yaml::to_string(&settings).unwrap()).unwrap();

    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn test_settings_out_of_range_values_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "nudge_fraction: 0.0\nscroll_lines: 1000\n").unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.nudge_fraction, Settings::default().nudge_fraction);
    assert_eq!(settings.scroll_lines, 100);
}

// ========================================================================
// Bindings File Tests
// ========================================================================

#[test]
fn test_bindings_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bindings");
    std::fs::write(
        &path,
        "# swap h and l\nh right\nl left\n\nctrl+alt+space start\n",
    )
    .unwrap();

    let (table, diagnostics) = KeyBindingTable::load(&FileSource::new(&path));
    assert!(diagnostics.is_empty());
    assert_eq!(table.len(), default_bindings().len() + 1);
    assert_eq!(
        table.resolve(&Keystroke::char('h')),
        Some(&[Action::Bisect(Direction::Right)][..])
    );
    assert_eq!(
        table.resolve(&Keystroke::char('l')),
        Some(&[Action::Bisect(Direction::Left)][..])
    );
    assert!(table.start_bindings().contains(&Keystroke::new(
        KeyCode::Space,
        Modifiers::CONTROL | Modifiers::OPTION
    )));
}

#[test]
fn test_bindings_file_diagnostics_carry_line_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bindings");
    std::fs::write(&path, "h right\n\nhyper+x up\nx\nz grid 3x3\n").unwrap();

    let (_, diagnostics) = KeyBindingTable::load(&FileSource::new(&path));
    let lines: Vec<usize> = diagnostics.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![3, 4, 5]);
}

//! Tests for loading configuration files.

use rewind_tui::RewindConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = RewindConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, RewindConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ascending = false").unwrap();
    writeln!(file, "log_file = \"/tmp/rewind-test.log\"").unwrap();
    writeln!(file, "log_filter = \"rewind_tictactoe=debug\"").unwrap();

    let config = RewindConfig::load_or_default(file.path()).unwrap();
    assert!(!*config.ascending());
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
    assert_eq!(config.log_filter(), "rewind_tictactoe=debug");
}

#[test]
fn test_invalid_toml_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ascending = \"sideways\"").unwrap();

    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

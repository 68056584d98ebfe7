//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use rewind_tui::TuiConfig;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
    assert_eq!(config.poll_interval(), Duration::from_millis(100));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("log_filter = \"debug\"\nshow_move_details = false\n");
    let config = TuiConfig::load(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "debug");
    assert!(!*config.show_move_details());
    assert_eq!(*config.poll_interval_ms(), 100);
}

#[test]
fn test_invalid_file_reports_error() {
    let file = write_config("poll_interval_ms = \"soon\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_setters_override_loaded_values() {
    let config = TuiConfig::default().with_log_file(PathBuf::from("/tmp/other.log"));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/other.log"));
}

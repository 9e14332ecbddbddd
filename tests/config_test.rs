//! Tests for configuration loading.

use rewind::AppConfig;
use rewind_tictactoe::SortOrder;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.source(), &None);
}

#[test]
fn test_file_overrides_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"game.log\"\nlog_filter = \"debug\"\nsort_order = \"descending\""
    )
    .unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert_eq!(config.source().as_deref(), Some(file.path()));
}

#[test]
fn test_malformed_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "sort_order = \"sideways\"").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_cli_flag_override() {
    let config = AppConfig::default().with_sort_order(SortOrder::Descending);
    assert_eq!(*config.sort_order(), SortOrder::Descending);
}

//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Settings for the `rewind` binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// File the interactive UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Initial order of the move list.
    #[serde(default)]
    sort_order: SortOrder,

    /// File the settings were read from, `None` when using defaults.
    #[serde(skip)]
    source: Option<PathBuf>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            sort_order: SortOrder::default(),
            source: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Ok(Self {
            source: Some(path.as_ref().to_path_buf()),
            ..config
        })
    }

    /// Loads configuration from `path`, falling back to defaults if the
    /// file does not exist.
    ///
    /// The file read, if any, is recorded in [`AppConfig::source`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Overrides the initial move-list order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
        assert_eq!(config.log_filter(), "info");
        assert_eq!(*config.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("sort_order = \"descending\"").unwrap();
        assert_eq!(*config.sort_order(), SortOrder::Descending);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<AppConfig>("colour = \"green\"").is_err());
    }

    #[test]
    fn test_defaults_have_no_source() {
        assert_eq!(AppConfig::default().source(), &None);
        let parsed: AppConfig = toml::from_str("log_filter = \"warn\"").unwrap();
        assert_eq!(parsed.source(), &None);
    }

    #[test]
    fn test_source_not_accepted_from_file() {
        assert!(toml::from_str::<AppConfig>("source = \"elsewhere.toml\"").is_err());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom");
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}

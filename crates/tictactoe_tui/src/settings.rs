//! Front end settings loaded from an optional TOML file.

use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-configurable settings for the terminal front end.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme used at startup.
    theme: Theme,

    /// File receiving log output while the terminal is in raw mode.
    log_file: PathBuf,

    /// Log filter directive, used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(theme = %settings.theme, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the theme when one was given on the command line.
    pub fn with_theme(mut self, theme: Option<Theme>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = Settings::load(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.theme(), &Theme::Light);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = config_file("theme = \"dark\"\n");
        let settings = Settings::load(file.path()).expect("valid config");
        assert_eq!(settings.theme(), &Theme::Dark);
        assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_full_file() {
        let file = config_file(
            "theme = \"light\"\nlog_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\"\n",
        );
        let settings = Settings::from_file(file.path()).expect("valid config");
        assert_eq!(settings.log_file(), &PathBuf::from("/tmp/ttt.log"));
        assert_eq!(settings.log_filter(), "debug");
    }

    #[test]
    fn test_unknown_theme_is_error() {
        let file = config_file("theme = \"sepia\"\n");
        let err = Settings::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_cli_theme_overrides_file() {
        let settings = Settings::default().with_theme(Some(Theme::Dark));
        assert_eq!(settings.theme(), &Theme::Dark);
        let settings = settings.with_theme(None);
        assert_eq!(settings.theme(), &Theme::Dark);
    }
}

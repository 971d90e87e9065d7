//! Configuration management and validation.
//!
//! Ambient settings only: report format, error display caps, progress and
//! logging. The PoI column schema itself is fixed and deliberately not
//! configurable. Settings are layered: built-in defaults, then an optional
//! TOML file, then environment variables, then CLI flags (applied by the
//! command layer).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, DEFAULT_MAX_ERRORS,
    DEFAULT_REPORT_FORMAT, ENV_LOG_LEVEL, ENV_MAX_ERRORS, ENV_REPORT_FORMAT,
};
use crate::{Error, Result};

/// Report output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: "human", "json" or "csv"
    pub format: String,

    /// Cap on errors shown in the human report (0 = unlimited)
    pub max_errors: usize,

    /// Show a per-file spinner while scanning
    pub progress: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_REPORT_FORMAT.to_string(),
            max_errors: DEFAULT_MAX_ERRORS,
            progress: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when CLI flags do not override it:
    /// "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Global configuration for the PoI validator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report output settings
    pub report: ReportConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location, e.g. `~/.config/poi-validator/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file '{}'", path.display()), e))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file '{}': {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// Load configuration in layers: defaults, optional file, environment
    ///
    /// An explicitly given file must exist and parse; the default location
    /// is used only when present. CLI flags are applied on top by the
    /// command layer.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    debug!("Loading configuration from {}", path.display());
                    Self::from_file(&path)?
                }
                _ => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var(ENV_REPORT_FORMAT) {
            self.report.format = format;
        }
        if let Ok(max_errors) = std::env::var(ENV_MAX_ERRORS) {
            match max_errors.parse() {
                Ok(value) => self.report.max_errors = value,
                Err(_) => warn!(
                    "Ignoring {}: '{}' is not a number",
                    ENV_MAX_ERRORS, max_errors
                ),
            }
        }
    }

    /// Check that the configured names are ones the validator understands
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.report.format.as_str(), "human" | "json" | "csv") {
            return Err(Error::configuration(format!(
                "Unknown report format '{}': expected human, json or csv",
                self.report.format
            )));
        }

        if !matches!(
            self.logging.level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}': expected error, warn, info, debug or trace",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Set the report format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.report.format = format.into();
        self
    }

    /// Set the error display cap
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.report.max_errors = max_errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.report.format, "human");
        assert_eq!(config.report.max_errors, 0);
        assert!(config.report.progress);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nformat = \"json\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.report.format, "json");
        // Everything not mentioned stays at its default
        assert_eq!(config.report.max_errors, 0);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_toml_is_a_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "report = \"not a table\"").unwrap();

        let result = Config::from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = Config::default().with_format("xml");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = Config::default().with_format("csv").with_max_errors(25);
        assert_eq!(config.report.format, "csv");
        assert_eq!(config.report.max_errors, 25);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config::default().with_format("json").with_max_errors(10);
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}

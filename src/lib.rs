//! PoI Validator Library
//!
//! A Rust library for validating points-of-interest (PoI) data files in a
//! comma-delimited format with a trailing brace-delimited ratings field.
//!
//! This library provides tools for:
//! - Checking every data row against the fixed six-column PoI schema
//! - Tokenizing rows with quoted-field accumulation (commas inside quotes)
//! - Extracting the ratings suffix from the last `{` to end of line
//! - Collecting every violation in a file with line numbers and row text
//! - Reporting results in human-readable, JSON, and CSV formats

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod poi_csv_validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ColumnSpec, ColumnType, ValidationError, Violation};
pub use app::services::poi_csv_validator::{
    FileReport, PoiCsvValidator, PoiSchema, ValidationStats,
};
pub use config::Config;

/// Result type alias for the PoI validator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for PoI validation operations
///
/// These are system faults. Data violations found in an input file are not
/// errors in this sense: they are collected into a
/// [`FileReport`](app::services::poi_csv_validator::FileReport) and the
/// validation call still succeeds.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be opened
    #[error("Cannot open input file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report generation error
    #[error("Report generation error: {message}")]
    Report { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report generation error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Report {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}

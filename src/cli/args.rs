//! Command-line argument definitions for the PoI CSV validator
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the points-of-interest CSV validator
///
/// Checks CSV exports of points-of-interest data against the standard
/// six-column schema and reports every invalid row with its line number.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "poi-validator",
    version,
    about = "Validate points-of-interest CSV exports against the six-column schema",
    long_about = "A validator for points-of-interest CSV exports. Every row is checked \
                  against the six-column schema (poi_id, poi_name, poi_category, \
                  poi_latitude, poi_longitude, poi_ratings), including quoted values \
                  with embedded commas and the brace-delimited ratings cell. Whole \
                  files are always scanned, so a single run reports every error."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the validator
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate CSV files against the points-of-interest schema (default command)
    Validate(ValidateArgs),
    /// Print the expected column layout
    Schema(SchemaArgs),
}

/// Arguments for the validate command (main validation workflow)
#[derive(Debug, Clone, Default, Parser)]
pub struct ValidateArgs {
    /// CSV files to validate
    ///
    /// Each file is validated independently. Files that cannot be opened
    /// are reported as failures and the run continues with the rest.
    #[arg(
        value_name = "FILE",
        required = true,
        num_args = 1..,
        help = "CSV files to validate"
    )]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for report and logging defaults. If not
    /// specified, looks for ~/.config/poi-validator/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Maximum number of errors to print per file
    ///
    /// Validation always scans whole files and counts every error. This cap
    /// only limits how many error lines the human report prints.
    #[arg(
        long = "max-errors",
        value_name = "COUNT",
        help = "Maximum errors printed per file in the human report (0 = unlimited)"
    )]
    pub max_errors: Option<usize>,

    /// Output format for validation results
    ///
    /// If not specified, uses the configured format (human by default).
    #[arg(
        long = "format",
        value_enum,
        value_name = "FORMAT",
        help = "Output format for validation results"
    )]
    pub output_format: Option<OutputFormat>,

    /// Output file for the validation report
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the validation report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the final verdict. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the schema command (column reference)
#[derive(Debug, Clone, Parser)]
pub struct SchemaArgs {
    /// Output format for the schema listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the schema listing"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl OutputFormat {
    /// Canonical name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::configuration(format!(
                "Unknown output format '{}'. Available formats: human, json, csv",
                other
            ))),
        }
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Input files are opened during the run rather than checked here, so
        // one missing file does not block validation of the remaining files.
        if self.files.is_empty() {
            return Err(Error::configuration(
                "At least one input file must be specified".to_string(),
            ));
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        // Validate output file directory exists if specified
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress spinners (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

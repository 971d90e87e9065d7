//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::ValidateArgs;
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of files that were opened and scanned
    pub files_checked: usize,
    /// Number of scanned files with no validation errors
    pub files_valid: usize,
    /// Number of scanned files with at least one validation error
    pub files_invalid: usize,
    /// Number of files that could not be opened or read
    pub files_failed: usize,
    /// Number of data records checked across all files
    pub records_checked: usize,
    /// Number of validation errors found across all files
    pub errors_found: usize,
    /// Total run time
    pub elapsed: Duration,
}

impl RunStats {
    /// True when every file could be read and none contained errors
    pub fn is_success(&self) -> bool {
        self.files_failed == 0 && self.files_invalid == 0
    }

    /// Total number of files named on the command line
    pub fn files_total(&self) -> usize {
        self.files_checked + self.files_failed
    }
}

/// Set up structured logging for the validate command
pub fn setup_logging(args: &ValidateArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("poi_validator={}", log_level)));

    // Set up subscriber based on output format preference
    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &ValidateArgs) -> Result<Config> {
    info!("Loading configuration");

    let mut config = Config::load_layered(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ValidateArgs) -> Result<()> {
    // Override report settings if explicitly provided
    if let Some(max_errors) = args.max_errors {
        config.report.max_errors = max_errors;
    }
    if let Some(format) = &args.output_format {
        config.report.format = format.as_str().to_string();
    }

    // Quiet mode suppresses the progress spinner along with logging
    if args.quiet {
        config.report.progress = false;
    }

    // Override logging settings
    config.logging.level = args.get_log_level().to_string();

    Ok(())
}

/// Create a progress spinner with appropriate styling
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Escape a value for CSV output
pub fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_args() -> ValidateArgs {
        ValidateArgs {
            files: vec![PathBuf::from("pois.csv")],
            ..Default::default()
        }
    }

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.files_checked, 0);
        assert_eq!(stats.errors_found, 0);
        assert!(stats.is_success());
    }

    #[test]
    fn test_run_stats_success() {
        let mut stats = RunStats {
            files_checked: 3,
            files_valid: 3,
            ..Default::default()
        };
        assert!(stats.is_success());
        assert_eq!(stats.files_total(), 3);

        stats.files_valid = 2;
        stats.files_invalid = 1;
        assert!(!stats.is_success());
    }

    #[test]
    fn test_run_stats_unreadable_file_is_not_success() {
        let stats = RunStats {
            files_checked: 1,
            files_valid: 1,
            files_failed: 1,
            ..Default::default()
        };
        assert!(!stats.is_success());
        assert_eq!(stats.files_total(), 2);
    }

    #[test]
    fn test_load_configuration_defaults() {
        let config = load_configuration(&test_args()).unwrap();
        assert_eq!(config.report.format, "human");
        assert_eq!(config.report.max_errors, 0);
        assert!(config.report.progress);
    }

    #[test]
    fn test_load_configuration_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "[report]").unwrap();
        writeln!(file, "format = \"json\"").unwrap();
        writeln!(file, "max_errors = 5").unwrap();

        let mut args = test_args();
        args.config_file = Some(config_path);

        let config = load_configuration(&args).unwrap();
        assert_eq!(config.report.format, "json");
        assert_eq!(config.report.max_errors, 5);
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let mut config = Config::default();
        let mut args = test_args();
        args.max_errors = Some(10);
        args.output_format = Some(OutputFormat::Csv);

        apply_cli_overrides(&mut config, &args).unwrap();
        assert_eq!(config.report.max_errors, 10);
        assert_eq!(config.report.format, "csv");
        assert!(config.report.progress);
    }

    #[test]
    fn test_quiet_mode_disables_progress() {
        let mut config = Config::default();
        let mut args = test_args();
        args.quiet = true;

        apply_cli_overrides(&mut config, &args).unwrap();
        assert!(!config.report.progress);
        assert_eq!(config.logging.level, "error");
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("has,comma"), "\"has,comma\"");
        assert_eq!(csv_escape("has \"quote\""), "\"has \"\"quote\"\"\"");
        assert_eq!(csv_escape("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(csv_escape(""), "");
    }
}

//! Validate command implementation for the PoI CSV validator
//!
//! This module contains the main validation workflow: configuration loading,
//! per-file validation, and report generation in the supported output formats.

use super::shared::{self, RunStats};
use crate::app::services::poi_csv_validator::{FileReport, PoiCsvValidator, PoiSchema};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::Config;
use crate::constants::SCHEMA_COLUMN_COUNT;
use crate::{Error, Result};
use indicatif::HumanDuration;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Validation outcome for a single input file
#[derive(Debug)]
struct FileResult {
    /// Path as given on the command line
    path: PathBuf,
    /// Full report, or the fault that prevented the file from being read
    report: Result<FileReport>,
}

/// Validate command runner for the PoI CSV validator
///
/// This function orchestrates the validation workflow:
/// 1. Set up logging and load layered configuration
/// 2. Validate each input file against the six-column schema
/// 3. Generate the report in the requested output format
///
/// Files are checked in command-line order. A file that cannot be read is
/// reported as failed and does not stop the run.
pub fn run_validate(args: ValidateArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    // Set up logging
    shared::setup_logging(&args)?;

    info!("Starting points-of-interest CSV validation");
    debug!("Validate arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration (defaults -> file -> environment -> CLI)
    let config = shared::load_configuration(&args)?;
    let format: OutputFormat = config.report.format.parse()?;

    info!(
        "Validating {} file(s) against the {}-column schema",
        args.files.len(),
        SCHEMA_COLUMN_COUNT
    );

    let validator = PoiCsvValidator::new(Arc::new(PoiSchema::standard()));
    let show_progress = args.show_progress() && config.report.progress;

    let (results, mut stats) = validate_files(&validator, &args.files, show_progress);
    stats.elapsed = start_time.elapsed();

    // Generate report
    generate_report(&args, &config, format, &results, &stats)?;

    info!(
        "Validation completed in {:.2}s",
        stats.elapsed.as_secs_f64()
    );

    Ok(stats)
}

/// Validate each input file and aggregate run statistics
fn validate_files(
    validator: &PoiCsvValidator,
    files: &[PathBuf],
    show_progress: bool,
) -> (Vec<FileResult>, RunStats) {
    let mut results = Vec::with_capacity(files.len());
    let mut stats = RunStats::default();

    for path in files {
        let spinner = show_progress
            .then(|| shared::create_spinner(&format!("Validating {}", path.display())));

        let report = validator.validate_file(path);

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match &report {
            Ok(report) => {
                stats.files_checked += 1;
                if report.is_valid() {
                    stats.files_valid += 1;
                } else {
                    stats.files_invalid += 1;
                }
                stats.records_checked += report.stats.records_checked;
                stats.errors_found += report.stats.errors_found;

                debug!(
                    "Checked {}: {} records, {} errors",
                    path.display(),
                    report.stats.records_checked,
                    report.stats.errors_found
                );
            }
            Err(error) => {
                stats.files_failed += 1;
                error!("Skipping {}: {}", path.display(), error);
            }
        }

        results.push(FileResult {
            path: path.clone(),
            report,
        });
    }

    (results, stats)
}

/// Generate validation report based on output format
fn generate_report(
    args: &ValidateArgs,
    config: &Config,
    format: OutputFormat,
    results: &[FileResult],
    stats: &RunStats,
) -> Result<()> {
    let content = match format {
        OutputFormat::Human => build_human_report(config, results, stats),
        OutputFormat::Json => build_json_report(results, stats)?,
        OutputFormat::Csv => build_csv_report(results),
    };

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &content).map_err(|e| {
                Error::report(format!(
                    "Failed to write report to {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Validation report written to: {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }

    Ok(())
}

/// Build the human-readable validation report
fn build_human_report(config: &Config, results: &[FileResult], stats: &RunStats) -> String {
    let mut output = String::from(
        "🔎 PoI CSV Validation Report\n\
         ============================\n\n",
    );

    for result in results {
        match &result.report {
            Ok(report) => {
                if report.is_valid() {
                    output.push_str(&format!(
                        "✅ {}: CSV is valid ({} records checked)\n",
                        result.path.display(),
                        report.stats.records_checked
                    ));
                } else {
                    output.push_str(&format!(
                        "❌ {}: CSV is not valid ({} errors in {} records)\n",
                        result.path.display(),
                        report.stats.errors_found,
                        report.stats.records_checked
                    ));

                    let shown = if config.report.max_errors == 0 {
                        report.errors.len()
                    } else {
                        config.report.max_errors.min(report.errors.len())
                    };

                    for error in &report.errors[..shown] {
                        output.push_str(&format!("   {}\n", error));
                        if !error.row_data.is_empty() {
                            output.push_str(&format!("     {}\n", error.row_data));
                        }
                    }

                    if shown < report.errors.len() {
                        output.push_str(&format!(
                            "   ... and {} more errors\n",
                            report.errors.len() - shown
                        ));
                    }
                }
            }
            Err(error) => {
                output.push_str(&format!("⚠️  {}\n", error));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "📊 Summary: {} of {} files valid\n",
        stats.files_valid,
        stats.files_total()
    ));
    output.push_str(&format!(
        "   • Records checked: {}\n",
        stats.records_checked
    ));
    output.push_str(&format!("   • Errors found: {}\n", stats.errors_found));
    if stats.files_failed > 0 {
        output.push_str(&format!(
            "   • Files that could not be read: {}\n",
            stats.files_failed
        ));
    }
    output.push_str(&format!(
        "   • Elapsed: {}\n",
        HumanDuration(stats.elapsed)
    ));

    output
}

/// Build the JSON validation report for machine consumption
fn build_json_report(results: &[FileResult], stats: &RunStats) -> Result<String> {
    use serde_json::json;

    let json_files: Vec<_> = results
        .iter()
        .map(|result| match &result.report {
            Ok(report) => json!({
                "file": result.path.display().to_string(),
                "status": if report.is_valid() { "valid" } else { "invalid" },
                "lines_scanned": report.stats.lines_scanned,
                "records_checked": report.stats.records_checked,
                "records_valid": report.stats.records_valid,
                "records_invalid": report.stats.records_invalid,
                "errors": report.errors.iter().map(|error| {
                    json!({
                        "line": error.line_number,
                        "kind": error.violation.code(),
                        "column": error.violation.column(),
                        "description": error.description(),
                        "row": error.row_data,
                    })
                }).collect::<Vec<_>>(),
            }),
            Err(error) => json!({
                "file": result.path.display().to_string(),
                "status": "unreadable",
                "reason": error.to_string(),
            }),
        })
        .collect();

    let json_report = json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "files": json_files,
        "summary": {
            "files_checked": stats.files_checked,
            "files_valid": stats.files_valid,
            "files_invalid": stats.files_invalid,
            "files_unreadable": stats.files_failed,
            "records_checked": stats.records_checked,
            "errors_found": stats.errors_found,
            "elapsed_seconds": stats.elapsed.as_secs_f64(),
        },
    });

    serde_json::to_string_pretty(&json_report)
        .map_err(|e| Error::report(format!("Failed to serialize validation report: {}", e)))
}

/// Build the CSV validation report for data analysis
fn build_csv_report(results: &[FileResult]) -> String {
    let mut csv = String::from("file,line,kind,column,description,row\n");

    for result in results {
        match &result.report {
            Ok(report) => {
                for error in &report.errors {
                    csv.push_str(&format!(
                        "{},{},{},{},{},{}\n",
                        shared::csv_escape(&result.path.display().to_string()),
                        error.line_number,
                        error.violation.code(),
                        error.violation.column().unwrap_or(""),
                        shared::csv_escape(&error.description()),
                        shared::csv_escape(&error.row_data),
                    ));
                }
            }
            Err(error) => {
                csv.push_str(&format!(
                    "{},,unreadable,,{},\n",
                    shared::csv_escape(&result.path.display().to_string()),
                    shared::csv_escape(&error.to_string()),
                ));
            }
        }
    }

    csv
}

//! Core validation orchestration and file handling
//!
//! [`PoiCsvValidator`] owns the per-line check sequence: ratings extraction,
//! tokenization, positional field checks, column-count checks, and the
//! ratings check. Files are read line by line; every violation is collected
//! and the scan always continues to the next line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::app::models::{ValidationError, Violation};
use crate::{Error, Result};

use super::fields::validate_field;
use super::line::{TokenizeFault, split_ratings, tokenize_fields};
use super::schema::PoiSchema;
use super::stats::ValidationStats;

/// Outcome of validating one file
///
/// Violations are in file order. A report with an empty error list means
/// the file matched the schema; failure to open or read the file is a
/// system fault and never produces a report at all.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    /// Every violation found, in file order
    pub errors: Vec<ValidationError>,

    /// Per-file counters
    pub stats: ValidationStats,
}

impl FileReport {
    /// True when the file matched the schema everywhere
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Best-effort validator for PoI data files
///
/// Holds the shared column schema; one validator can check any number of
/// files. Validation is idempotent and lines are independent, so the
/// outcome for a line depends only on that line's text.
pub struct PoiCsvValidator {
    schema: Arc<PoiSchema>,
}

impl PoiCsvValidator {
    /// Create a validator over a shared schema
    pub fn new(schema: Arc<PoiSchema>) -> Self {
        Self { schema }
    }

    /// The schema this validator checks against
    pub fn schema(&self) -> &PoiSchema {
        &self.schema
    }

    /// Validate a whole file, collecting every violation
    ///
    /// The file handle lives only for the duration of this call. Line
    /// numbers are 1-based; line 1 is the header, which is counted but
    /// never checked. An unopenable or unreadable file is a system fault
    /// returned as `Err`, distinct from data violations in the report.
    pub fn validate_file(&self, path: &Path) -> Result<FileReport> {
        let file =
            File::open(path).map_err(|e| Error::file_open(path.display().to_string(), e))?;
        let reader = BufReader::new(file);

        let mut errors = Vec::new();
        let mut stats = ValidationStats::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                Error::io(format!("Failed to read '{}'", path.display()), e)
            })?;
            let line_number = index + 1;
            stats.lines_scanned += 1;

            // Line 1 carries column names, not data
            if line_number == 1 {
                continue;
            }

            stats.records_checked += 1;
            let before = errors.len();
            self.validate_line(&line, line_number, &mut errors);
            if errors.len() == before {
                stats.records_valid += 1;
            } else {
                stats.records_invalid += 1;
            }
        }

        stats.errors_found = errors.len();
        debug!(
            "Validated {}: {} records, {} violations",
            path.display(),
            stats.records_checked,
            stats.errors_found
        );

        Ok(FileReport { errors, stats })
    }

    /// Run the full check sequence for one data line
    fn validate_line(&self, line: &str, line_number: usize, errors: &mut Vec<ValidationError>) {
        // Without a `{` the ratings suffix cannot be located and nothing
        // else on the line is trustworthy: one violation, full raw line.
        let Some(split) = split_ratings(line) else {
            errors.push(ValidationError::new(
                line_number,
                Violation::BrokenRatings,
                line,
            ));
            return;
        };

        let (fields, fault) = tokenize_fields(split.prefix);

        let mut field_count = 0;
        let mut aborted = false;
        for field in &fields {
            field_count += 1;
            if field_count > self.schema.len() {
                errors.push(ValidationError::new(
                    line_number,
                    Violation::ExtraColumns,
                    split.prefix,
                ));
                aborted = true;
                break;
            }

            let column = &self.schema.columns()[field_count - 1];
            if !validate_field(field, column) {
                // Not a hard stop: the rest of the row is still scanned
                errors.push(ValidationError::new(
                    line_number,
                    Violation::InvalidColumnValue {
                        column: column.name,
                    },
                    split.prefix,
                ));
            }
        }

        if !aborted {
            if let Some(fault) = fault {
                let violation = match fault {
                    TokenizeFault::EmptyWithinQuote => Violation::MalformedQuotedCell,
                    TokenizeFault::UnterminatedQuote => Violation::UnterminatedQuote,
                };
                errors.push(ValidationError::new(line_number, violation, split.prefix));
                aborted = true;
            }
        }

        // The ratings suffix counts as the final column, so a complete row
        // needs schema size minus one prefix fields. Skipped after a hard
        // stop, where the field count is unreliable.
        if !aborted && field_count + 1 < self.schema.len() {
            errors.push(ValidationError::new(
                line_number,
                Violation::MissingColumns,
                split.prefix,
            ));
        }

        // The ratings check runs whenever extraction succeeded, even for
        // rows aborted above.
        let ratings_column = self.schema.ratings_column();
        if !validate_field(split.ratings, ratings_column) {
            errors.push(ValidationError::new(
                line_number,
                Violation::InvalidColumnValue {
                    column: ratings_column.name,
                },
                split.prefix,
            ));
        }
    }
}

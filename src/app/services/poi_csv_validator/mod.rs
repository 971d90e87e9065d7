//! PoI CSV validator for points-of-interest data files
//!
//! This module provides a best-effort validator for the PoI delimited format:
//! six fixed columns where the final one, poi_ratings, is a brace-delimited
//! structure occupying the rest of the line from the last `{`. The validator
//! never stops at the first problem; it collects every violation in the file
//! with its line number and row text.
//!
//! ## Architecture
//!
//! The validator is organized into logical components:
//! - [`validator`] - File-level orchestration and the per-line check sequence
//! - [`schema`] - The fixed six-column schema definition
//! - [`line`] - Ratings extraction and quote-aware tokenization
//! - [`fields`] - The pure field-against-column predicate
//! - [`stats`] - Per-file counters and result structures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use poi_validator::app::services::poi_csv_validator::{PoiCsvValidator, PoiSchema};
//!
//! # fn example() -> poi_validator::Result<()> {
//! let validator = PoiCsvValidator::new(Arc::new(PoiSchema::standard()));
//! let report = validator.validate_file(std::path::Path::new("pois.csv"))?;
//!
//! println!("{} violations in {} records",
//!          report.errors.len(),
//!          report.stats.records_checked);
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod line;
pub mod schema;
pub mod stats;
pub mod validator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use schema::PoiSchema;
pub use stats::ValidationStats;
pub use validator::{FileReport, PoiCsvValidator};

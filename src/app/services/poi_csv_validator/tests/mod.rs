//! Test utilities for PoI validator testing
//!
//! This module provides fixture builders and helper functions used across
//! the line and validator test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// The standard header line of a PoI export
pub const POI_HEADER: &str = "poi_id,poi_name,poi_category,poi_latitude,poi_longitude,poi_ratings";

/// A row that satisfies every column check
pub const VALID_ROW: &str = "1,Central Cafe,Food,40.7128,-74.0060,{\"stars\": 4}";

/// Helper to build complete file content from data rows, header prepended
pub fn poi_file(rows: &[&str]) -> String {
    let mut content = String::from(POI_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}

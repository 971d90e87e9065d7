//! Field-level validation predicate
//!
//! A field is checked against exactly one column spec and the answer is a
//! plain boolean; callers attach the line number, column name and row text
//! when they record a violation.

use crate::app::models::{ColumnSpec, ColumnType};

/// Decide whether a raw field value satisfies a column spec
///
/// The empty string is invalid for every column type (a missing value).
/// Numeric columns require the entire string to parse: leading whitespace
/// and a sign are tolerated, any trailing character is not, so "12abc",
/// "1.5" (for Integer) and "40.0 " are all rejected. String columns are
/// checked against their maximum byte length only.
pub fn validate_field(value: &str, spec: &ColumnSpec) -> bool {
    if value.is_empty() {
        return false;
    }

    match spec.column_type {
        ColumnType::Integer => parses_as_integer(value),
        ColumnType::Float => parses_as_float(value),
        ColumnType::String => spec.max_length.is_none_or(|max| value.len() <= max),
    }
}

/// Full-string base-10 integer check, leading whitespace tolerated
fn parses_as_integer(value: &str) -> bool {
    value.trim_start().parse::<i64>().is_ok()
}

/// Full-string float literal check, leading whitespace tolerated
fn parses_as_float(value: &str) -> bool {
    value.trim_start().parse::<f64>().is_ok()
}

//! Data models for PoI validation
//!
//! This module contains the core data structures describing the PoI column
//! schema and the violations reported for a data file.

use std::fmt;

// =============================================================================
// Column Schema Types
// =============================================================================

/// Value type of a schema column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Whole base-10 number, optional sign, no unparsed suffix
    Integer,
    /// Floating-point literal, no unparsed suffix
    Float,
    /// Free text bounded only by a maximum length
    String,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "Integer"),
            ColumnType::Float => write!(f, "Float"),
            ColumnType::String => write!(f, "String"),
        }
    }
}

/// Definition of a single schema column
///
/// Column names are fixed for the lifetime of the process, so they are held
/// as static string slices and shared freely into reported violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name as it appears in error descriptions
    pub name: &'static str,

    /// Expected value type
    pub column_type: ColumnType,

    /// Maximum byte length; only meaningful for String columns
    pub max_length: Option<usize>,
}

impl ColumnSpec {
    /// Create an Integer column
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Integer,
            max_length: None,
        }
    }

    /// Create a Float column
    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Float,
            max_length: None,
        }
    }

    /// Create a String column with a maximum byte length
    pub const fn string(name: &'static str, max_length: usize) -> Self {
        Self {
            name,
            column_type: ColumnType::String,
            max_length: Some(max_length),
        }
    }

    /// Human-readable type description, e.g. "String (max 100)"
    pub fn type_description(&self) -> String {
        match self.max_length {
            Some(max) => format!("{} (max {})", self.column_type, max),
            None => self.column_type.to_string(),
        }
    }
}

// =============================================================================
// Violations
// =============================================================================

/// Classification of a single data violation
///
/// Every variant is a data error collected into the file report; none of
/// them aborts the scan of the rest of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A field failed its column check (missing, wrong format, or too long)
    InvalidColumnValue { column: &'static str },

    /// No `{` anywhere on the line, so the ratings suffix cannot be located
    BrokenRatings,

    /// Empty token while accumulating a quoted field
    MalformedQuotedCell,

    /// Line ended while still accumulating a quoted field
    UnterminatedQuote,

    /// More fields than the schema has columns
    ExtraColumns,

    /// Fewer fields than the schema requires
    MissingColumns,
}

impl Violation {
    /// Stable identifier used in machine-readable reports
    pub fn code(&self) -> &'static str {
        match self {
            Violation::InvalidColumnValue { .. } => "invalid_value",
            Violation::BrokenRatings => "broken_ratings",
            Violation::MalformedQuotedCell => "malformed_quoted_cell",
            Violation::UnterminatedQuote => "unterminated_quote",
            Violation::ExtraColumns => "extra_columns",
            Violation::MissingColumns => "missing_columns",
        }
    }

    /// Name of the offending column, when one is known
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Violation::InvalidColumnValue { column } => Some(column),
            _ => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidColumnValue { column } => {
                write!(f, "Invalid value in column {}", column)
            }
            Violation::BrokenRatings => write!(f, "Broken or missing poi_ratings"),
            Violation::MalformedQuotedCell => {
                write!(f, "Invalid cell format: empty string inside quoted cell")
            }
            Violation::UnterminatedQuote => write!(f, "Unterminated quoted value"),
            Violation::ExtraColumns => write!(f, "Extra columns"),
            Violation::MissingColumns => write!(f, "Missing columns"),
        }
    }
}

// =============================================================================
// Validation Error Record
// =============================================================================

/// A single violation located in a data file
///
/// Line numbers are 1-based and count the header line, so the first data
/// line is line 2. Row data is the line text at the time the violation was
/// detected: the full raw line for broken ratings (detected before
/// extraction), the post-extraction prefix for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// 1-based line number within the file, header included in the count
    pub line_number: usize,

    /// What went wrong
    pub violation: Violation,

    /// Row text at the time of detection
    pub row_data: String,
}

impl ValidationError {
    /// Create a validation error for a line
    pub fn new(line_number: usize, violation: Violation, row_data: impl Into<String>) -> Self {
        Self {
            line_number,
            violation,
            row_data: row_data.into(),
        }
    }

    /// Human-readable description, naming the offending column when known
    pub fn description(&self) -> String {
        self.violation.to_string()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.violation)
    }
}

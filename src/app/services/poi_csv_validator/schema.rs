//! Fixed PoI column schema
//!
//! The schema is not configurable: every PoI export carries the same six
//! columns in the same order. It is built once at startup and shared into
//! the validator behind an `Arc` so any caller holds the same table.

use crate::app::models::ColumnSpec;
use crate::constants::{
    POI_CATEGORY_MAX_LENGTH, POI_NAME_MAX_LENGTH, POI_RATINGS_MAX_LENGTH, columns,
};

/// The six-column PoI schema, in file order
///
/// The final column, poi_ratings, is positionally special: its value is the
/// brace-delimited suffix of the line rather than an ordinary comma token,
/// but it is validated with the same String rules as any other column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoiSchema {
    columns: [ColumnSpec; 6],
}

impl PoiSchema {
    /// Build the standard PoI schema
    pub fn standard() -> Self {
        Self {
            columns: [
                ColumnSpec::integer(columns::POI_ID),
                ColumnSpec::string(columns::POI_NAME, POI_NAME_MAX_LENGTH),
                ColumnSpec::string(columns::POI_CATEGORY, POI_CATEGORY_MAX_LENGTH),
                ColumnSpec::float(columns::POI_LATITUDE),
                ColumnSpec::float(columns::POI_LONGITUDE),
                ColumnSpec::string(columns::POI_RATINGS, POI_RATINGS_MAX_LENGTH),
            ],
        }
    }

    /// All columns in file order
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Column at a 0-based position
    pub fn column(&self, index: usize) -> Option<&ColumnSpec> {
        self.columns.get(index)
    }

    /// Number of columns (the ratings suffix counts as the last)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True only for a schema with no columns; the standard schema never is
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The final column spec, which governs the ratings suffix
    pub fn ratings_column(&self) -> &ColumnSpec {
        &self.columns[self.columns.len() - 1]
    }
}

impl Default for PoiSchema {
    fn default() -> Self {
        Self::standard()
    }
}

//! Application constants for the PoI validator
//!
//! This module contains the fixed schema limits, format characters,
//! and default values used throughout the validator.

// =============================================================================
// PoI Record Format
// =============================================================================

/// Field delimiter in PoI data files
pub const FIELD_DELIMITER: char = ',';

/// Quote character opening an accumulated field
pub const QUOTE_CHAR: char = '"';

/// Opening brace of the ratings suffix; the suffix runs from the last
/// occurrence on a line to the end of that line
pub const RATINGS_OPEN_BRACE: char = '{';

/// Number of columns in the PoI schema (the ratings suffix is the last)
pub const SCHEMA_COLUMN_COUNT: usize = 6;

/// Column names in file order
pub mod columns {
    pub const POI_ID: &str = "poi_id";
    pub const POI_NAME: &str = "poi_name";
    pub const POI_CATEGORY: &str = "poi_category";
    pub const POI_LATITUDE: &str = "poi_latitude";
    pub const POI_LONGITUDE: &str = "poi_longitude";
    pub const POI_RATINGS: &str = "poi_ratings";
}

/// Maximum byte length of a poi_name value
pub const POI_NAME_MAX_LENGTH: usize = 100;

/// Maximum byte length of a poi_category value
pub const POI_CATEGORY_MAX_LENGTH: usize = 50;

/// Maximum byte length of a poi_ratings value (braces included)
pub const POI_RATINGS_MAX_LENGTH: usize = 75;

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default report output format
pub const DEFAULT_REPORT_FORMAT: &str = "human";

/// Default cap on errors shown in the human report (0 = unlimited)
pub const DEFAULT_MAX_ERRORS: usize = 0;

/// Default log level when neither CLI flags nor environment override it
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Directory name under the platform config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "poi-validator";

/// Config file name within the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "POI_VALIDATOR_LOG_LEVEL";

/// Environment variable overriding the report format
pub const ENV_REPORT_FORMAT: &str = "POI_VALIDATOR_REPORT_FORMAT";

/// Environment variable overriding the error display cap
pub const ENV_MAX_ERRORS: &str = "POI_VALIDATOR_MAX_ERRORS";

// =============================================================================
// Process Exit Codes
// =============================================================================

/// All inputs validated clean
pub const EXIT_SUCCESS: i32 = 0;

/// At least one input had validation errors or could not be read
pub const EXIT_INVALID_DATA: i32 = 1;

/// System fault (configuration, report writing, ...)
pub const EXIT_FAILURE: i32 = 2;

//! Command implementations for the PoI validator CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod schema;
pub mod shared;
pub mod validate;

// Re-export the main types used by the binary entry point
pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the PoI validator
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `validate`: file validation workflow with report output
/// - `schema`: expected column layout reference
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
        Commands::Schema(schema_args) => schema::run_schema(schema_args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_re_export() {
        // Verify that RunStats is properly re-exported
        let stats = RunStats::default();
        assert_eq!(stats.files_checked, 0);
        assert!(stats.is_success());
    }
}

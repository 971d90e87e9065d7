//! Schema command implementation for the PoI CSV validator
//!
//! Prints the expected column layout so export problems can be fixed
//! without digging through validation errors one at a time.

use super::shared::{RunStats, csv_escape};
use crate::app::services::poi_csv_validator::PoiSchema;
use crate::cli::args::{OutputFormat, SchemaArgs};
use crate::{Error, Result};
use colored::*;

/// Schema command runner for the PoI CSV validator
///
/// Prints the six expected columns with their types and length limits in
/// the requested output format.
pub fn run_schema(args: SchemaArgs) -> Result<RunStats> {
    let schema = PoiSchema::standard();

    let content = match args.output_format {
        OutputFormat::Human => build_human_schema(&schema),
        OutputFormat::Json => build_json_schema(&schema)?,
        OutputFormat::Csv => build_csv_schema(&schema),
    };
    println!("{}", content);

    Ok(RunStats::default())
}

/// Build the human-readable column listing
fn build_human_schema(schema: &PoiSchema) -> String {
    let mut output = format!(
        "{}\n\n",
        "Points-of-interest CSV schema".bright_green().bold()
    );

    output.push_str(&format!(
        "Each data row has {} columns. The final column is the ratings cell,\n\
         which starts at the last '{{' on the line and runs to the end.\n\n",
        schema.len()
    ));

    for (index, column) in schema.columns().iter().enumerate() {
        output.push_str(&format!(
            "  {}. {:<15} {}\n",
            index + 1,
            column.name.bright_cyan(),
            column.type_description()
        ));
    }

    output
}

/// Build the JSON column listing for machine consumption
fn build_json_schema(schema: &PoiSchema) -> Result<String> {
    use serde_json::json;

    let columns: Vec<_> = schema
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            json!({
                "position": index + 1,
                "name": column.name,
                "type": column.column_type.to_string(),
                "max_length": column.max_length,
            })
        })
        .collect();

    let report = json!({
        "column_count": schema.len(),
        "columns": columns,
    });

    serde_json::to_string_pretty(&report)
        .map_err(|e| Error::report(format!("Failed to serialize schema listing: {}", e)))
}

/// Build the CSV column listing
fn build_csv_schema(schema: &PoiSchema) -> String {
    let mut csv = String::from("position,name,type,max_length\n");

    for (index, column) in schema.columns().iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            index + 1,
            csv_escape(column.name),
            column.column_type,
            column
                .max_length
                .map(|max| max.to_string())
                .unwrap_or_default()
        ));
    }

    csv
}

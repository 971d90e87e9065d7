use clap::Parser;
use poi_validator::cli::{args::Args, commands};
use poi_validator::constants::{EXIT_FAILURE, EXIT_INVALID_DATA, EXIT_SUCCESS};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(EXIT_SUCCESS);
    }

    match commands::run(args) {
        Ok(stats) => {
            // The report has already been emitted by the command; the exit
            // code tells scripts whether the data passed validation.
            if stats.is_success() {
                process::exit(EXIT_SUCCESS);
            } else {
                process::exit(EXIT_INVALID_DATA);
            }
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(EXIT_FAILURE);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("PoI Validator - Points-of-Interest CSV Checker");
    println!("==============================================");
    println!();
    println!("Validate points-of-interest CSV exports against the standard six-column");
    println!("schema and report every invalid row with its line number.");
    println!();
    println!("USAGE:");
    println!("    poi-validator <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Validate CSV files against the schema (main command)");
    println!("    schema      Print the expected column layout");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXIT CODES:");
    println!("    0    Every file was read and every record passed validation");
    println!("    1    A record failed validation or a file could not be read");
    println!("    2    The run itself failed (bad arguments or configuration)");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate a single export:");
    println!("    poi-validator validate pois.csv");
    println!();
    println!("    # Validate several files and write a JSON report:");
    println!("    poi-validator validate north.csv south.csv --format json -o report.json");
    println!();
    println!("    # Show the expected columns:");
    println!("    poi-validator schema");
    println!();
    println!("For detailed help on any command, use:");
    println!("    poi-validator <COMMAND> --help");
}

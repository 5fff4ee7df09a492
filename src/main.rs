// ==========================================
// Compliance Import - CLI Entry Point
// ==========================================
// Validates a CSV file against an import schema and prints a
// per-row report, mirroring the product's import preview flow.
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use compliance_import::{
    all_import_schemas, generate_template_csv, logging, validate_import_data, CsvParser,
    ImportDataType, ImportSummary, RowStatus,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "compliance-import")]
#[command(about = "Bulk CSV import validation for kitchen compliance data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the importable data types
    List,

    /// Print the downloadable template CSV for a data type
    Template {
        /// Data type token (e.g. equipment, vendors, temperature_logs)
        data_type: ImportDataType,
    },

    /// Validate a CSV file and print the per-row report
    Validate {
        /// Data type token (e.g. equipment, vendors, temperature_logs)
        data_type: ImportDataType,

        /// CSV file to validate
        file: PathBuf,

        /// File of already-persisted identifiers, one per line, used
        /// for against-existing duplicate warnings
        #[arg(long)]
        existing: Option<PathBuf>,

        /// Emit the full summary as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    logging::init();

    match run(Cli::parse()) {
        Ok(has_error_rows) => {
            if has_error_rows {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the validated batch contained any error rows.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::List => {
            for schema in all_import_schemas() {
                println!("{:<18} {}", schema.data_type.to_string(), schema.description);
            }
            Ok(false)
        }

        Commands::Template { data_type } => {
            println!("{}", generate_template_csv(data_type));
            Ok(false)
        }

        Commands::Validate {
            data_type,
            file,
            existing,
            json,
        } => {
            let existing_names = match existing {
                Some(path) => read_existing_names(&path)?,
                None => Vec::new(),
            };

            let rows = CsvParser::parse_records(&file)?;
            let summary = validate_import_data(data_type, &rows, &existing_names);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_report(&summary);
            }
            Ok(summary.errors > 0)
        }
    }
}

/// One identifier per line; blank lines ignored.
fn read_existing_names(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading existing names from {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn print_report(summary: &ImportSummary) {
    for result in &summary.results {
        let marker = match result.status {
            RowStatus::Valid => "ok  ",
            RowStatus::Warning => "warn",
            RowStatus::Error => "FAIL",
        };
        println!("row {:>4} [{marker}]", result.row);
        for error in &result.errors {
            println!("           error: {error}");
        }
        for warning in &result.warnings {
            println!("           warning: {warning}");
        }
    }

    println!(
        "\n{} rows: {} valid, {} warnings, {} errors ({} importable)",
        summary.total,
        summary.valid,
        summary.warnings,
        summary.errors,
        summary.importable()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_with_options() {
        let cli = Cli::parse_from([
            "compliance-import",
            "validate",
            "equipment",
            "upload.csv",
            "--existing",
            "names.txt",
            "--json",
        ]);

        match cli.command {
            Commands::Validate {
                data_type,
                file,
                existing,
                json,
            } => {
                assert_eq!(data_type, ImportDataType::Equipment);
                assert_eq!(file, PathBuf::from("upload.csv"));
                assert_eq!(existing, Some(PathBuf::from("names.txt")));
                assert!(json);
            }
            _ => panic!("expected validate subcommand"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_data_type() {
        let result = Cli::try_parse_from(["compliance-import", "template", "recipes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_option() {
        let result = Cli::try_parse_from([
            "compliance-import",
            "validate",
            "equipment",
            "upload.csv",
            "--force",
        ]);
        assert!(result.is_err());
    }
}

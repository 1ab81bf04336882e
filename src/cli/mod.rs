// CLI module
// Command-line interface, argument parsing and the run pipeline

mod args;

pub use args::{CliArgs, OutputFormat};

use crate::core::analyze_sales_data;
use crate::io::{load_dataset, load_options, write_reports_csv, write_reports_json};
use crate::strategy::AnalysisOptions;
use crate::types::ReportError;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments, missing required arguments, or
/// --help flag), clap will automatically display an error message or help
/// text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Load the inputs named by `args`, analyze them and write the reports
///
/// # Returns
///
/// * `Ok(())` if the reports were written
/// * `Err(ReportError)` if loading, validation or writing failed; nothing is
///   written to `output` when loading or validation fails
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), ReportError> {
    let dataset = load_dataset(&args.input_file)?;
    let options = match &args.options_file {
        Some(path) => load_options(path)?,
        None => AnalysisOptions::default(),
    };

    let reports = analyze_sales_data(&dataset, &options)?;

    match args.format {
        OutputFormat::Csv => write_reports_csv(&reports, output),
        OutputFormat::Json => write_reports_json(&reports, output),
    }
}

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute per-seller sales reports ranked by profit
#[derive(Parser, Debug)]
#[command(name = "sales-report")]
#[command(about = "Compute per-seller sales reports ranked by profit", long_about = None)]
pub struct CliArgs {
    /// Input JSON file containing sellers, products and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input dataset JSON file")]
    pub input_file: PathBuf,

    /// Options JSON file naming the revenue and bonus strategies
    #[arg(
        long = "options",
        value_name = "FILE",
        help = "Path to an options JSON file (default: simple revenue, bonus by profit)"
    )]
    pub options_file: Option<PathBuf>,

    /// Output format for the reports
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Output format: 'csv' or 'json'"
    )]
    pub format: OutputFormat,
}

/// Available report output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

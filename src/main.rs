//! Sales Report CLI
//!
//! Command-line interface for computing seller performance reports from a
//! JSON dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- dataset.json > report.csv
//! cargo run -- --format json dataset.json > report.json
//! cargo run -- --options options.json dataset.json > report.csv
//! RUST_LOG=debug cargo run -- dataset.json > report.csv
//! ```
//!
//! Reports go to stdout; logs and errors go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid dataset, invalid options, etc.)

use sales_report_engine::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

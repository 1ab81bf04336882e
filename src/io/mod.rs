//! I/O module
//!
//! Handles JSON input and report output.
//!
//! # Components
//!
//! - `json_format` - JSON decoding with shape checks, JSON report output
//! - `csv_format` - CSV report output
//! - `loader` - Reading datasets and options from files

pub mod csv_format;
pub mod json_format;
pub mod loader;

pub use csv_format::write_reports_csv;
pub use json_format::{parse_dataset, parse_options, write_reports_json};
pub use loader::{load_dataset, load_options};

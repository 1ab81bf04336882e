//! File loading for datasets and options
//!
//! Reads a whole JSON document from disk and hands it to
//! [`json_format`](crate::io::json_format) for decoding. Datasets are held in
//! memory in full; there is no streaming.
//!
//! ```no_run
//! use sales_report_engine::io::loader::load_dataset;
//! use std::path::Path;
//!
//! match load_dataset(Path::new("dataset.json")) {
//!     Ok(dataset) => println!("{} sellers loaded", dataset.sellers.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use crate::io::json_format::{parse_dataset, parse_options};
use crate::strategy::AnalysisOptions;
use crate::types::{Dataset, ReportError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Load a dataset from a JSON file
///
/// # Returns
///
/// * `Ok(Dataset)` if the file was read and decoded
/// * `Err(ReportError::FileNotFound)` if the file does not exist
/// * `Err(ReportError)` for read, parse and shape errors
pub fn load_dataset(path: &Path) -> Result<Dataset, ReportError> {
    let contents = read_file(path)?;
    let dataset = parse_dataset(&contents)?;
    debug!(
        path = %path.display(),
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        purchase_records = dataset.purchase_records.len(),
        "Loaded dataset"
    );
    Ok(dataset)
}

/// Load an options bundle from a JSON file
pub fn load_options(path: &Path) -> Result<AnalysisOptions, ReportError> {
    let contents = read_file(path)?;
    parse_options(&contents)
}

fn read_file(path: &Path) -> Result<String, ReportError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => e.into(),
    })
}

//! Error types for the Sales Report Engine
//!
//! This module defines all error types that can occur while loading a dataset
//! and producing seller reports. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: malformed dataset, malformed options, missing strategies.
//!   These abort an analysis before any aggregation state is built.
//! - **Arithmetic Errors**: a running total or strategy result that does not
//!   fit in a `Decimal`. The analysis is aborted and no report is produced.
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parsing/Writing Errors**: JSON that cannot be read, CSV that cannot be written
//!
//! Dangling seller or sku references inside purchase records are not errors;
//! the aggregator skips them.

use thiserror::Error;

/// Main error type for the sales report engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The dataset is absent, is not an object, or one of its collections
    /// is missing, not a sequence, or empty
    #[error("Invalid dataset: {reason}")]
    InvalidDataset {
        /// What is wrong with the dataset
        reason: String,
    },

    /// The options bundle is absent or not a structured object
    #[error("Invalid options: {reason}")]
    InvalidOptions {
        /// What is wrong with the options
        reason: String,
    },

    /// A required strategy is absent or cannot be invoked
    #[error("Missing strategy: {name} is not an invocable strategy")]
    MissingStrategy {
        /// Options field naming the strategy
        name: String,
    },

    /// Arithmetic overflow while computing a seller's figures
    #[error("Arithmetic overflow in {operation} for seller {seller_id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Seller whose figures overflowed
        seller_id: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input could not be parsed or output could not be serialized
    #[error("Parse error: {message}")]
    ParseError {
        /// Description of the parse error
        message: String,
    },
}

// Conversion from io::Error to ReportError
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ReportError
impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to ReportError
impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return ReportError::IoError {
                message: error.to_string(),
            };
        }
        ReportError::ParseError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create an InvalidDataset error
    pub fn invalid_dataset(reason: impl Into<String>) -> Self {
        ReportError::InvalidDataset {
            reason: reason.into(),
        }
    }

    /// Create an InvalidOptions error
    pub fn invalid_options(reason: impl Into<String>) -> Self {
        ReportError::InvalidOptions {
            reason: reason.into(),
        }
    }

    /// Create a MissingStrategy error
    pub fn missing_strategy(name: &str) -> Self {
        ReportError::MissingStrategy {
            name: name.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, seller_id: &str) -> Self {
        ReportError::ArithmeticOverflow {
            operation: operation.to_string(),
            seller_id: seller_id.to_string(),
        }
    }
}

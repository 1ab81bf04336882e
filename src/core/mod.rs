//! Core business logic module
//!
//! This module contains the sales analysis pipeline, one stage per module:
//! - `validator` - Up-front dataset and strategy checks
//! - `aggregator` - Per-seller running totals over all purchase records
//! - `ranker` - Profit ordering, bonus assignment and top products
//! - `projector` - Rounded output records
//! - `analyzer` - The entry point chaining the stages together

pub mod aggregator;
pub mod analyzer;
pub mod projector;
pub mod ranker;
pub mod validator;

pub use aggregator::{AggregationSummary, Aggregator};
pub use analyzer::analyze_sales_data;
pub use ranker::TOP_PRODUCTS_LIMIT;

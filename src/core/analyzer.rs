//! Sales analysis entry point
//!
//! This module provides `analyze_sales_data`, which runs the whole pipeline
//! by coordinating the four stages in strict sequence:
//!
//! ```text
//! validate → aggregate → rank → project
//! ```
//!
//! Validation failures abort before any state is built. Otherwise every
//! input seller yields exactly one report, ordered by descending profit.

use crate::core::{aggregator, projector, ranker, validator};
use crate::strategy::AnalysisOptions;
use crate::types::{Dataset, ReportError, SellerReport};
use tracing::info;

/// Compute per-seller sales reports for `dataset`
///
/// # Arguments
///
/// * `dataset` - Sellers, products and purchase records to analyze
/// * `options` - Revenue and bonus strategies to apply
///
/// # Returns
///
/// * `Ok(Vec<SellerReport>)` - one report per input seller, by descending profit
/// * `Err(ReportError)` - the dataset or options failed validation, or a
///   seller's figures overflowed
///
/// # Examples
///
/// ```no_run
/// use sales_report_engine::{analyze_sales_data, AnalysisOptions, Dataset};
///
/// let dataset: Dataset = serde_json::from_str(r#"{"sellers":[],"products":[],"purchase_records":[]}"#).unwrap();
/// match analyze_sales_data(&dataset, &AnalysisOptions::default()) {
///     Ok(reports) => println!("{} sellers ranked", reports.len()),
///     Err(e) => eprintln!("Analysis failed: {}", e),
/// }
/// ```
pub fn analyze_sales_data(
    dataset: &Dataset,
    options: &AnalysisOptions,
) -> Result<Vec<SellerReport>, ReportError> {
    let strategies = validator::validate(dataset, options)?;

    let (mut sellers, summary) = aggregator::aggregate(dataset, strategies.revenue)?;
    info!(
        sellers = sellers.len(),
        records_processed = summary.records_processed,
        records_skipped = summary.records_skipped,
        items_skipped = summary.items_skipped,
        "Aggregated purchase records"
    );

    ranker::rank(&mut sellers, strategies.bonus)?;

    Ok(projector::project_all(sellers))
}

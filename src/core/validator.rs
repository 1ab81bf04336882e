//! Up-front input validation
//!
//! Runs before any aggregation state exists. A dataset with an empty
//! collection or an options bundle with a missing strategy aborts the whole
//! analysis with a single error; nothing is partially computed.
//!
//! Shape problems that only exist in untyped input (absent dataset, a
//! collection that is not a sequence, options that are not an object) are
//! caught earlier, where JSON is decoded in [`crate::io::json_format`].

use crate::strategy::{AnalysisOptions, BonusStrategy, RevenueStrategy, BONUS_FIELD, REVENUE_FIELD};
use crate::types::{Dataset, ReportError};

/// Strategies extracted from a validated [`AnalysisOptions`]
#[derive(Clone, Copy)]
pub struct Strategies<'a> {
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
}

/// Validate the dataset and options of an analysis run
///
/// The dataset is checked first, then the options; the first problem found is
/// returned.
///
/// # Returns
///
/// * `Ok(Strategies)` - both strategies, borrowed from `options`
/// * `Err(ReportError::InvalidDataset)` - sellers, products or purchase records is empty
/// * `Err(ReportError::MissingStrategy)` - a strategy is not provided
pub fn validate<'a>(
    dataset: &Dataset,
    options: &'a AnalysisOptions,
) -> Result<Strategies<'a>, ReportError> {
    validate_dataset(dataset)?;

    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| ReportError::missing_strategy(REVENUE_FIELD))?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| ReportError::missing_strategy(BONUS_FIELD))?;

    Ok(Strategies { revenue, bonus })
}

fn validate_dataset(dataset: &Dataset) -> Result<(), ReportError> {
    let collections = [
        ("sellers", dataset.sellers.is_empty()),
        ("products", dataset.products.is_empty()),
        ("purchase_records", dataset.purchase_records.is_empty()),
    ];

    match collections.iter().find(|(_, empty)| *empty) {
        Some((name, _)) => Err(ReportError::invalid_dataset(format!("{} is empty", name))),
        None => Ok(()),
    }
}

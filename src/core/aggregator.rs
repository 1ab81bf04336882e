//! Per-seller aggregation
//!
//! This module provides the `Aggregator`, which owns one [`SellerAggregate`]
//! per input seller and folds every purchase record into them in a single
//! pass.
//!
//! The Aggregator is responsible for:
//! - Indexing sellers by id and products by sku for O(1) lookup
//! - Attributing each purchase record to its seller (count and stated revenue)
//! - Computing per-line-item profit through the injected revenue strategy
//! - Accumulating quantities sold per sku
//!
//! # Dangling References
//!
//! A purchase record whose seller is unknown is skipped entirely. A line item
//! whose sku is unknown is skipped on its own; the rest of its record, and
//! the record's count and revenue, still apply. Neither case is an error.
//!
//! # Overflow
//!
//! Revenue, cost and profit are computed with checked arithmetic. A value
//! that does not fit in a `Decimal` fails the pass with
//! [`ReportError::ArithmeticOverflow`] instead of panicking.

use crate::strategy::RevenueStrategy;
use crate::types::{Dataset, Product, PurchaseRecord, ReportError, SellerAggregate};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Counters describing what an aggregation pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// Records attributed to a known seller
    pub records_processed: usize,
    /// Records skipped because their seller is unknown
    pub records_skipped: usize,
    /// Line items skipped because their sku is unknown
    pub items_skipped: usize,
}

/// Folds purchase records into per-seller aggregates
pub struct Aggregator<'a> {
    /// One aggregate per input seller, in input order
    sellers: Vec<SellerAggregate>,

    /// Seller id to position in `sellers`
    seller_index: HashMap<&'a str, usize>,

    /// Sku to product
    product_index: HashMap<&'a str, &'a Product>,

    revenue_strategy: &'a dyn RevenueStrategy,

    summary: AggregationSummary,
}

impl<'a> Aggregator<'a> {
    /// Create an Aggregator with zeroed aggregates for every seller of `dataset`
    ///
    /// When ids or skus are duplicated, lookups resolve to the last occurrence.
    /// Every input seller still gets its own aggregate.
    pub fn new(dataset: &'a Dataset, revenue_strategy: &'a dyn RevenueStrategy) -> Self {
        let sellers: Vec<SellerAggregate> =
            dataset.sellers.iter().map(SellerAggregate::new).collect();

        let seller_index = dataset
            .sellers
            .iter()
            .enumerate()
            .map(|(position, seller)| (seller.id.as_str(), position))
            .collect();

        let product_index = dataset
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        Aggregator {
            sellers,
            seller_index,
            product_index,
            revenue_strategy,
            summary: AggregationSummary::default(),
        }
    }

    /// Fold a single purchase record into its seller's aggregate
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the record was attributed to a known seller
    /// * `Ok(false)` - the record was skipped
    /// * `Err(ReportError)` - a revenue, cost or profit computation overflowed
    ///
    /// On error the seller's aggregate is left as it was before the record.
    pub fn process(&mut self, record: &PurchaseRecord) -> Result<bool, ReportError> {
        let Some(&position) = self.seller_index.get(record.seller_id.as_str()) else {
            debug!(
                seller_id = %record.seller_id,
                "Skipping purchase record for unknown seller"
            );
            self.summary.records_skipped += 1;
            return Ok(false);
        };

        let seller_id = record.seller_id.as_str();
        let seller = &self.sellers[position];

        let new_revenue = seller
            .revenue
            .checked_add(record.total_amount)
            .ok_or_else(|| ReportError::arithmetic_overflow("revenue", seller_id))?;

        let mut new_profit = seller.profit;
        let mut sold = Vec::with_capacity(record.items.len());

        for item in &record.items {
            let Some(product) = self.product_index.get(item.sku.as_str()) else {
                debug!(
                    seller_id = %record.seller_id,
                    sku = %item.sku,
                    "Skipping line item for unknown product"
                );
                self.summary.items_skipped += 1;
                continue;
            };

            let cost = product
                .purchase_price
                .checked_mul(Decimal::from(item.quantity))
                .ok_or_else(|| ReportError::arithmetic_overflow("cost", seller_id))?;

            let revenue = self
                .revenue_strategy
                .calculate_revenue(item, product)
                .ok_or_else(|| ReportError::arithmetic_overflow("line revenue", seller_id))?;

            new_profit = revenue
                .checked_sub(cost)
                .and_then(|margin| new_profit.checked_add(margin))
                .ok_or_else(|| ReportError::arithmetic_overflow("profit", seller_id))?;

            sold.push(item);
        }

        // Update the aggregate only once every item has been computed
        let seller = &mut self.sellers[position];
        seller.sales_count += 1;
        seller.revenue = new_revenue;
        seller.profit = new_profit;
        for item in sold {
            seller.record_quantity(&item.sku, item.quantity);
        }

        self.summary.records_processed += 1;
        Ok(true)
    }

    /// Counters accumulated so far
    pub fn summary(&self) -> AggregationSummary {
        self.summary
    }

    /// Current aggregate for a seller id
    pub fn get(&self, seller_id: &str) -> Option<&SellerAggregate> {
        self.seller_index
            .get(seller_id)
            .map(|&position| &self.sellers[position])
    }

    /// Consume the Aggregator, yielding aggregates in input seller order
    pub fn into_aggregates(self) -> Vec<SellerAggregate> {
        self.sellers
    }
}

/// Aggregate every purchase record of `dataset`
///
/// # Returns
///
/// One aggregate per input seller, in input order, along with the pass summary
///
/// # Errors
///
/// Returns [`ReportError::ArithmeticOverflow`] on the first record whose
/// figures overflow
pub fn aggregate(
    dataset: &Dataset,
    revenue_strategy: &dyn RevenueStrategy,
) -> Result<(Vec<SellerAggregate>, AggregationSummary), ReportError> {
    let mut aggregator = Aggregator::new(dataset, revenue_strategy);

    for record in &dataset.purchase_records {
        aggregator.process(record)?;
    }

    let summary = aggregator.summary();
    Ok((aggregator.into_aggregates(), summary))
}

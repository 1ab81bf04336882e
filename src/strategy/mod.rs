//! Pluggable scoring strategies
//!
//! The analysis pipeline never hardcodes how a line item's revenue or a
//! seller's bonus is computed. Both are injected through [`AnalysisOptions`]
//! as trait objects, and can be either one of the reference implementations
//! below or any closure with the matching signature.
//!
//! # Reference Strategies
//!
//! - [`SimpleRevenue`] (`"simple"`): `sale_price × quantity × (1 − discount/100)`
//! - [`ProfitRankBonus`] (`"by_profit"`): 15% / 10% / 10% / 5% … / 0% of profit by rank

use crate::types::{LineItem, Product, SellerAggregate};
use rust_decimal::Decimal;
use std::fmt;

pub mod bonus;
pub mod revenue;

pub use bonus::ProfitRankBonus;
pub use revenue::SimpleRevenue;

/// Options field holding the revenue strategy
pub const REVENUE_FIELD: &str = "calculate_revenue";

/// Options field holding the bonus strategy
pub const BONUS_FIELD: &str = "calculate_bonus";

/// Computes the revenue of a single line item
///
/// The aggregator treats implementations as opaque: the returned value is
/// used as-is and only the product cost is subtracted from it.
pub trait RevenueStrategy: Send + Sync {
    /// Revenue earned by `item`, sold as `product`
    ///
    /// Returns `None` if the computation overflows.
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal>;
}

/// Computes the bonus awarded to a seller at a given rank
pub trait BonusStrategy: Send + Sync {
    /// Bonus for the seller at zero-based `rank` out of `total` sellers
    ///
    /// # Arguments
    ///
    /// * `rank` - Position in the profit ranking, 0 being the most profitable
    /// * `total` - Total number of ranked sellers
    /// * `seller` - The seller's aggregate (revenue, profit, sales count)
    ///
    /// Returns `None` if the computation overflows.
    fn calculate_bonus(
        &self,
        rank: usize,
        total: usize,
        seller: &SellerAggregate,
    ) -> Option<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Option<Decimal> + Send + Sync,
{
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        self(item, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerAggregate) -> Option<Decimal> + Send + Sync,
{
    fn calculate_bonus(
        &self,
        rank: usize,
        total: usize,
        seller: &SellerAggregate,
    ) -> Option<Decimal> {
        self(rank, total, seller)
    }
}

/// The strategy bundle handed to an analysis run
///
/// A `None` field is a missing strategy and makes validation fail with
/// [`ReportError::MissingStrategy`](crate::types::ReportError::MissingStrategy).
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Options with both strategies provided
    pub fn new(
        calculate_revenue: impl RevenueStrategy + 'static,
        calculate_bonus: impl BonusStrategy + 'static,
    ) -> Self {
        Self {
            calculate_revenue: Some(Box::new(calculate_revenue)),
            calculate_bonus: Some(Box::new(calculate_bonus)),
        }
    }

    /// Options with no strategies at all
    pub fn empty() -> Self {
        Self {
            calculate_revenue: None,
            calculate_bonus: None,
        }
    }

    /// Replace the revenue strategy
    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(strategy));
        self
    }

    /// Replace the bonus strategy
    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(strategy));
        self
    }
}

impl Default for AnalysisOptions {
    /// Options carrying the reference strategies
    fn default() -> Self {
        Self::new(SimpleRevenue, ProfitRankBonus)
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field(REVENUE_FIELD, &self.calculate_revenue.is_some())
            .field(BONUS_FIELD, &self.calculate_bonus.is_some())
            .finish()
    }
}

/// Look up a revenue strategy by its configuration name
///
/// # Returns
///
/// `None` if no strategy is registered under `name`
pub fn create_revenue_strategy(name: &str) -> Option<Box<dyn RevenueStrategy>> {
    match name {
        SimpleRevenue::NAME => Some(Box::new(SimpleRevenue)),
        _ => None,
    }
}

/// Look up a bonus strategy by its configuration name
///
/// # Returns
///
/// `None` if no strategy is registered under `name`
pub fn create_bonus_strategy(name: &str) -> Option<Box<dyn BonusStrategy>> {
    match name {
        ProfitRankBonus::NAME => Some(Box::new(ProfitRankBonus)),
        _ => None,
    }
}

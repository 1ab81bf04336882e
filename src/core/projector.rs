//! Final report shaping
//!
//! Turns ranked aggregates into [`SellerReport`]s. Money is rounded to two
//! decimal places, half away from zero; counts and top products pass through.

use crate::types::{SellerAggregate, SellerReport};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for revenue, profit and bonus
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round a monetary value for output
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Shape a ranked aggregate into its report
pub fn project(seller: SellerAggregate) -> SellerReport {
    SellerReport {
        revenue: round_money(seller.revenue),
        profit: round_money(seller.profit),
        bonus: round_money(seller.bonus),
        sales_count: seller.sales_count,
        top_products: seller.top_products,
        name: seller.name,
        seller_id: seller.seller_id,
    }
}

/// Shape every ranked aggregate, keeping their order
pub fn project_all(sellers: Vec<SellerAggregate>) -> Vec<SellerReport> {
    sellers.into_iter().map(project).collect()
}

//! Profit ranking, bonus assignment and top products
//!
//! Sellers are ordered by descending profit with a stable sort, so sellers
//! with equal profit keep their input order. Each seller then receives a
//! bonus from the injected strategy, keyed on its position, and its list of
//! best-selling products.

use crate::strategy::BonusStrategy;
use crate::types::{ProductSales, ReportError, SellerAggregate};

/// Maximum number of entries in a seller's top products
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sort `sellers` by descending profit, then assign bonuses and top products
///
/// # Errors
///
/// Returns [`ReportError::ArithmeticOverflow`] if the bonus strategy
/// overflows for a seller
pub fn rank(
    sellers: &mut [SellerAggregate],
    bonus_strategy: &dyn BonusStrategy,
) -> Result<(), ReportError> {
    sellers.sort_by(|a, b| b.profit.cmp(&a.profit));

    let total = sellers.len();
    for (position, seller) in sellers.iter_mut().enumerate() {
        seller.bonus = bonus_strategy
            .calculate_bonus(position, total, seller)
            .ok_or_else(|| ReportError::arithmetic_overflow("bonus", &seller.seller_id))?;
        seller.top_products = top_products(seller);
    }

    Ok(())
}

/// A seller's best sellers by quantity, capped at [`TOP_PRODUCTS_LIMIT`]
///
/// Equal quantities keep the order in which their skus were first sold.
pub fn top_products(seller: &SellerAggregate) -> Vec<ProductSales> {
    let mut products = seller.products_sold().to_vec();
    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(TOP_PRODUCTS_LIMIT);
    products
}

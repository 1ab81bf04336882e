//! Reference revenue strategy

use super::RevenueStrategy;
use crate::types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Discounted sale price times quantity
///
/// `sale_price × quantity × (1 − discount / 100)`. The product's purchase
/// price plays no part here; cost is subtracted by the aggregator.
///
/// Yields `None` when the product of price and quantity does not fit in a
/// `Decimal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    /// Configuration name
    pub const NAME: &'static str = "simple";
}

impl RevenueStrategy for SimpleRevenue {
    fn calculate_revenue(&self, item: &LineItem, _product: &Product) -> Option<Decimal> {
        let discount = Decimal::ONE.checked_sub(item.discount / dec!(100))?;
        item.sale_price
            .checked_mul(Decimal::from(item.quantity))?
            .checked_mul(discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_discount(dec!(100), 2, dec!(0), dec!(200))]
    #[case::ten_percent(dec!(100), 2, dec!(10), dec!(180))]
    #[case::full_discount(dec!(50), 3, dec!(100), dec!(0))]
    #[case::fractional_price(dec!(19.99), 3, dec!(5), dec!(56.9715))]
    #[case::zero_quantity(dec!(10), 0, dec!(0), dec!(0))]
    fn test_simple_revenue(
        #[case] sale_price: Decimal,
        #[case] quantity: u32,
        #[case] discount: Decimal,
        #[case] expected: Decimal,
    ) {
        let item = LineItem {
            sku: "SKU_001".to_string(),
            sale_price,
            quantity,
            discount,
        };
        let product = Product {
            sku: "SKU_001".to_string(),
            purchase_price: dec!(1),
        };

        assert_eq!(
            SimpleRevenue.calculate_revenue(&item, &product),
            Some(expected)
        );
    }

    #[rstest]
    #[case::price_times_quantity(Decimal::MAX, 2, dec!(0))]
    #[case::negative_discount(Decimal::MAX, 1, dec!(-100))]
    fn test_simple_revenue_overflow(
        #[case] sale_price: Decimal,
        #[case] quantity: u32,
        #[case] discount: Decimal,
    ) {
        let item = LineItem {
            sku: "SKU_001".to_string(),
            sale_price,
            quantity,
            discount,
        };
        let product = Product {
            sku: "SKU_001".to_string(),
            purchase_price: dec!(1),
        };

        assert_eq!(SimpleRevenue.calculate_revenue(&item, &product), None);
    }
}

//! Reference bonus strategy

use super::BonusStrategy;
use crate::types::SellerAggregate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Bonus as a share of profit, by position in the profit ranking
///
/// Rules are checked in this exact order, and the first match wins:
///
/// 1. rank 0: 15%
/// 2. ranks 1 and 2: 10%
/// 3. last rank: nothing
/// 4. anyone else: 5%
///
/// With three sellers or fewer the last seller is also a top-3 seller, so
/// rule 2 (or 1) applies to them instead of rule 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitRankBonus;

impl ProfitRankBonus {
    /// Configuration name
    pub const NAME: &'static str = "by_profit";

    /// Share of profit awarded at `rank` out of `total`
    pub fn rate(rank: usize, total: usize) -> Decimal {
        if rank == 0 {
            dec!(0.15)
        } else if rank == 1 || rank == 2 {
            dec!(0.10)
        } else if rank + 1 == total {
            Decimal::ZERO
        } else {
            dec!(0.05)
        }
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn calculate_bonus(
        &self,
        rank: usize,
        total: usize,
        seller: &SellerAggregate,
    ) -> Option<Decimal> {
        seller.profit.checked_mul(Self::rate(rank, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;
    use rstest::rstest;

    fn aggregate_with_profit(profit: Decimal) -> SellerAggregate {
        let mut aggregate = SellerAggregate::new(&Seller {
            id: "seller_1".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Ivanova".to_string(),
        });
        aggregate.profit = profit;
        aggregate
    }

    #[rstest]
    #[case::top(0, 5, dec!(0.15))]
    #[case::second(1, 5, dec!(0.10))]
    #[case::third(2, 5, dec!(0.10))]
    #[case::middle(3, 5, dec!(0.05))]
    #[case::last(4, 5, dec!(0))]
    #[case::single_seller_is_top(0, 1, dec!(0.15))]
    #[case::last_of_two_is_second(1, 2, dec!(0.10))]
    #[case::last_of_three_is_third(2, 3, dec!(0.10))]
    #[case::last_of_four(3, 4, dec!(0))]
    fn test_rate_precedence(#[case] rank: usize, #[case] total: usize, #[case] expected: Decimal) {
        assert_eq!(ProfitRankBonus::rate(rank, total), expected);
    }

    #[rstest]
    #[case(0, dec!(1000), dec!(150))]
    #[case(1, dec!(800), dec!(80))]
    #[case(2, dec!(600), dec!(60))]
    #[case(3, dec!(400), dec!(20))]
    #[case(4, dec!(200), dec!(0))]
    fn test_bonus_for_five_sellers(
        #[case] rank: usize,
        #[case] profit: Decimal,
        #[case] expected: Decimal,
    ) {
        let seller = aggregate_with_profit(profit);
        assert_eq!(
            ProfitRankBonus.calculate_bonus(rank, 5, &seller),
            Some(expected)
        );
    }

    #[test]
    fn test_bonus_on_negative_profit() {
        let seller = aggregate_with_profit(dec!(-100));
        assert_eq!(
            ProfitRankBonus.calculate_bonus(0, 3, &seller),
            Some(dec!(-15))
        );
    }

    #[test]
    fn test_bonus_on_extreme_profit() {
        let seller = aggregate_with_profit(Decimal::MAX);
        let expected = Decimal::MAX * dec!(0.15);
        assert_eq!(
            ProfitRankBonus.calculate_bonus(0, 5, &seller),
            Some(expected)
        );
    }
}

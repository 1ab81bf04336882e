//! Aggregate and report types for the Sales Report Engine
//!
//! `SellerAggregate` is the running state built up by the aggregator and
//! completed by the ranker. `SellerReport` is the rounded, caller-facing shape
//! produced by the projector.

use super::dataset::{Seller, SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cumulative quantity sold for a single product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub sku: Sku,
    pub quantity: u64,
}

/// Per-seller running totals
///
/// Created zeroed for every input seller, mutated in place while purchase
/// records are scanned, then augmented with `bonus` and `top_products` once
/// ranking has happened.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAggregate {
    /// The seller identifier
    pub seller_id: SellerId,

    /// First and last name, space-joined
    pub name: String,

    /// Sum of the stated totals of every attributed purchase record
    pub revenue: Decimal,

    /// Sum of per-line-item profit (item revenue minus cost)
    pub profit: Decimal,

    /// Number of attributed purchase records
    pub sales_count: u64,

    /// Bonus assigned by rank, zero until ranking
    pub bonus: Decimal,

    /// Best-selling products, empty until ranking
    pub top_products: Vec<ProductSales>,

    /// Quantities per sku in first-seen order
    products_sold: Vec<ProductSales>,

    /// Position of each sku in `products_sold`
    product_index: HashMap<Sku, usize>,
}

impl SellerAggregate {
    /// Create a zeroed aggregate for a seller
    ///
    /// # Arguments
    ///
    /// * `seller` - The input seller the aggregate belongs to
    ///
    /// # Returns
    ///
    /// A new SellerAggregate with:
    /// - revenue = 0
    /// - profit = 0
    /// - sales_count = 0
    /// - no products sold
    pub fn new(seller: &Seller) -> Self {
        SellerAggregate {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            bonus: Decimal::ZERO,
            top_products: Vec::new(),
            products_sold: Vec::new(),
            product_index: HashMap::new(),
        }
    }

    /// Add `quantity` units of `sku` to the per-product accumulator
    ///
    /// The entry is created at zero on first sight, which fixes its position
    /// for the stable tie-break applied when top products are derived.
    pub fn record_quantity(&mut self, sku: &str, quantity: u32) {
        let position = match self.product_index.get(sku) {
            Some(&position) => position,
            None => {
                self.products_sold.push(ProductSales {
                    sku: sku.to_string(),
                    quantity: 0,
                });
                let position = self.products_sold.len() - 1;
                self.product_index.insert(sku.to_string(), position);
                position
            }
        };
        self.products_sold[position].quantity += u64::from(quantity);
    }

    /// Quantities sold per sku, in the order skus were first encountered
    pub fn products_sold(&self) -> &[ProductSales] {
        &self.products_sold
    }

    /// Quantity sold for a single sku, if it was ever sold by this seller
    pub fn quantity_sold(&self, sku: &str) -> Option<u64> {
        self.product_index
            .get(sku)
            .map(|&position| self.products_sold[position].quantity)
    }
}

/// Final per-seller report record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,

    pub name: String,

    /// Revenue rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,

    /// Profit rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,

    pub sales_count: u64,

    /// Up to 10 best sellers, descending by quantity
    pub top_products: Vec<ProductSales>,

    /// Bonus rounded to 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}

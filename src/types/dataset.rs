//! Input record types for the Sales Report Engine
//!
//! This module defines the sellers, products and purchase records that make up
//! the dataset fed into the analysis pipeline. All of them are supplied
//! externally and never mutated by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Seller identifier
pub type SellerId = String;

/// Stock-keeping unit identifier
pub type Sku = String;

/// A seller whose sales are being reported on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller identifier, referenced by purchase records
    pub id: SellerId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,
}

impl Seller {
    /// Display name used in reports: first and last name joined by a space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A product that can appear in line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stock-keeping unit, referenced by line items
    pub sku: Sku,

    /// Cost price paid per unit
    pub purchase_price: Decimal,
}

/// One product entry within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product being sold
    pub sku: Sku,

    /// Price per unit before discount
    pub sale_price: Decimal,

    /// Number of units sold
    pub quantity: u32,

    /// Discount percentage applied to the line (0-100)
    pub discount: Decimal,
}

/// A single purchase transaction attributed to a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Seller the transaction is attributed to
    pub seller_id: SellerId,

    /// Stated total monetary amount of the transaction
    ///
    /// This is what feeds a seller's revenue, independently of the
    /// line items below.
    pub total_amount: Decimal,

    /// Ordered line items of the transaction
    pub items: Vec<LineItem>,
}

/// The full input to an analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

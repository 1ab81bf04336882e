//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `dataset`: Input records (sellers, products, purchase records)
//! - `report`: Per-seller aggregates and final reports
//! - `error`: Error types for the sales report engine

pub mod dataset;
pub mod error;
pub mod report;

pub use dataset::{Dataset, LineItem, Product, PurchaseRecord, Seller, SellerId, Sku};
pub use error::ReportError;
pub use report::{ProductSales, SellerAggregate, SellerReport};

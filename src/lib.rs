//! Sales Report Engine Library
//! # Overview
//!
//! This library computes per-seller sales performance (revenue, profit, bonus
//! and best-selling products) from an in-memory dataset of sellers, products
//! and purchase records, ranking sellers by profit.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Seller, Product, PurchaseRecord, SellerReport, etc.)
//! - [`strategy`] - Pluggable revenue and bonus strategies
//! - [`core`] - The analysis pipeline:
//!   - [`core::validator`] - Up-front dataset and strategy checks
//!   - [`core::aggregator`] - Per-seller running totals
//!   - [`core::ranker`] - Profit ranking, bonuses and top products
//!   - [`core::projector`] - Rounded output records
//! - [`io`] - JSON input and CSV/JSON report output
//! - [`cli`] - CLI arguments parsing
//!
//! # Report Fields
//!
//! Each seller report carries:
//! - `revenue`: Sum of the stated totals of the seller's purchase records
//! - `profit`: Sum over line items of strategy revenue minus purchase cost
//! - `sales_count`: Number of the seller's purchase records
//! - `top_products`: Up to 10 skus with the highest quantity sold
//! - `bonus`: Strategy bonus for the seller's profit rank
//!
//! Revenue, profit and bonus are rounded to two decimal places.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::analyze_sales_data;
pub use crate::strategy::{
    AnalysisOptions, BonusStrategy, ProfitRankBonus, RevenueStrategy, SimpleRevenue,
};
pub use crate::types::{
    Dataset, LineItem, Product, ProductSales, PurchaseRecord, ReportError, Seller,
    SellerAggregate, SellerReport,
};

//! JSON format handling for datasets, options and report output
//!
//! This module is the boundary where untyped input becomes typed structures.
//! Shape checks happen here, before decoding, so that a malformed document is
//! reported as an invalid dataset or invalid options rather than as a generic
//! decoding failure:
//!
//! - dataset `null` or not an object
//! - `sellers`, `products` or `purchase_records` missing or not an array
//! - options `null` or not an object
//! - a strategy field missing, not a string, or naming no known strategy
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::strategy::{
    create_bonus_strategy, create_revenue_strategy, AnalysisOptions, BONUS_FIELD, REVENUE_FIELD,
};
use crate::types::{Dataset, ReportError, SellerReport};
use serde_json::{Map, Value};
use std::io::Write;

/// Collections every dataset document must carry
pub const DATASET_COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Parse a dataset from a JSON document
///
/// # Returns
///
/// * `Ok(Dataset)` - the decoded dataset (collections may still be empty)
/// * `Err(ReportError::ParseError)` - the document is not JSON
/// * `Err(ReportError::InvalidDataset)` - the document is not a well-shaped dataset
pub fn parse_dataset(input: &str) -> Result<Dataset, ReportError> {
    let value: Value = serde_json::from_str(input)?;
    dataset_from_value(value)
}

/// Decode a dataset from an already parsed JSON value
pub fn dataset_from_value(value: Value) -> Result<Dataset, ReportError> {
    let map = expect_object(value, "dataset").map_err(ReportError::invalid_dataset)?;

    for name in DATASET_COLLECTIONS {
        match map.get(name) {
            None | Some(Value::Null) => {
                return Err(ReportError::invalid_dataset(format!("{} is missing", name)))
            }
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(ReportError::invalid_dataset(format!(
                    "{} must be a sequence",
                    name
                )))
            }
        }
    }

    serde_json::from_value(Value::Object(map))
        .map_err(|e| ReportError::invalid_dataset(format!("malformed record: {}", e)))
}

/// Parse an options bundle from a JSON document
///
/// Strategy fields hold strategy names, e.g.
/// `{"calculate_revenue": "simple", "calculate_bonus": "by_profit"}`.
///
/// # Returns
///
/// * `Ok(AnalysisOptions)` - options with both strategies resolved
/// * `Err(ReportError::ParseError)` - the document is not JSON
/// * `Err(ReportError::InvalidOptions)` - the document is not an object
/// * `Err(ReportError::MissingStrategy)` - a strategy cannot be resolved
pub fn parse_options(input: &str) -> Result<AnalysisOptions, ReportError> {
    let value: Value = serde_json::from_str(input)?;
    options_from_value(value)
}

/// Resolve an options bundle from an already parsed JSON value
pub fn options_from_value(value: Value) -> Result<AnalysisOptions, ReportError> {
    let map = expect_object(value, "options").map_err(ReportError::invalid_options)?;

    let calculate_revenue = strategy_name(&map, REVENUE_FIELD)
        .and_then(create_revenue_strategy)
        .ok_or_else(|| ReportError::missing_strategy(REVENUE_FIELD))?;
    let calculate_bonus = strategy_name(&map, BONUS_FIELD)
        .and_then(create_bonus_strategy)
        .ok_or_else(|| ReportError::missing_strategy(BONUS_FIELD))?;

    Ok(AnalysisOptions {
        calculate_revenue: Some(calculate_revenue),
        calculate_bonus: Some(calculate_bonus),
    })
}

/// Write reports as a pretty-printed JSON array
///
/// Monetary values are written as numbers.
pub fn write_reports_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *output, reports)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn expect_object(value: Value, what: &str) -> Result<Map<String, Value>, String> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(format!("{} is missing", what)),
        _ => Err(format!("{} must be an object", what)),
    }
}

fn strategy_name<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    map.get(field).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductSales;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const VALID_DATASET: &str = r#"{
        "sellers": [{"id": "seller_1", "first_name": "Ivan", "last_name": "Petrov"}],
        "products": [{"sku": "SKU_001", "purchase_price": 10.5, "name": "Ignored"}],
        "purchase_records": [{
            "seller_id": "seller_1",
            "total_amount": 90.72,
            "items": [{"sku": "SKU_001", "sale_price": 25.2, "quantity": 4, "discount": 10}]
        }]
    }"#;

    #[test]
    fn test_parse_dataset_valid() {
        let dataset = parse_dataset(VALID_DATASET).unwrap();

        assert_eq!(dataset.sellers.len(), 1);
        assert_eq!(dataset.sellers[0].display_name(), "Ivan Petrov");
        assert_eq!(dataset.products[0].purchase_price, dec!(10.5));
        let record = &dataset.purchase_records[0];
        assert_eq!(record.total_amount, dec!(90.72));
        assert_eq!(record.items[0].sale_price, dec!(25.2));
        assert_eq!(record.items[0].quantity, 4);
        assert_eq!(record.items[0].discount, dec!(10));
    }

    #[test]
    fn test_parse_dataset_allows_empty_collections() {
        let dataset =
            parse_dataset(r#"{"sellers": [], "products": [], "purchase_records": []}"#).unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[rstest]
    #[case::null("null", "dataset is missing")]
    #[case::array("[]", "dataset must be an object")]
    #[case::number("42", "dataset must be an object")]
    #[case::missing_sellers(r#"{"products": [], "purchase_records": []}"#, "sellers is missing")]
    #[case::null_products(
        r#"{"sellers": [], "products": null, "purchase_records": []}"#,
        "products is missing"
    )]
    #[case::records_not_sequence(
        r#"{"sellers": [], "products": [], "purchase_records": {"a": 1}}"#,
        "purchase_records must be a sequence"
    )]
    #[case::sellers_is_string(
        r#"{"sellers": "s1", "products": [], "purchase_records": []}"#,
        "sellers must be a sequence"
    )]
    fn test_parse_dataset_shape_errors(#[case] input: &str, #[case] expected_reason: &str) {
        let result = parse_dataset(input);
        assert_eq!(
            result.unwrap_err(),
            ReportError::invalid_dataset(expected_reason)
        );
    }

    #[test]
    fn test_parse_dataset_malformed_record() {
        let input = r#"{
            "sellers": [{"id": "s1", "first_name": "A"}],
            "products": [],
            "purchase_records": []
        }"#;

        let error = parse_dataset(input).unwrap_err();
        assert!(matches!(error, ReportError::InvalidDataset { .. }));
        assert!(error.to_string().contains("malformed record"));
    }

    #[test]
    fn test_parse_dataset_not_json() {
        let error = parse_dataset("sellers,products").unwrap_err();
        assert!(matches!(error, ReportError::ParseError { .. }));
    }

    #[test]
    fn test_parse_options_valid() {
        let options =
            parse_options(r#"{"calculate_revenue": "simple", "calculate_bonus": "by_profit"}"#)
                .unwrap();
        assert!(options.calculate_revenue.is_some());
        assert!(options.calculate_bonus.is_some());
    }

    #[rstest]
    #[case::null("null", ReportError::invalid_options("options is missing"))]
    #[case::array(r#"["simple"]"#, ReportError::invalid_options("options must be an object"))]
    #[case::string(r#""simple""#, ReportError::invalid_options("options must be an object"))]
    #[case::empty_object("{}", ReportError::missing_strategy("calculate_revenue"))]
    #[case::missing_bonus(
        r#"{"calculate_revenue": "simple"}"#,
        ReportError::missing_strategy("calculate_bonus")
    )]
    #[case::revenue_not_string(
        r#"{"calculate_revenue": 5, "calculate_bonus": "by_profit"}"#,
        ReportError::missing_strategy("calculate_revenue")
    )]
    #[case::unknown_bonus(
        r#"{"calculate_revenue": "simple", "calculate_bonus": "lottery"}"#,
        ReportError::missing_strategy("calculate_bonus")
    )]
    fn test_parse_options_errors(#[case] input: &str, #[case] expected: ReportError) {
        assert_eq!(parse_options(input).unwrap_err(), expected);
    }

    #[test]
    fn test_write_reports_json_uses_numbers() {
        let reports = vec![SellerReport {
            seller_id: "seller_1".to_string(),
            name: "Ivan Petrov".to_string(),
            revenue: dec!(90.72),
            profit: dec!(48.72),
            sales_count: 1,
            top_products: vec![ProductSales {
                sku: "SKU_001".to_string(),
                quantity: 4,
            }],
            bonus: dec!(7.31),
        }];

        let mut output = Vec::new();
        write_reports_json(&reports, &mut output).unwrap();

        let value: Value = serde_json::from_slice(&output).unwrap();
        let report = &value[0];
        assert_eq!(report["seller_id"], "seller_1");
        assert_eq!(report["revenue"], 90.72);
        assert_eq!(report["profit"], 48.72);
        assert_eq!(report["bonus"], 7.31);
        assert_eq!(report["sales_count"], 1);
        assert_eq!(report["top_products"][0]["sku"], "SKU_001");
        assert_eq!(report["top_products"][0]["quantity"], 4);
    }
}

//! CSV output for seller reports
//!
//! Writes reports in CSV format with columns:
//! seller_id, name, revenue, profit, sales_count, bonus, top_products
//!
//! Money is written with exactly two decimals. `top_products` is packed into
//! one column as `sku:quantity` pairs joined by `;`.

use crate::types::{ProductSales, ReportError, SellerReport};
use std::io::Write;

/// Column names of the report CSV
pub const REPORT_HEADER: [&str; 7] = [
    "seller_id",
    "name",
    "revenue",
    "profit",
    "sales_count",
    "bonus",
    "top_products",
];

/// Pack a top products list into a single CSV field
pub fn format_top_products(products: &[ProductSales]) -> String {
    products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

/// Write seller reports to CSV format
///
/// Reports are written in the order given, which for analysis output is
/// descending profit.
///
/// # Arguments
///
/// * `reports` - Slice of reports to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ReportError::IoError)` if a write error occurred
pub fn write_reports_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(REPORT_HEADER)?;

    for report in reports {
        writer.write_record(&[
            report.seller_id.clone(),
            report.name.clone(),
            format!("{:.2}", report.revenue),
            format!("{:.2}", report.profit),
            report.sales_count.to_string(),
            format!("{:.2}", report.bonus),
            format_top_products(&report.top_products),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn report(seller_id: &str, name: &str, top_products: Vec<ProductSales>) -> SellerReport {
        SellerReport {
            seller_id: seller_id.to_string(),
            name: name.to_string(),
            revenue: dec!(1500),
            profit: dec!(412.5),
            sales_count: 3,
            top_products,
            bonus: dec!(61.88),
        }
    }

    fn sold(sku: &str, quantity: u64) -> ProductSales {
        ProductSales {
            sku: sku.to_string(),
            quantity,
        }
    }

    #[rstest]
    #[case::empty(vec![], "")]
    #[case::single(vec![sold("SKU_001", 4)], "SKU_001:4")]
    #[case::several(vec![sold("B", 9), sold("A", 2)], "B:9;A:2")]
    fn test_format_top_products(#[case] products: Vec<ProductSales>, #[case] expected: &str) {
        assert_eq!(format_top_products(&products), expected);
    }

    #[rstest]
    #[case::empty_reports(
        vec![],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n"
    )]
    #[case::single_report(
        vec![report("seller_1", "Ivan Petrov", vec![sold("SKU_001", 4)])],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         seller_1,Ivan Petrov,1500.00,412.50,3,61.88,SKU_001:4\n"
    )]
    #[case::keeps_given_order(
        vec![
            report("seller_2", "B B", vec![]),
            report("seller_1", "A A", vec![sold("X", 1), sold("Y", 1)]),
        ],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         seller_2,B B,1500.00,412.50,3,61.88,\n\
         seller_1,A A,1500.00,412.50,3,61.88,X:1;Y:1\n"
    )]
    #[case::quotes_commas_in_names(
        vec![report("s", "Smith, Jr.", vec![])],
        "seller_id,name,revenue,profit,sales_count,bonus,top_products\n\
         s,\"Smith, Jr.\",1500.00,412.50,3,61.88,\n"
    )]
    fn test_write_reports_csv(#[case] reports: Vec<SellerReport>, #[case] expected_output: &str) {
        let mut output = Vec::new();
        let result = write_reports_csv(&reports, &mut output);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, expected_output);
    }
}

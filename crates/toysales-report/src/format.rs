//! Plain-text rendering of a [`SalesSummary`].
//!
//! Monetary formatting is deliberately mixed: list price, total sales and
//! average price are printed in their natural decimal form, while average
//! discount, average toy price and brand revenue are fixed to two places.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::aggregate::{BrandStats, ProductStats, SalesSummary};
use crate::banner::{BRANDS_BANNER, PRODUCTS_BANNER, SALES_REPORT_BANNER};

/// Renders the full report as an ordered list of lines, without trailing
/// newlines.
///
/// Output depends only on `summary` and `date`.
#[must_use]
pub fn render_report(summary: &SalesSummary, date: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();

    push_banner(&mut lines, SALES_REPORT_BANNER);
    lines.push(format!("Date: {date}"));

    push_banner(&mut lines, PRODUCTS_BANNER);
    lines.push(String::new());
    for product in &summary.products {
        render_product(&mut lines, product);
    }

    push_banner(&mut lines, BRANDS_BANNER);
    lines.push(String::new());
    for brand in &summary.brands {
        render_brand(&mut lines, brand);
    }

    lines
}

fn push_banner(lines: &mut Vec<String>, banner: &[&str]) {
    lines.extend(banner.iter().map(|line| (*line).to_string()));
}

fn render_product(lines: &mut Vec<String>, product: &ProductStats) {
    lines.push(product.title.clone());
    lines.push(format!("Full price: ${}", product.full_price));
    lines.push(format!("Number of purchases: {}", product.purchase_count));
    lines.push(format!("Total sales: ${}", natural(product.total_sales)));
    lines.push(format!("Average price: ${}", natural(product.average_price)));
    lines.push(format!(
        "Average discount: ${}",
        two_places(product.average_discount)
    ));
    lines.push(String::new());
}

fn render_brand(lines: &mut Vec<String>, brand: &BrandStats) {
    lines.push(format!("Brand: {}", brand.brand));
    lines.push(format!("Number of toys: {}", brand.toy_count));
    lines.push(format!(
        "Average toy price: ${}",
        two_places(brand.average_toy_price())
    ));
    lines.push(format!(
        "Total sales revenue: ${}",
        two_places(brand.total_sales_revenue)
    ));
    lines.push(String::new());
}

/// Derived value with trailing zeros stripped: `33.00` → `33`, `16.50` → `16.5`.
fn natural(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Rounded half away from zero and padded to exactly two decimals.
fn two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;

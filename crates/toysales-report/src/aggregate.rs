//! Per-product and per-brand sales statistics.

use std::collections::HashMap;

use rust_decimal::Decimal;
use toysales_core::{Catalog, Product};

use crate::error::ReportError;

/// Sales figures for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductStats {
    pub title: String,
    pub full_price: Decimal,
    pub purchase_count: usize,
    pub total_sales: Decimal,
    /// `total_sales / purchase_count`, unrounded.
    pub average_price: Decimal,
    /// `full_price - average_price`, unrounded. Negative when buyers paid
    /// more than list price on average.
    pub average_discount: Decimal,
}

/// Running totals for every product sharing a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandStats {
    pub brand: String,
    pub toy_count: usize,
    pub total_toy_price: Decimal,
    pub total_sales_revenue: Decimal,
}

impl BrandStats {
    fn new(brand: &str) -> Self {
        Self {
            brand: brand.to_string(),
            toy_count: 0,
            total_toy_price: Decimal::ZERO,
            total_sales_revenue: Decimal::ZERO,
        }
    }

    /// Mean list price across the brand's products.
    ///
    /// Entries produced by [`aggregate_brands`] always have `toy_count >= 1`;
    /// a hand-built entry with no toys yields zero.
    #[must_use]
    pub fn average_toy_price(&self) -> Decimal {
        self.total_toy_price
            .checked_div(Decimal::from(self.toy_count))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Both statistic collections, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesSummary {
    pub products: Vec<ProductStats>,
    pub brands: Vec<BrandStats>,
}

/// Computes [`ProductStats`] for one product.
///
/// # Errors
///
/// Returns [`ReportError::NoPurchases`] when the product has no purchases,
/// since its average price is undefined, and [`ReportError::Overflow`] when
/// its amounts leave the decimal range.
pub fn product_stats(product: &Product) -> Result<ProductStats, ReportError> {
    let purchase_count = product.purchase_count();
    if purchase_count == 0 {
        return Err(ReportError::NoPurchases {
            title: product.title.clone(),
        });
    }

    let overflow = || ReportError::Overflow {
        title: product.title.clone(),
    };

    let total_sales = product.total_sales().ok_or_else(overflow)?;
    let average_price = total_sales
        .checked_div(Decimal::from(purchase_count))
        .ok_or_else(overflow)?;
    let average_discount = product
        .full_price
        .checked_sub(average_price)
        .ok_or_else(overflow)?;

    Ok(ProductStats {
        title: product.title.clone(),
        full_price: product.full_price,
        purchase_count,
        total_sales,
        average_price,
        average_discount,
    })
}

/// Computes [`ProductStats`] for every product, preserving input order.
///
/// # Errors
///
/// Fails on the first product that [`product_stats`] rejects.
pub fn aggregate_products(products: &[Product]) -> Result<Vec<ProductStats>, ReportError> {
    products.iter().map(product_stats).collect()
}

/// Groups products by brand in a single pass.
///
/// Brands are returned in order of first appearance, not sorted. Products
/// without purchases still count toward `toy_count` and `total_toy_price`
/// and contribute zero revenue.
///
/// # Errors
///
/// Returns [`ReportError::Overflow`] naming the product whose amounts pushed
/// a brand total out of the decimal range.
pub fn aggregate_brands(products: &[Product]) -> Result<Vec<BrandStats>, ReportError> {
    let mut brands: Vec<BrandStats> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        let slot = *index.entry(product.brand.as_str()).or_insert_with(|| {
            brands.push(BrandStats::new(&product.brand));
            brands.len() - 1
        });

        let overflow = || ReportError::Overflow {
            title: product.title.clone(),
        };

        let entry = &mut brands[slot];
        entry.toy_count += 1;
        entry.total_toy_price = entry
            .total_toy_price
            .checked_add(product.full_price)
            .ok_or_else(overflow)?;
        entry.total_sales_revenue = product
            .total_sales()
            .and_then(|sales| entry.total_sales_revenue.checked_add(sales))
            .ok_or_else(overflow)?;
    }

    Ok(brands)
}

/// Runs both aggregations over a loaded catalog.
///
/// # Errors
///
/// Propagates the first error from either pass.
pub fn summarize(catalog: &Catalog) -> Result<SalesSummary, ReportError> {
    let products = aggregate_products(&catalog.items)?;
    let brands = aggregate_brands(&catalog.items)?;
    tracing::debug!(
        products = products.len(),
        brands = brands.len(),
        "computed sales summary"
    );
    Ok(SalesSummary { products, brands })
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;

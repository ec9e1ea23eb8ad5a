//! Sales report pipeline: load a product dataset, aggregate per-product and
//! per-brand figures, render them as text, and write the result.

pub mod aggregate;
mod banner;
pub mod error;
pub mod format;
pub mod load;
pub mod write;

use std::path::Path;

use chrono::NaiveDate;

pub use aggregate::{
    aggregate_brands, aggregate_products, product_stats, summarize, BrandStats, ProductStats,
    SalesSummary,
};
pub use error::ReportError;
pub use format::render_report;
pub use load::{load_catalog, parse_catalog};
pub use write::{write_lines, write_report, ReportDestination};

/// Loads the dataset at `input`, aggregates it, and renders the report for
/// `date`.
///
/// Nothing is written here; callers open the destination only once the full
/// report is rendered, so a failed run never leaves a truncated file behind.
///
/// # Errors
///
/// Returns the first [`ReportError`] raised while loading or aggregating.
pub fn generate_report(input: &Path, date: NaiveDate) -> Result<Vec<String>, ReportError> {
    let catalog = load_catalog(input)?;
    let summary = summarize(&catalog)?;
    Ok(render_report(&summary, date))
}

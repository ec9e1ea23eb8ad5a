//! Report command handler.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use toysales_report::ReportDestination;

/// Generate the sales report for `date` from `input` and write it to
/// `destination`.
///
/// The destination is only opened after the whole report renders, so a bad
/// dataset leaves any existing report untouched.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or aggregated, or the
/// destination cannot be written.
pub(crate) fn run_report(
    input: &Path,
    destination: &ReportDestination,
    date: NaiveDate,
) -> anyhow::Result<()> {
    let lines = toysales_report::generate_report(input, date)
        .with_context(|| format!("failed to build sales report from {}", input.display()))?;

    toysales_report::write_report(&lines, destination)?;
    Ok(())
}

//! Dataset loading.
//!
//! JSON is decoded in two steps so syntax problems ([`ReportError::Parse`])
//! stay distinguishable from documents that parse but do not match the
//! expected shape ([`ReportError::Schema`]).

use std::path::Path;

use toysales_core::Catalog;

use crate::error::ReportError;

/// Reads and parses the dataset at `path`.
///
/// # Errors
///
/// Returns [`ReportError::Read`] if the file cannot be read, otherwise the
/// errors of [`parse_catalog`].
pub fn load_catalog(path: &Path) -> Result<Catalog, ReportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&text, path)?;
    tracing::info!(
        path = %path.display(),
        products = catalog.items.len(),
        "loaded sales dataset"
    );
    Ok(catalog)
}

/// Parses an in-memory dataset. `path` is only used for error context.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] if `text` is not valid JSON and
/// [`ReportError::Schema`] if `items` or any product/purchase key is missing
/// or has the wrong type.
pub fn parse_catalog(text: &str, path: &Path) -> Result<Catalog, ReportError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_value(value).map_err(|source| ReportError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

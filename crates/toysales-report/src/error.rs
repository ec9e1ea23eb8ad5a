use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The dataset file is missing or could not be read.
    #[error("failed to read dataset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON.
    #[error("malformed JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The dataset is valid JSON but a required key is missing or has the
    /// wrong type.
    #[error("unexpected dataset shape in {}: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Average price is undefined for a product that never sold.
    #[error("product \"{title}\" has no purchases; average price is undefined")]
    NoPurchases { title: String },

    /// A sum or difference involving this product left the decimal range.
    #[error("amounts for product \"{title}\" exceed the supported decimal range")]
    Overflow { title: String },

    #[error("failed to write report to {destination}: {source}")]
    Write {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

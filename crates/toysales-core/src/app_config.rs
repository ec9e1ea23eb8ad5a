use std::path::PathBuf;

/// Runtime settings for a report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// JSON dataset with a top-level `items` array.
    pub data_path: PathBuf,
    /// Destination file, created or truncated on every run.
    pub report_path: PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

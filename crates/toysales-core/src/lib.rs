pub mod app_config;
pub mod config;
pub mod products;

use thiserror::Error;

pub use app_config::ReportConfig;
pub use config::{load_report_config, load_report_config_from_env};
pub use products::{Catalog, Product, Purchase};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

use crate::app_config::ReportConfig;
use crate::ConfigError;

/// Load report configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_report_config() -> Result<ReportConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_report_config_from_env()
}

/// Load report configuration from environment variables already in the process.
///
/// Unlike [`load_report_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_report_config_from_env() -> Result<ReportConfig, ConfigError> {
    build_report_config(|key| std::env::var(key))
}

/// Build report configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap`.
fn build_report_config<F>(lookup: F) -> Result<ReportConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty_path = |var: &str, default: &str| -> Result<PathBuf, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "path must not be empty".to_string(),
            });
        }
        Ok(PathBuf::from(raw))
    };

    let data_path = non_empty_path("TOYSALES_DATA_PATH", "./data/products.json")?;
    let report_path = non_empty_path("TOYSALES_REPORT_PATH", "report.txt")?;
    let log_level = or_default("TOYSALES_LOG_LEVEL", "warn");

    Ok(ReportConfig {
        data_path,
        report_path,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

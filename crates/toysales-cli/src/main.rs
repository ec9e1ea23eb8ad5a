mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use toysales_report::ReportDestination;

/// Render the toy store sales report.
///
/// With no arguments, reads the dataset from `TOYSALES_DATA_PATH` and writes
/// `TOYSALES_REPORT_PATH` (default `report.txt`). Relative paths resolve
/// against the current working directory, not the binary's location.
#[derive(Debug, Parser)]
#[command(name = "toysales")]
#[command(about = "Toy store sales report generator")]
struct Cli {
    /// Dataset to read instead of `TOYSALES_DATA_PATH` (default
    /// `./data/products.json`, relative to the working directory).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Report file to write instead of `TOYSALES_REPORT_PATH`.
    #[arg(long, value_name = "PATH", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the report to stdout instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

impl Cli {
    fn destination(&self, config: &toysales_core::ReportConfig) -> ReportDestination {
        if self.stdout {
            return ReportDestination::Stdout;
        }
        ReportDestination::File(
            self.output
                .clone()
                .unwrap_or_else(|| config.report_path.clone()),
        )
    }

    fn input(&self, config: &toysales_core::ReportConfig) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| config.data_path.clone())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = toysales_core::load_report_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        data_path = %config.data_path.display(),
        report_path = %config.report_path.display(),
        "configuration loaded"
    );

    let today = chrono::Local::now().date_naive();
    report::run_report(&cli.input(&config), &cli.destination(&config), today)
}

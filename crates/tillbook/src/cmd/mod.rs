//! Command implementations behind the `till-*` binaries.

pub mod ledger;
pub mod stock;

use clap::ValueEnum;
use tracing::Level;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text table (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Initialize logging for a command run.
pub(crate) fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
}

//! Shared implementation for the till-stock command.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use tillbook_stock::{stock_report, summarize, StockRow, StockStatus, StockSummary};

use crate::cmd::{init_tracing, OutputFormat};
use crate::data::{self, StockData};
use crate::report;

/// Print the stock status report from a data file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The JSON data file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only show items that need attention (low or negative stock)
    #[arg(long)]
    pub low_only: bool,

    /// Output format (text or json)
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output (just use exit code)
    #[arg(short, long)]
    pub quiet: bool,
}

/// JSON output structure for the stock report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonStock<'a> {
    rows: &'a [StockRow],
    summary: &'a StockSummary,
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    let data: StockData = data::load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    debug!(
        items = data.inventory.len(),
        sales = data.sales.len(),
        purchases = data.purchases.len(),
        "loaded data file"
    );

    // The summary always covers the whole inventory, even under --low-only
    let summary = summarize(&data.inventory);
    let mut rows = stock_report(&data.inventory, &data.sales, &data.purchases);
    if args.low_only {
        rows.retain(|r| {
            matches!(r.status, StockStatus::LowStock | StockStatus::NegativeStock)
        });
    }

    if args.quiet {
        return Ok(ExitCode::SUCCESS);
    }

    match args.format {
        OutputFormat::Json => {
            let output = JsonStock {
                rows: &rows,
                summary: &summary,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Text => {
            report::render_stock(&rows, &summary, &mut stdout)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Main entry point for the stock command.
pub fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

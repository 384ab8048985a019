//! Shared implementation for the till-ledger command.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use tillbook_core::{DocumentType, LedgerEntry, PartyRef};
use tillbook_ledger::{build_statement, total_pages, LedgerQuery, PageCursor, Scope};

use crate::cmd::{init_tracing, OutputFormat};
use crate::data::{self, LedgerData};
use crate::report;

/// CLI spelling of the ledger scope tabs.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ScopeArg {
    /// All document kinds
    #[default]
    All,
    /// Sales and receipts
    Customers,
    /// Purchases and payments
    Suppliers,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => Self::All,
            ScopeArg::Customers => Self::Customers,
            ScopeArg::Suppliers => Self::Suppliers,
        }
    }
}

/// CLI spelling of the document-type filter.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DocTypeArg {
    /// Sale invoices
    Sale,
    /// Purchase invoices
    Purchase,
    /// Receipt vouchers
    Receipt,
    /// Payment vouchers
    Payment,
}

impl From<DocTypeArg> for DocumentType {
    fn from(arg: DocTypeArg) -> Self {
        match arg {
            DocTypeArg::Sale => Self::Sale,
            DocTypeArg::Purchase => Self::Purchase,
            DocTypeArg::Receipt => Self::Receipt,
            DocTypeArg::Payment => Self::Payment,
        }
    }
}

/// Print a counterparty ledger statement from a data file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The JSON data file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Ledger tab scope
    #[arg(long, value_enum, default_value = "all")]
    pub scope: ScopeArg,

    /// Filter to one customer by id
    #[arg(long, value_name = "ID", conflicts_with = "supplier")]
    pub customer: Option<String>,

    /// Filter to one supplier by id
    #[arg(long, value_name = "ID")]
    pub supplier: Option<String>,

    /// Restrict to document types (can be specified multiple times)
    #[arg(long = "doc-type", value_enum)]
    pub doc_types: Vec<DocTypeArg>,

    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Inclusive end date (YYYY-MM-DD), covering the whole day
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Free-text search over number, particulars and counterparty
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Page to show (1-based; clamped into range)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Entries per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

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

impl Args {
    fn query(&self) -> LedgerQuery {
        let party = self
            .customer
            .clone()
            .map(PartyRef::Customer)
            .or_else(|| self.supplier.clone().map(PartyRef::Supplier));
        LedgerQuery {
            scope: self.scope.into(),
            party,
            document_types: self.doc_types.iter().map(|&t| t.into()).collect(),
            from: self.from,
            to: self.to,
            search: self.search.clone(),
        }
    }
}

/// JSON output structure for one statement page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonStatement<'a> {
    page: usize,
    total_pages: usize,
    total_entries: usize,
    entries: &'a [LedgerEntry],
    total_debit: rust_decimal::Decimal,
    total_credit: rust_decimal::Decimal,
    closing_balance: rust_decimal::Decimal,
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    let data: LedgerData = data::load(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    debug!(
        sales = data.sales.len(),
        purchases = data.purchases.len(),
        receipts = data.receipt_vouchers.len(),
        payments = data.payment_vouchers.len(),
        "loaded data file"
    );

    let statement = build_statement(
        &data.sources(),
        &data.customers,
        &data.suppliers,
        &args.query(),
    );
    debug!(entries = statement.entries.len(), "built statement");

    // The pager never clamps; the caller does
    let mut cursor = PageCursor::new(args.page_size.max(1));
    cursor.page = args.page;
    cursor.clamp_to(statement.entries.len());
    let page_rows = cursor.slice(&statement.entries);
    let pages = total_pages(statement.entries.len(), cursor.page_size);

    if args.quiet {
        return Ok(ExitCode::SUCCESS);
    }

    match args.format {
        OutputFormat::Json => {
            let output = JsonStatement {
                page: cursor.page,
                total_pages: pages,
                total_entries: statement.entries.len(),
                entries: page_rows,
                total_debit: statement.total_debit,
                total_credit: statement.total_credit,
                closing_balance: statement.closing_balance,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Text => {
            report::render_statement(&statement, page_rows, cursor.page, pages, &mut stdout)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Main entry point for the ledger command.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_maps_party_selection() {
        let args = Args::parse_from(["till-ledger", "books.json", "--customer", "c-1"]);
        assert_eq!(
            args.query().party,
            Some(PartyRef::Customer("c-1".to_string()))
        );

        let args = Args::parse_from(["till-ledger", "books.json", "--supplier", "s-1"]);
        assert_eq!(
            args.query().party,
            Some(PartyRef::Supplier("s-1".to_string()))
        );
    }

    #[test]
    fn test_query_maps_doc_types_and_dates() {
        let args = Args::parse_from([
            "till-ledger",
            "books.json",
            "--doc-type",
            "sale",
            "--doc-type",
            "receipt",
            "--from",
            "2024-01-01",
        ]);
        let query = args.query();
        assert_eq!(
            query.document_types,
            vec![DocumentType::Sale, DocumentType::Receipt]
        );
        assert_eq!(query.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(query.to.is_none());
    }
}

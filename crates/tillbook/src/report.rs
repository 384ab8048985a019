//! Plain-text rendering for statements and stock reports.
//!
//! Rendering only: every number and label here arrives precomputed from the
//! engine crates, and nothing is recalculated beyond column widths.

use std::io::Write;

use rust_decimal::Decimal;
use tillbook_core::LedgerEntry;
use tillbook_ledger::LedgerStatement;
use tillbook_stock::{LineMatch, StockRow, StockSummary};

/// The CR/DR display label for a running balance.
///
/// Positive (and zero) balances show as CR, money owed to the business;
/// negative balances show as DR.
#[must_use]
pub const fn balance_side(balance: Decimal) -> &'static str {
    if balance.is_sign_negative() && !balance.is_zero() {
        "DR"
    } else {
        "CR"
    }
}

fn format_date(entry: &LedgerEntry) -> String {
    entry
        .date
        .map_or_else(|| "-".to_string(), |d| d.date().to_string())
}

fn format_balance(balance: Decimal) -> String {
    format!("{} {}", balance.abs(), balance_side(balance))
}

/// Render one page of a ledger statement as a text table.
pub fn render_statement<W: Write>(
    statement: &LedgerStatement,
    page_rows: &[LedgerEntry],
    page: usize,
    total_pages: usize,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{:<10}  {:<8}  {:<12}  {:<32}  {:>12}  {:>12}  {:>15}",
        "Date", "Type", "Number", "Particulars", "Debit", "Credit", "Balance"
    )?;
    writeln!(writer, "{}", "-".repeat(112))?;

    for entry in page_rows {
        writeln!(
            writer,
            "{:<10}  {:<8}  {:<12}  {:<32}  {:>12}  {:>12}  {:>15}",
            format_date(entry),
            entry.document_type.label(),
            entry.document_number,
            truncate(&entry.particulars, 32),
            entry.debit,
            entry.credit,
            format_balance(entry.balance),
        )?;
    }

    writeln!(writer, "{}", "-".repeat(112))?;
    writeln!(
        writer,
        "{:<70}{:>12}  {:>12}",
        "Totals", statement.total_debit, statement.total_credit
    )?;
    writeln!(
        writer,
        "Closing balance: {}",
        format_balance(statement.closing_balance)
    )?;
    writeln!(
        writer,
        "Page {page} of {total_pages} ({} entries)",
        statement.entries.len()
    )?;
    Ok(())
}

/// Render the stock report as a text table with a summary footer.
pub fn render_stock<W: Write>(
    rows: &[StockRow],
    summary: &StockSummary,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{:<24}  {:<14}  {:>10}  {:>8}  {:<9}  {:>12}  {:<12}  {:<12}",
        "Item", "Category", "Stock", "Min", "Status", "Value", "Last Sale", "Last Buy"
    )?;
    writeln!(writer, "{}", "-".repeat(116))?;

    for row in rows {
        writeln!(
            writer,
            "{:<24}  {:<14}  {:>10}  {:>8}  {:<9}  {:>12}  {:<12}  {:<12}",
            truncate(&row.item.name, 24),
            truncate(&row.item.category, 14),
            row.current_stock,
            row.item.minimum_stock_level,
            row.status.label(),
            row.stock_value,
            activity_date(row.last_sale.as_ref()),
            activity_date(row.last_purchase.as_ref()),
        )?;
    }

    writeln!(writer, "{}", "-".repeat(116))?;
    writeln!(
        writer,
        "{} items: {} in stock, {} low, {} negative. Stock value: {}",
        summary.total_items,
        summary.in_stock,
        summary.low_stock,
        summary.negative_stock,
        summary.total_value
    )?;
    Ok(())
}

fn activity_date(last: Option<&LineMatch>) -> String {
    match last {
        Some(m) => m
            .date
            .map_or_else(|| "undated".to_string(), |d| d.date().to_string()),
        None => "-".to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

//! Record normalization: raw documents to ledger entries.
//!
//! This is the single place that knows the per-kind sign table and the
//! field defaults. Everything downstream sees one canonical shape.

use rust_decimal::Decimal;
use tillbook_core::{parse_datetime, LedgerEntry, SourceDocument};

/// Placeholder for a missing customer-side name.
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";
/// Placeholder for a missing supplier-side name.
pub const UNKNOWN_SUPPLIER: &str = "Unknown Supplier";

/// Normalize one raw document into a ledger entry.
///
/// Total over any input: missing amounts default to zero, missing names to a
/// generic placeholder, missing numbers to "". The sign table is fixed
/// policy, not configurable:
///
/// | kind | debit | credit |
/// |---|---|---|
/// | Sale | total | 0 |
/// | Purchase | 0 | total |
/// | Receipt | 0 | amount |
/// | Payment | amount | 0 |
///
/// Sales and outgoing payments both post as debit; this mixed convention is
/// what the combined customer+supplier ledger displays and is preserved
/// exactly.
#[must_use]
pub fn normalize(doc: &SourceDocument) -> LedgerEntry {
    let id = doc.entry_id();
    let document_type = doc.document_type();

    let (raw_date, number, name, counterparty_id, debit, credit) = match doc {
        SourceDocument::Sale(d) => (
            d.date.as_deref(),
            d.number.clone(),
            d.customer_name.clone().unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
            d.customer_id.clone(),
            d.total.unwrap_or_default(),
            Decimal::ZERO,
        ),
        SourceDocument::Purchase(d) => (
            d.date.as_deref(),
            d.number.clone(),
            d.supplier_name.clone().unwrap_or_else(|| UNKNOWN_SUPPLIER.to_string()),
            d.supplier_id.clone(),
            Decimal::ZERO,
            d.total.unwrap_or_default(),
        ),
        SourceDocument::Receipt(d) => (
            d.date.as_deref(),
            d.number.clone(),
            d.received_from.clone().unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
            None,
            Decimal::ZERO,
            d.amount.unwrap_or_default(),
        ),
        SourceDocument::Payment(d) => (
            d.date.as_deref(),
            d.number.clone(),
            d.paid_to.clone().unwrap_or_else(|| UNKNOWN_SUPPLIER.to_string()),
            None,
            d.amount.unwrap_or_default(),
            Decimal::ZERO,
        ),
    };

    let particulars = match doc {
        SourceDocument::Sale(_) => format!("Sale to {name}"),
        SourceDocument::Purchase(_) => format!("Purchase from {name}"),
        SourceDocument::Receipt(_) => format!("Receipt from {name}"),
        SourceDocument::Payment(_) => format!("Payment to {name}"),
    };

    LedgerEntry {
        id,
        date: raw_date.and_then(parse_datetime),
        document_type,
        document_number: number.unwrap_or_default(),
        particulars,
        debit,
        credit,
        balance: Decimal::ZERO,
        counterparty_name: name,
        counterparty_id,
    }
}

//! The normalized ledger entry shape shared by every document kind.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::datetime::EPOCH;
use crate::document::DocumentType;

/// One normalized, dated financial movement derived from a source document.
///
/// Entries are produced by the normalizer and are the unit everything
/// downstream operates on: merging, filtering, balance calculation and
/// pagination all consume and emit `LedgerEntry` values.
///
/// Exactly one of `debit`/`credit` is non-zero, by construction from the
/// per-kind sign table in the normalizer.
///
/// `balance` is **not** a persistent property of the entry. It starts at
/// zero and is assigned by the running-balance calculator for one specific
/// filtered, sorted sequence and seed; the same entry appears with different
/// balances under different filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Stable derived id, `"{kind_tag}-{source_id}"`; the deduplication key
    pub id: String,
    /// Document date; `None` when the source date was missing or unparseable
    pub date: Option<NaiveDateTime>,
    /// Which document kind produced this entry
    pub document_type: DocumentType,
    /// Human-facing document number ("" when the source had none)
    pub document_number: String,
    /// Generated description, e.g. "Sale to Acme"
    pub particulars: String,
    /// Debit amount (zero unless this kind posts as debit)
    pub debit: Decimal,
    /// Credit amount (zero unless this kind posts as credit)
    pub credit: Decimal,
    /// Running balance; assigned by the balance calculator, zero until then
    pub balance: Decimal,
    /// Counterparty display name (customer, supplier, payer or payee)
    pub counterparty_name: String,
    /// Counterparty record id; `None` for receipts and payments, which carry
    /// only free-text names
    pub counterparty_id: Option<String>,
}

impl LedgerEntry {
    /// The sort key for chronological ordering.
    ///
    /// Dateless entries sort as the Unix epoch, i.e. before any real
    /// document date.
    #[must_use]
    pub fn sort_date(&self) -> NaiveDateTime {
        self.date.unwrap_or(EPOCH)
    }

    /// The signed movement this entry contributes to a running balance.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}

//! Merging document collections into one chronological entry sequence.

use std::collections::HashSet;

use tillbook_core::{
    LedgerEntry, PaymentVoucher, PurchaseInvoice, ReceiptVoucher, SaleInvoice, SourceDocument,
};

use crate::normalize::normalize;

/// Merge several document collections into one deduplicated, date-sorted
/// entry sequence.
///
/// Every record is normalized; an entry whose id has already been seen is
/// discarded, so feeding the same collection twice (or overlapping
/// collections) changes nothing. The result is stable-sorted ascending by
/// date, which means entries with equal dates keep the order their
/// collections were processed in.
#[must_use]
pub fn merge(collections: &[&[SourceDocument]]) -> Vec<LedgerEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries: Vec<LedgerEntry> = Vec::new();

    for collection in collections {
        for doc in *collection {
            let entry = normalize(doc);
            if seen.insert(entry.id.clone()) {
                entries.push(entry);
            }
        }
    }

    entries.sort_by_key(LedgerEntry::sort_date);
    entries
}

/// The four typed document collections that feed a ledger.
///
/// [`Self::merge`] processes them in the fixed order Sales, Purchases,
/// Receipts, Payments; together with the stable date sort in [`merge`] that
/// order is the deterministic tie-break for same-day entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedgerSources<'a> {
    /// Sale invoices
    pub sales: &'a [SaleInvoice],
    /// Purchase invoices
    pub purchases: &'a [PurchaseInvoice],
    /// Receipt vouchers
    pub receipts: &'a [ReceiptVoucher],
    /// Payment vouchers
    pub payments: &'a [PaymentVoucher],
}

impl LedgerSources<'_> {
    /// Merge all four collections into one chronological entry sequence.
    #[must_use]
    pub fn merge(&self) -> Vec<LedgerEntry> {
        let sales: Vec<SourceDocument> =
            self.sales.iter().cloned().map(SourceDocument::Sale).collect();
        let purchases: Vec<SourceDocument> = self
            .purchases
            .iter()
            .cloned()
            .map(SourceDocument::Purchase)
            .collect();
        let receipts: Vec<SourceDocument> = self
            .receipts
            .iter()
            .cloned()
            .map(SourceDocument::Receipt)
            .collect();
        let payments: Vec<SourceDocument> = self
            .payments
            .iter()
            .cloned()
            .map(SourceDocument::Payment)
            .collect();

        merge(&[&sales, &purchases, &receipts, &payments])
    }
}

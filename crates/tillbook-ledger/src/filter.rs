//! The fixed-order filter pipeline over merged ledger entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tillbook_core::{end_of_day, start_of_day, DocumentType, LedgerEntry};

/// Which side of the ledger a view is scoped to.
///
/// The scope is applied before any other criterion; in particular it runs
/// before counterparty-name matching, so a name shared by a customer and a
/// supplier can still be separated by tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// All document kinds
    #[default]
    All,
    /// Customer-side documents: sales and receipts
    Customers,
    /// Supplier-side documents: purchases and payments
    Suppliers,
}

impl Scope {
    /// Whether entries of the given kind participate in this scope.
    #[must_use]
    pub const fn admits(self, document_type: DocumentType) -> bool {
        match self {
            Self::All => true,
            Self::Customers => matches!(document_type, DocumentType::Sale | DocumentType::Receipt),
            Self::Suppliers => {
                matches!(document_type, DocumentType::Purchase | DocumentType::Payment)
            }
        }
    }
}

/// Filter criteria applied to a merged entry sequence.
///
/// Stages run in a fixed order, each narrowing the previous stage's output:
///
/// 1. scope
/// 2. counterparty name (exact, case-sensitive)
/// 3. document-type set (empty set means no restriction)
/// 4. date range (both bounds inclusive; `to` covers its whole day)
/// 5. free-text search (case-insensitive substring over number, particulars
///    and counterparty name)
///
/// Counterparty matching is by display name, not id: receipts and payments
/// have no stable counterparty id, so name equality is the only join
/// available. A name collision between a customer and a supplier merges
/// their entries; that is a known limitation of the data, not of the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Tab scope
    pub scope: Scope,
    /// Resolved counterparty display name, when an entity is selected
    pub counterparty: Option<String>,
    /// Allowed document types; empty means all
    pub document_types: Vec<DocumentType>,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound, extended to the end of its day
    pub to: Option<NaiveDate>,
    /// Free-text search term
    pub search: Option<String>,
}

impl EntryFilter {
    /// Run the pipeline over a merged entry sequence.
    ///
    /// The input is never mutated; matching entries are cloned out in order.
    #[must_use]
    pub fn apply(&self, entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
        let mut out: Vec<LedgerEntry> = entries
            .iter()
            .filter(|e| self.scope.admits(e.document_type))
            .cloned()
            .collect();

        if let Some(name) = &self.counterparty {
            out.retain(|e| e.counterparty_name == *name);
        }

        if !self.document_types.is_empty() {
            out.retain(|e| self.document_types.contains(&e.document_type));
        }

        if self.from.is_some() || self.to.is_some() {
            out.retain(|e| self.date_in_range(e));
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !term.is_empty() {
                out.retain(|e| {
                    e.document_number.to_lowercase().contains(&term)
                        || e.particulars.to_lowercase().contains(&term)
                        || e.counterparty_name.to_lowercase().contains(&term)
                });
            }
        }

        out
    }

    /// Whether an entry falls inside the active date range.
    ///
    /// Entries without a parseable date never match an active range.
    fn date_in_range(&self, entry: &LedgerEntry) -> bool {
        let Some(date) = entry.date else {
            return false;
        };
        if let Some(from) = self.from {
            if date < start_of_day(from) {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > end_of_day(to) {
                return false;
            }
        }
        true
    }
}

//! Ledger aggregation engine.
//!
//! This crate turns the four raw document collections into a balanced,
//! filterable, pageable ledger view:
//!
//! - [`normalize`] - map each document kind onto the common entry shape
//! - [`merge`] / [`LedgerSources`] - deduplicate and sort chronologically
//! - [`EntryFilter`] - scope, counterparty, type, date and text criteria in
//!   a fixed order
//! - [`with_balances`] - seed an opening balance and fold debit−credit
//! - [`paginate`] / [`PageCursor`] - fixed-size result windows
//!
//! Every operation is a pure function over in-memory collections: inputs
//! are never mutated, output is rebuilt on each call, and there is nothing
//! to await or cancel. Loading the collections is the caller's problem.
//!
//! # Example
//!
//! ```
//! use tillbook_core::SaleInvoice;
//! use tillbook_ledger::{build_statement, LedgerQuery, LedgerSources};
//! use rust_decimal_macros::dec;
//!
//! let sales = vec![SaleInvoice {
//!     id: "1".to_string(),
//!     date: Some("2024-01-05".to_string()),
//!     number: Some("INV-1".to_string()),
//!     customer_id: None,
//!     customer_name: Some("Acme".to_string()),
//!     total: Some(dec!(1000)),
//! }];
//! let sources = LedgerSources { sales: &sales, ..LedgerSources::default() };
//!
//! let statement = build_statement(&sources, &[], &[], &LedgerQuery::default());
//! assert_eq!(statement.closing_balance, dec!(1000));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod balance;
pub mod filter;
pub mod merge;
pub mod normalize;
pub mod page;

pub use balance::{with_balances, LedgerStatement};
pub use filter::{EntryFilter, Scope};
pub use merge::{merge, LedgerSources};
pub use normalize::normalize;
pub use page::{paginate, total_pages, PageCursor};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tillbook_core::{DocumentType, Party, PartyRef};

/// A complete ledger query: scope, selected party and filter criteria.
///
/// The query is the explicit form of what a statement screen holds; the
/// engine takes it as a plain argument and reaches into no ambient state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerQuery {
    /// Tab scope
    pub scope: Scope,
    /// Selected counterparty, if any
    pub party: Option<PartyRef>,
    /// Allowed document types; empty means all
    pub document_types: Vec<DocumentType>,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
    /// Free-text search term
    pub search: Option<String>,
}

/// Build a balanced statement for the given sources and query.
///
/// Merges the four collections, resolves the selected party against the
/// reference data, filters, then folds balances seeded with the party's
/// opening balance (zero when no party is selected). A party reference that
/// resolves to nothing behaves as no selection at all.
#[must_use]
pub fn build_statement(
    sources: &LedgerSources<'_>,
    customers: &[Party],
    suppliers: &[Party],
    query: &LedgerQuery,
) -> LedgerStatement {
    let merged = sources.merge();

    let party = query
        .party
        .as_ref()
        .and_then(|r| r.resolve(customers, suppliers));

    let filter = EntryFilter {
        scope: query.scope,
        counterparty: party.map(|p| p.name.clone()),
        document_types: query.document_types.clone(),
        from: query.from,
        to: query.to,
        search: query.search.clone(),
    };
    let filtered = filter.apply(&merged);

    let seed = party.map_or(Decimal::ZERO, |p| p.opening_balance);
    with_balances(&filtered, seed)
}

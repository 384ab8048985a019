//! Core types for tillbook
//!
//! This crate provides the fundamental types used throughout the tillbook project:
//!
//! - [`SourceDocument`] - The four raw document kinds (sales, purchases, receipts, payments)
//! - [`LedgerEntry`] - One normalized, dated financial movement derived from a document
//! - [`Party`] - A customer or supplier with an opening balance
//! - [`InventoryItem`] - A stock item with running quantity and valuation rate
//! - [`TransactionRecord`] / [`LineItem`] - Loosely-shaped transaction histories
//!   scanned for last-activity lookups
//!
//! All types are plain data: they are created by the external data layer and
//! only ever read by the engine crates. Derived views (entries with balances,
//! stock rows) are produced fresh on every query.
//!
//! # Example
//!
//! ```
//! use tillbook_core::{InventoryItem, SaleInvoice, SourceDocument};
//! use rust_decimal_macros::dec;
//!
//! let sale = SaleInvoice {
//!     id: "s-100".to_string(),
//!     date: Some("2024-01-05".to_string()),
//!     number: Some("INV-100".to_string()),
//!     customer_id: Some("c-1".to_string()),
//!     customer_name: Some("Acme".to_string()),
//!     total: Some(dec!(1000)),
//! };
//! let doc = SourceDocument::Sale(sale);
//! assert_eq!(doc.entry_id(), "sale-s-100");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod datetime;
pub mod document;
pub mod entry;
pub mod item;
pub mod party;
pub mod txn;

pub use datetime::{end_of_day, parse_datetime, start_of_day, EPOCH};
pub use document::{
    DocumentType, PaymentVoucher, PurchaseInvoice, ReceiptVoucher, SaleInvoice, SourceDocument,
};
pub use entry::LedgerEntry;
pub use item::InventoryItem;
pub use party::{Party, PartyRef};
pub use txn::{LineItem, TransactionRecord};

// Re-export commonly used external types
pub use chrono::{NaiveDate, NaiveDateTime};
pub use rust_decimal::Decimal;

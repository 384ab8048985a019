//! The JSON data layer.
//!
//! The engines operate on already-loaded collections; this module is the
//! loading. One JSON file holds the exported store collections, and each
//! command deserializes the view it needs from it; unknown fields are
//! ignored, so the ledger and stock views read the same file. Fetch
//! failures stop here: the engines themselves have no error path.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use tillbook_core::{
    InventoryItem, Party, PaymentVoucher, PurchaseInvoice, ReceiptVoucher, SaleInvoice,
    TransactionRecord,
};
use tillbook_ledger::LedgerSources;

/// Errors from loading a data file.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be read.
    #[error("failed to read data file {path}: {source}")]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected shape.
    #[error("invalid data in {path}: {source}")]
    Json {
        /// Path of the file
        path: PathBuf,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

/// The collections the ledger statement needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerData {
    /// Customer reference data
    pub customers: Vec<Party>,
    /// Supplier reference data
    pub suppliers: Vec<Party>,
    /// Sale invoices
    pub sales: Vec<SaleInvoice>,
    /// Purchase invoices
    pub purchases: Vec<PurchaseInvoice>,
    /// Receipt vouchers
    pub receipt_vouchers: Vec<ReceiptVoucher>,
    /// Payment vouchers
    pub payment_vouchers: Vec<PaymentVoucher>,
}

impl LedgerData {
    /// Borrow the document collections in engine form.
    #[must_use]
    pub fn sources(&self) -> LedgerSources<'_> {
        LedgerSources {
            sales: &self.sales,
            purchases: &self.purchases,
            receipts: &self.receipt_vouchers,
            payments: &self.payment_vouchers,
        }
    }
}

/// The collections the stock report needs.
///
/// `sales` and `purchases` here are the same stored records as the ledger's
/// invoices, read as loose transaction histories (line items and dates only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockData {
    /// Inventory items
    pub inventory: Vec<InventoryItem>,
    /// Sales transaction history
    pub sales: Vec<TransactionRecord>,
    /// Purchase transaction history
    pub purchases: Vec<TransactionRecord>,
}

/// Load one deserializable view of a data file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

//! Loosely-shaped transaction histories.
//!
//! The stock views need "when did this item last sell / last get bought",
//! answered by scanning transaction records whose line items come from
//! several generations of the store schema: ids live under `_id`, `id`,
//! `productId` or `sku`, line lists under `items` or `products`, dates under
//! `invoiceDate`, `date`, `poDate` or `createdAt`. Rather than scattering
//! `a ?? b ?? c` chains through the matcher, each fallback policy is one
//! method here.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::datetime::parse_datetime;
use crate::item::InventoryItem;

/// One line of a transaction, in any of the historical field spellings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line/product id (`_id` in older records)
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Product id under the newer spelling
    #[serde(default)]
    pub product_id: Option<String>,
    /// Product name field used by some record generations as the identifier
    #[serde(default)]
    pub product_name: Option<String>,
    /// Stock-keeping unit code
    #[serde(default)]
    pub sku: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Quantity moved
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Per-unit rate on this line
    #[serde(default)]
    pub rate: Option<Decimal>,
}

impl LineItem {
    /// The line's identifier: first present of `id`, `product_id`,
    /// `product_name`, `sku`.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.product_id.as_deref())
            .or(self.product_name.as_deref())
            .or(self.sku.as_deref())
    }

    /// The line's display name: `name`, else `product_name`.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().or(self.product_name.as_deref())
    }

    /// Whether this line refers to the given inventory item.
    ///
    /// Matches on identifier equality with the item's id, or on name
    /// equality with the item's name. The name comparison is an independent
    /// fallback: a line can match purely on name even when its identifier is
    /// present but different.
    #[must_use]
    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.identifier() == Some(item.id.as_str()) || self.label() == Some(item.name.as_str())
    }
}

/// A transaction record scanned for last-activity lookups.
///
/// Only the fields the matcher reads are modeled; anything else in the
/// stored record is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Line items under the sales spelling
    #[serde(default)]
    pub items: Option<Vec<LineItem>>,
    /// Line items under the purchase spelling
    #[serde(default)]
    pub products: Option<Vec<LineItem>>,
    /// Invoice date (sales records)
    #[serde(default)]
    pub invoice_date: Option<String>,
    /// Generic date field
    #[serde(default)]
    pub date: Option<String>,
    /// Purchase-order date (purchase records)
    #[serde(default)]
    pub po_date: Option<String>,
    /// Record creation timestamp, the last resort
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TransactionRecord {
    /// The record's effective date: the first **present** of `invoice_date`,
    /// `date`, `po_date`, `created_at`, tolerantly parsed.
    ///
    /// `None` when no date field is present or the first present one does
    /// not parse.
    #[must_use]
    pub fn effective_date(&self) -> Option<NaiveDateTime> {
        let raw = self
            .invoice_date
            .as_deref()
            .or(self.date.as_deref())
            .or(self.po_date.as_deref())
            .or(self.created_at.as_deref())?;
        parse_datetime(raw)
    }
}

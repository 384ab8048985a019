//! Precomputed stock report rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tillbook_core::{InventoryItem, TransactionRecord};

use crate::matcher::{last_match, LineMatch, MatchKind};
use crate::{classify, StockStatus};

/// One fully-derived report row per inventory item.
///
/// Rows carry everything a renderer needs; downstream consumers apply no
/// further business rules to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    /// The item, as stored
    pub item: InventoryItem,
    /// Derived stock-health status
    pub status: StockStatus,
    /// Effective quantity on hand
    pub current_stock: Decimal,
    /// This item's contribution to total stock value
    pub stock_value: Decimal,
    /// Most recent sale line touching this item, if any
    pub last_sale: Option<LineMatch>,
    /// Most recent purchase line touching this item, if any
    pub last_purchase: Option<LineMatch>,
}

/// Build the stock report: one row per item, in input order.
#[must_use]
pub fn stock_report(
    items: &[InventoryItem],
    sales: &[TransactionRecord],
    purchases: &[TransactionRecord],
) -> Vec<StockRow> {
    items
        .iter()
        .map(|item| StockRow {
            status: classify(item),
            current_stock: item.current_stock(),
            stock_value: item.stock_value(),
            last_sale: last_match(item, sales, MatchKind::Sale),
            last_purchase: last_match(item, purchases, MatchKind::Purchase),
            item: item.clone(),
        })
        .collect()
}

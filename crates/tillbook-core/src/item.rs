//! Inventory items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock item.
///
/// Items created before any movement carry only `opening_stock`; once the
/// running quantity has been updated, `stock` is present and takes
/// precedence. The "which field wins" policy lives in [`Self::current_stock`]
/// and nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Store identifier
    pub id: String,
    /// Item name, also used as the fallback match key in transaction scans
    pub name: String,
    /// Item category ("" when unset)
    #[serde(default)]
    pub category: String,
    /// Quantity at item creation
    #[serde(default)]
    pub opening_stock: Option<Decimal>,
    /// Running quantity, present once the item has seen movement.
    /// May be negative when more was sold than was ever in stock.
    #[serde(default)]
    pub stock: Option<Decimal>,
    /// Reorder threshold; zero means no low-stock flagging
    #[serde(default)]
    pub minimum_stock_level: Decimal,
    /// Per-unit selling rate used for valuation
    #[serde(default)]
    pub sales_rate: Decimal,
}

impl InventoryItem {
    /// The effective quantity on hand: `stock`, else `opening_stock`, else 0.
    #[must_use]
    pub fn current_stock(&self) -> Decimal {
        self.stock.or(self.opening_stock).unwrap_or_default()
    }

    /// The item's contribution to total stock value.
    ///
    /// No floor at zero: negative stock contributes a negative term.
    #[must_use]
    pub fn stock_value(&self) -> Decimal {
        self.current_stock() * self.sales_rate
    }
}

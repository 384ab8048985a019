//! Stock engine: status classification, valuation and last-activity reporting.
//!
//! This crate derives read-only views over the inventory:
//!
//! - [`classify`] - per-item stock-health status
//! - [`stock_value`] / [`summarize`] - aggregate valuation and status counts
//! - [`last_match`] - most recent matching line item across a transaction
//!   collection
//! - [`stock_report`] - one precomputed row per item for rendering
//!
//! Like the ledger engine, everything here is a pure function over
//! already-loaded collections; nothing is cached or mutated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod matcher;
pub mod report;

pub use matcher::{last_match, LineMatch, MatchKind};
pub use report::{stock_report, StockRow};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tillbook_core::InventoryItem;

/// Stock-health status, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Quantity on hand at or above the healthy range
    InStock,
    /// Positive quantity below the minimum stock level
    LowStock,
    /// Negative quantity: more sold than was ever in stock
    NegativeStock,
}

impl StockStatus {
    /// Human-readable label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::NegativeStock => "Negative",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an item's stock health.
///
/// Fixed thresholds, checked in order:
///
/// 1. negative quantity is always [`StockStatus::NegativeStock`];
/// 2. a positive quantity below a positive minimum level is
///    [`StockStatus::LowStock`];
/// 3. everything else is [`StockStatus::InStock`].
///
/// A quantity of exactly zero is `InStock` even when a minimum level is set:
/// the low-stock flag marks items running low, and an item at zero has
/// already run out. This asymmetry is deliberate policy.
#[must_use]
pub fn classify(item: &InventoryItem) -> StockStatus {
    let current = item.current_stock();
    if current < Decimal::ZERO {
        StockStatus::NegativeStock
    } else if item.minimum_stock_level > Decimal::ZERO
        && current > Decimal::ZERO
        && current < item.minimum_stock_level
    {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Total stock value: Σ current stock × sales rate over all items.
///
/// No floor at zero: negative-stock items contribute a negative term, so
/// the total reflects the book position, not just what is on the shelves.
#[must_use]
pub fn stock_value(items: &[InventoryItem]) -> Decimal {
    items.iter().map(InventoryItem::stock_value).sum()
}

/// Aggregate counts and valuation for an inventory list.
///
/// The three status counts always partition `total_items`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    /// Number of items in the list
    pub total_items: usize,
    /// Items classified [`StockStatus::InStock`]
    pub in_stock: usize,
    /// Items classified [`StockStatus::LowStock`]
    pub low_stock: usize,
    /// Items classified [`StockStatus::NegativeStock`]
    pub negative_stock: usize,
    /// Total stock value across all items
    pub total_value: Decimal,
}

/// Summarize an inventory list.
#[must_use]
pub fn summarize(items: &[InventoryItem]) -> StockSummary {
    let mut summary = StockSummary {
        total_items: items.len(),
        ..StockSummary::default()
    };
    for item in items {
        match classify(item) {
            StockStatus::InStock => summary.in_stock += 1,
            StockStatus::LowStock => summary.low_stock += 1,
            StockStatus::NegativeStock => summary.negative_stock += 1,
        }
        summary.total_value += item.stock_value();
    }
    summary
}

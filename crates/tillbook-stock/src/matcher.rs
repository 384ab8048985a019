//! Last-transaction matching: when did an item last sell or last get bought.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tillbook_core::{InventoryItem, LineItem, TransactionRecord, EPOCH};

/// Which side of the transaction history to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Sales: line items live under `items`, falling back to `products`
    Sale,
    /// Purchases: line items live under `products`
    Purchase,
}

/// The most recent line item matching an inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatch {
    /// The matched line, as stored
    pub line: LineItem,
    /// The owning transaction's effective date, when it had one
    pub date: Option<NaiveDateTime>,
    /// Quantity moved on the line (0 when absent)
    pub quantity: Decimal,
    /// Per-unit rate on the line (0 when absent)
    pub rate: Decimal,
}

/// Find the most recent line item across `transactions` that refers to
/// `item`.
///
/// A line matches on identifier equality with the item's id or on name
/// equality with the item's name (see [`LineItem::matches`]). Among all
/// matches the latest transaction date wins; transactions without a
/// parseable date rank as the epoch, so they only win when nothing dated
/// matches. Equal dates resolve to the last match in iteration order.
///
/// Returns `None` when no transaction contains a matching line.
#[must_use]
pub fn last_match(
    item: &InventoryItem,
    transactions: &[TransactionRecord],
    kind: MatchKind,
) -> Option<LineMatch> {
    let mut best: Option<(NaiveDateTime, LineMatch)> = None;

    for txn in transactions {
        let lines = match kind {
            MatchKind::Sale => txn.items.as_deref().or(txn.products.as_deref()),
            MatchKind::Purchase => txn.products.as_deref(),
        };
        let Some(lines) = lines else {
            continue;
        };

        let date = txn.effective_date();
        let rank = date.unwrap_or(EPOCH);

        for line in lines {
            if !line.matches(item) {
                continue;
            }
            // >= keeps the last-seen match on equal dates
            if best.as_ref().map_or(true, |(b, _)| rank >= *b) {
                best = Some((
                    rank,
                    LineMatch {
                        line: line.clone(),
                        date,
                        quantity: line.quantity.unwrap_or_default(),
                        rate: line.rate.unwrap_or_default(),
                    },
                ));
            }
        }
    }

    best.map(|(_, m)| m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn widget() -> InventoryItem {
        InventoryItem {
            id: "i-1".to_string(),
            name: "Widget".to_string(),
            category: String::new(),
            opening_stock: None,
            stock: None,
            minimum_stock_level: Decimal::ZERO,
            sales_rate: Decimal::ZERO,
        }
    }

    fn line(id: &str, qty: Decimal) -> LineItem {
        LineItem {
            id: Some(id.to_string()),
            quantity: Some(qty),
            rate: Some(dec!(20)),
            ..LineItem::default()
        }
    }

    fn sale_txn(date: &str, lines: Vec<LineItem>) -> TransactionRecord {
        TransactionRecord {
            items: Some(lines),
            invoice_date: Some(date.to_string()),
            ..TransactionRecord::default()
        }
    }

    fn purchase_txn(date: &str, lines: Vec<LineItem>) -> TransactionRecord {
        TransactionRecord {
            products: Some(lines),
            po_date: Some(date.to_string()),
            ..TransactionRecord::default()
        }
    }

    #[test]
    fn test_latest_date_wins() {
        let txns = vec![
            sale_txn("2024-01-10", vec![line("i-1", dec!(2))]),
            sale_txn("2024-03-01", vec![line("i-1", dec!(5))]),
            sale_txn("2024-02-01", vec![line("i-1", dec!(3))]),
        ];
        let m = last_match(&widget(), &txns, MatchKind::Sale).unwrap();
        assert_eq!(m.quantity, dec!(5));
        assert_eq!(m.rate, dec!(20));
    }

    #[test]
    fn test_no_match_returns_none() {
        let txns = vec![sale_txn("2024-01-10", vec![line("other", dec!(2))])];
        assert!(last_match(&widget(), &txns, MatchKind::Sale).is_none());
        assert!(last_match(&widget(), &[], MatchKind::Sale).is_none());
    }

    #[test]
    fn test_sale_falls_back_to_products_field() {
        // Older sales records keep their lines under `products`
        let txn = TransactionRecord {
            products: Some(vec![line("i-1", dec!(4))]),
            date: Some("2024-01-10".to_string()),
            ..TransactionRecord::default()
        };
        let m = last_match(&widget(), &[txn], MatchKind::Sale).unwrap();
        assert_eq!(m.quantity, dec!(4));
    }

    #[test]
    fn test_purchase_reads_products_only() {
        // A purchase scan ignores `items`
        let txn = TransactionRecord {
            items: Some(vec![line("i-1", dec!(4))]),
            date: Some("2024-01-10".to_string()),
            ..TransactionRecord::default()
        };
        assert!(last_match(&widget(), &[txn], MatchKind::Purchase).is_none());

        let txns = vec![purchase_txn("2024-02-02", vec![line("i-1", dec!(9))])];
        let m = last_match(&widget(), &txns, MatchKind::Purchase).unwrap();
        assert_eq!(m.quantity, dec!(9));
    }

    #[test]
    fn test_name_fallback_matches_despite_different_id() {
        let mut l = line("not-the-id", dec!(7));
        l.name = Some("Widget".to_string());
        let txns = vec![sale_txn("2024-01-10", vec![l])];
        let m = last_match(&widget(), &txns, MatchKind::Sale).unwrap();
        assert_eq!(m.quantity, dec!(7));
    }

    #[test]
    fn test_equal_dates_keep_last_seen() {
        let txns = vec![
            sale_txn("2024-01-10", vec![line("i-1", dec!(1))]),
            sale_txn("2024-01-10", vec![line("i-1", dec!(2))]),
        ];
        let m = last_match(&widget(), &txns, MatchKind::Sale).unwrap();
        assert_eq!(m.quantity, dec!(2));
    }

    #[test]
    fn test_undated_match_loses_to_dated() {
        let undated = TransactionRecord {
            items: Some(vec![line("i-1", dec!(99))]),
            ..TransactionRecord::default()
        };
        let txns = vec![undated.clone(), sale_txn("2024-01-10", vec![line("i-1", dec!(2))])];
        let m = last_match(&widget(), &txns, MatchKind::Sale).unwrap();
        assert_eq!(m.quantity, dec!(2));

        // But it still matches when nothing dated does
        let m = last_match(&widget(), &[undated], MatchKind::Sale).unwrap();
        assert_eq!(m.quantity, dec!(99));
        assert!(m.date.is_none());
    }

    #[test]
    fn test_missing_quantity_and_rate_default_to_zero() {
        let l = LineItem {
            id: Some("i-1".to_string()),
            ..LineItem::default()
        };
        let txns = vec![sale_txn("2024-01-10", vec![l])];
        let m = last_match(&widget(), &txns, MatchKind::Sale).unwrap();
        assert_eq!(m.quantity, Decimal::ZERO);
        assert_eq!(m.rate, Decimal::ZERO);
    }
}

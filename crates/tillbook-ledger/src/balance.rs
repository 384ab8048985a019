//! Running-balance calculation over a filtered, sorted entry sequence.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tillbook_core::LedgerEntry;

/// A filtered entry sequence with running balances and totals.
///
/// Positive balances display as CR (owed to the business), negative as DR;
/// the labeling itself is a rendering concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatement {
    /// Entries in sequence order, each carrying its running balance
    pub entries: Vec<LedgerEntry>,
    /// Sum of all debit amounts
    pub total_debit: Decimal,
    /// Sum of all credit amounts
    pub total_credit: Decimal,
    /// Balance after the last entry, or the seed when the sequence is empty
    pub closing_balance: Decimal,
}

/// Fold running balances over an already-filtered, already-sorted sequence.
///
/// Starting from `seed` (the selected party's opening balance, or zero),
/// each entry's balance becomes `previous + debit - credit`. The input
/// entries are not mutated; each output entry is a snapshot copy carrying
/// the balance computed for this particular sequence and seed.
#[must_use]
pub fn with_balances(entries: &[LedgerEntry], seed: Decimal) -> LedgerStatement {
    let mut running = seed;
    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;

    let entries: Vec<LedgerEntry> = entries
        .iter()
        .map(|entry| {
            running += entry.signed_amount();
            total_debit += entry.debit;
            total_credit += entry.credit;
            let mut snapshot = entry.clone();
            snapshot.balance = running;
            snapshot
        })
        .collect();

    LedgerStatement {
        entries,
        total_debit,
        total_credit,
        closing_balance: running,
    }
}

//! Property-based tests for the ledger engine.
//!
//! These tests verify invariants hold for arbitrary inputs using proptest.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tillbook_core::{
    DocumentType, LedgerEntry, PaymentVoucher, PurchaseInvoice, ReceiptVoucher, SaleInvoice,
    SourceDocument,
};
use tillbook_ledger::{
    merge, normalize, paginate, total_pages, with_balances, EntryFilter, Scope,
};

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        3 => (-1_000_000i64..1_000_000i64).prop_map(|n| Some(Decimal::new(n, 2))),
        1 => Just(None),
    ]
}

fn arb_date() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => (2020u32..2026u32, 1u32..13u32, 1u32..29u32)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
        1 => Just(Some("not a date".to_string())),
        1 => Just(None),
    ]
}

fn arb_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("Acme".to_string())),
        Just(Some("Bolt Co".to_string())),
        Just(Some("Widget Works".to_string())),
        Just(None),
    ]
}

fn arb_id() -> impl Strategy<Value = String> {
    // Small range so duplicate ids actually occur
    (0u32..20u32).prop_map(|n| n.to_string())
}

fn arb_document() -> impl Strategy<Value = SourceDocument> {
    (arb_id(), arb_date(), arb_name(), arb_amount(), 0u8..4u8).prop_map(
        |(id, date, name, amount, kind)| match kind {
            0 => SourceDocument::Sale(SaleInvoice {
                id,
                date,
                number: None,
                customer_id: None,
                customer_name: name,
                total: amount,
            }),
            1 => SourceDocument::Purchase(PurchaseInvoice {
                id,
                date,
                number: None,
                supplier_id: None,
                supplier_name: name,
                total: amount,
            }),
            2 => SourceDocument::Receipt(ReceiptVoucher {
                id,
                date,
                number: None,
                received_from: name,
                amount,
            }),
            _ => SourceDocument::Payment(PaymentVoucher {
                id,
                date,
                number: None,
                paid_to: name,
                amount,
            }),
        },
    )
}

fn arb_documents() -> impl Strategy<Value = Vec<SourceDocument>> {
    prop::collection::vec(arb_document(), 0..40)
}

fn arb_entries() -> impl Strategy<Value = Vec<LedgerEntry>> {
    arb_documents().prop_map(|docs| merge(&[&docs]))
}

fn arb_seed() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_scope() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::All),
        Just(Scope::Customers),
        Just(Scope::Suppliers)
    ]
}

// ============================================================================
// Normalizer and merger properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every normalized entry has at most one non-zero side.
    #[test]
    fn prop_sign_invariant(doc in arb_document()) {
        let entry = normalize(&doc);
        prop_assert_eq!(entry.debit * entry.credit, Decimal::ZERO);
    }

    /// Normalization is deterministic.
    #[test]
    fn prop_normalize_deterministic(doc in arb_document()) {
        prop_assert_eq!(normalize(&doc), normalize(&doc));
    }

    /// Merging the same collections twice yields the same sequence, and
    /// duplicating a collection changes nothing.
    #[test]
    fn prop_merge_idempotent(docs in arb_documents()) {
        let once = merge(&[&docs]);
        let again = merge(&[&docs]);
        prop_assert_eq!(&once, &again);

        let duplicated = merge(&[&docs, &docs]);
        prop_assert_eq!(&once, &duplicated);
    }

    /// Merged output is sorted ascending by the entry sort date and contains
    /// no duplicate ids.
    #[test]
    fn prop_merge_sorted_and_unique(docs in arb_documents()) {
        let merged = merge(&[&docs]);
        for pair in merged.windows(2) {
            prop_assert!(pair[0].sort_date() <= pair[1].sort_date());
        }
        let mut ids: Vec<&str> = merged.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
    }
}

// ============================================================================
// Filter properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A filter never grows the sequence.
    #[test]
    fn prop_filter_shrinks(entries in arb_entries(), scope in arb_scope()) {
        let filter = EntryFilter { scope, ..EntryFilter::default() };
        prop_assert!(filter.apply(&entries).len() <= entries.len());
    }

    /// Adding a criterion to an existing filter never increases the result.
    #[test]
    fn prop_filter_monotone(
        entries in arb_entries(),
        scope in arb_scope(),
        term in prop_oneof![Just("acme"), Just("unknown"), Just("zzz")],
    ) {
        let base = EntryFilter { scope, ..EntryFilter::default() };
        let narrowed = EntryFilter {
            scope,
            search: Some(term.to_string()),
            ..EntryFilter::default()
        };
        prop_assert!(narrowed.apply(&entries).len() <= base.apply(&entries).len());

        let typed = EntryFilter {
            scope,
            document_types: vec![DocumentType::Sale],
            ..EntryFilter::default()
        };
        prop_assert!(typed.apply(&entries).len() <= base.apply(&entries).len());
    }

    /// The scope stage admits exactly the kinds of its tab.
    #[test]
    fn prop_scope_partition(entries in arb_entries()) {
        let customers = EntryFilter { scope: Scope::Customers, ..EntryFilter::default() };
        let suppliers = EntryFilter { scope: Scope::Suppliers, ..EntryFilter::default() };
        let n = customers.apply(&entries).len() + suppliers.apply(&entries).len();
        prop_assert_eq!(n, entries.len());
    }
}

// ============================================================================
// Balance properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// balance(e_k) == seed + sum of signed amounts up to k, for every k.
    #[test]
    fn prop_balance_fold(entries in arb_entries(), seed in arb_seed()) {
        let statement = with_balances(&entries, seed);
        let mut expected = seed;
        for (entry, original) in statement.entries.iter().zip(entries.iter()) {
            expected += original.debit - original.credit;
            prop_assert_eq!(entry.balance, expected);
        }
        prop_assert_eq!(statement.closing_balance, expected);
    }

    /// Totals match the column sums, and closing balance ties out against
    /// them: closing == seed + total_debit - total_credit.
    #[test]
    fn prop_balance_totals(entries in arb_entries(), seed in arb_seed()) {
        let statement = with_balances(&entries, seed);
        let debit: Decimal = entries.iter().map(|e| e.debit).sum();
        let credit: Decimal = entries.iter().map(|e| e.credit).sum();
        prop_assert_eq!(statement.total_debit, debit);
        prop_assert_eq!(statement.total_credit, credit);
        prop_assert_eq!(statement.closing_balance, seed + debit - credit);
    }
}

// ============================================================================
// Pager properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The pager never panics, out-of-range pages are empty, and the pages
    /// concatenate back to the whole sequence.
    #[test]
    fn prop_pager_total(len in 0usize..200, page_size in 0usize..30, wild_page in 0usize..500) {
        let items: Vec<usize> = (0..len).collect();

        // Any page request is safe
        let slice = paginate(&items, wild_page, page_size);
        prop_assert!(slice.len() <= page_size.max(1));

        let pages = total_pages(len, page_size);
        if page_size > 0 {
            prop_assert!(paginate(&items, pages + 1, page_size).is_empty());

            let mut rebuilt: Vec<usize> = Vec::new();
            for page in 1..=pages {
                rebuilt.extend_from_slice(paginate(&items, page, page_size));
            }
            prop_assert_eq!(rebuilt, items);
        }
    }
}

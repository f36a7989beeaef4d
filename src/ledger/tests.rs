#![allow(clippy::unwrap_used)]

use super::*;
use crate::categorize::Classifier;
use crate::models::{StatementBatch, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn txn(d: &str, desc: &str, amount: Decimal, statement_id: &str) -> Transaction {
    Transaction {
        date: date(d),
        description: desc.into(),
        raw_description: desc.into(),
        amount,
        category: "Uncategorized".into(),
        subcategory: "Other".into(),
        source_subcategory: None,
        statement_id: statement_id.into(),
    }
}

fn batch(id: &str, txns: &[Transaction]) -> StatementBatch {
    let mut b = StatementBatch::new("test.csv").with_transactions(txns);
    b.id = id.into();
    b
}

fn ten_rows(statement_id: &str) -> Vec<Transaction> {
    (1..=10)
        .map(|i| {
            txn(
                &format!("2024-01-{i:02}"),
                &format!("VENDOR {i}"),
                Decimal::from(-i),
                statement_id,
            )
        })
        .collect()
}

// ── Merge and dedup ───────────────────────────────────────────

#[test]
fn test_merge_appends_and_sorts_descending() {
    let mut ledger = Ledger::new();
    let rows = vec![
        txn("2024-01-05", "A", dec!(-1), "s1"),
        txn("2024-01-20", "B", dec!(-2), "s1"),
        txn("2024-01-12", "C", dec!(-3), "s1"),
    ];
    let accepted = ledger.merge(batch("s1", &rows), rows.clone());
    assert_eq!(accepted, 3);
    let dates: Vec<NaiveDate> = ledger.transactions().iter().map(|t| t.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-20"), date("2024-01-12"), date("2024-01-05")]
    );
    assert_eq!(ledger.statements().len(), 1);
}

#[test]
fn test_merge_same_batch_twice_is_idempotent() {
    let mut ledger = Ledger::new();
    let rows = ten_rows("s1");
    ledger.merge(batch("s1", &rows), rows.clone());
    assert_eq!(ledger.len(), 10);

    let rows_again: Vec<Transaction> = ten_rows("s2");
    let accepted = ledger.merge(batch("s2", &rows_again), rows_again);
    assert_eq!(accepted, 0);
    assert_eq!(ledger.len(), 10, "duplicate import must not grow the ledger");
    // Both statements are recorded even though the second brought nothing.
    assert_eq!(ledger.statements().len(), 2);
}

#[test]
fn test_merge_existing_rows_win_over_incoming() {
    let mut ledger = Ledger::new();
    let mut original = txn("2024-01-05", "COFFEE", dec!(-4.50), "s1");
    original.category = "Food".into();
    ledger.merge(batch("s1", std::slice::from_ref(&original)), vec![original]);

    let mut duplicate = txn("2024-01-05", "COFFEE", dec!(-4.50), "s2");
    duplicate.category = "Entertainment".into();
    ledger.merge(batch("s2", std::slice::from_ref(&duplicate)), vec![duplicate]);

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.transactions()[0].category, "Food");
    assert_eq!(ledger.transactions()[0].statement_id, "s1");
}

#[test]
fn test_merge_dedup_key_ignores_trailing_zeros() {
    let mut ledger = Ledger::new();
    ledger.merge(
        batch("s1", &[]),
        vec![txn("2024-01-05", "COFFEE", dec!(-4.50), "s1")],
    );
    ledger.merge(
        batch("s2", &[]),
        vec![txn("2024-01-05", "COFFEE", dec!(-4.5), "s2")],
    );
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_merge_same_day_same_amount_different_description_kept() {
    let mut ledger = Ledger::new();
    ledger.merge(
        batch("s1", &[]),
        vec![
            txn("2024-01-05", "COFFEE", dec!(-4.50), "s1"),
            txn("2024-01-05", "TEA", dec!(-4.50), "s1"),
        ],
    );
    assert_eq!(ledger.len(), 2);
}

// ── Statement removal ─────────────────────────────────────────

#[test]
fn test_remove_statement_cascades() {
    let mut ledger = Ledger::new();
    let first = ten_rows("s1");
    ledger.merge(batch("s1", &first), first);
    let second = vec![txn("2024-02-01", "EXTRA", dec!(-5), "s2")];
    ledger.merge(batch("s2", &second), second);
    assert_eq!(ledger.len(), 11);

    let removed = ledger.remove_statement("s1");
    assert_eq!(removed, 10);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.statements().len(), 1);
    assert_eq!(ledger.statements()[0].id, "s2");
}

#[test]
fn test_remove_unknown_statement_is_noop() {
    let mut ledger = Ledger::new();
    let rows = ten_rows("s1");
    ledger.merge(batch("s1", &rows), rows);
    assert_eq!(ledger.remove_statement("nope"), 0);
    assert_eq!(ledger.len(), 10);
}

// ── Recategorization ──────────────────────────────────────────

#[test]
fn test_recategorize_by_description() {
    let mut ledger = Ledger::new();
    ledger.merge(
        batch("s1", &[]),
        vec![
            txn("2024-01-05", "COFFEE", dec!(-4.50), "s1"),
            txn("2024-01-06", "COFFEE", dec!(-4.20), "s1"),
            txn("2024-01-07", "TEA", dec!(-3.00), "s1"),
        ],
    );
    let updated = ledger.recategorize("COFFEE", "Food", "Dining Out");
    assert_eq!(updated, 2);
    for t in ledger.transactions() {
        if t.description == "COFFEE" {
            assert_eq!(t.category, "Food");
            assert_eq!(t.subcategory, "Dining Out");
        } else {
            assert_eq!(t.category, "Uncategorized");
        }
    }
}

#[test]
fn test_reclassify_all_restores_rule_assignments() {
    let mut ledger = Ledger::new();
    let mut row = txn("2024-01-05", "Tesco", dec!(-30.00), "s1");
    row.category = "Entertainment".into();
    row.subcategory = "Movies".into();
    ledger.merge(batch("s1", &[]), vec![row]);

    let classifier = Classifier::with_defaults().unwrap();
    ledger.reclassify_all(&classifier);
    assert_eq!(ledger.transactions()[0].category, "Food");
    assert_eq!(ledger.transactions()[0].subcategory, "Groceries");
}

// ── Windows ───────────────────────────────────────────────────

#[test]
fn test_between_is_inclusive() {
    let mut ledger = Ledger::new();
    let rows = ten_rows("s1");
    ledger.merge(batch("s1", &rows), rows);
    let window = ledger.between(date("2024-01-03"), date("2024-01-06"));
    assert_eq!(window.len(), 4);
    assert!(window
        .iter()
        .all(|t| t.date >= date("2024-01-03") && t.date <= date("2024-01-06")));
}

#[test]
fn test_date_range() {
    let mut ledger = Ledger::new();
    assert!(ledger.date_range().is_none());
    let rows = ten_rows("s1");
    ledger.merge(batch("s1", &rows), rows);
    assert_eq!(
        ledger.date_range(),
        Some((date("2024-01-01"), date("2024-01-10")))
    );
}

#![allow(clippy::unwrap_used)]

use super::*;
use crate::categorize::Classifier;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

fn pipeline() -> (DescriptionCleaner, Classifier) {
    (
        DescriptionCleaner::new().unwrap(),
        Classifier::with_defaults().unwrap(),
    )
}

// ── parse_date ────────────────────────────────────────────────

#[test]
fn test_parse_date_day_first() {
    // 03/04 is the 3rd of April, not March 4th.
    let d = parse_date("03/04/2024").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
}

#[test]
fn test_parse_date_iso() {
    let d = parse_date("2024-01-15").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test]
fn test_parse_date_us_fallback() {
    // Month-first only parses when day-first cannot.
    let d = parse_date("01/15/2024").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test]
fn test_parse_date_short_month_name() {
    let d = parse_date("15 Jan 2024").unwrap();
    assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test]
fn test_parse_date_invalid() {
    assert!(parse_date("").is_err());
    assert!(parse_date("not a date").is_err());
}

// ── import_table ──────────────────────────────────────────────

#[test]
fn test_import_fixed_layout_carries_subcategory_hint() {
    let (cleaner, classifier) = pipeline();
    let t = table(
        &["Number", "Date", "Account", "Amount", "Subcategory", "Memo"],
        &[&[
            "1",
            "15/01/2024",
            "20-00-00 123",
            "-45.00",
            "Direct Debit",
            "BUPA CENTRAL DDR",
        ]],
    );
    let batch = import_table(&t, "barclays.csv", &cleaner, &classifier).unwrap();
    assert_eq!(batch.transactions.len(), 1);
    let txn = &batch.transactions[0];
    assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(txn.amount, dec!(-45.00));
    assert_eq!(txn.source_subcategory.as_deref(), Some("Direct Debit"));
    assert_eq!(txn.raw_description, "BUPA CENTRAL DDR");
    assert_eq!(txn.category, "Healthcare");
    assert_eq!(txn.subcategory, "Health Insurance");
    assert_eq!(txn.statement_id, batch.statement.id);
}

#[test]
fn test_import_drops_unparsable_rows_and_counts_them() {
    let (cleaner, classifier) = pipeline();
    let t = table(
        &["Date", "Description", "Amount"],
        &[
            &["15/01/2024", "COFFEE SHOP LEEDS", "-4.50"],
            &["garbage", "BROKEN DATE ROW", "-1.00"],
            &["16/01/2024", "BROKEN AMOUNT ROW", "oops"],
            &["17/01/2024", "GROCERY STORE YORK", "-82.10"],
        ],
    );
    let batch = import_table(&t, "jan.csv", &cleaner, &classifier).unwrap();
    assert_eq!(batch.transactions.len(), 2);
    assert_eq!(batch.stats.rows, 4);
    assert_eq!(batch.stats.dropped_dates, 1);
    assert_eq!(batch.stats.dropped_amounts, 1);
    assert_eq!(batch.stats.dropped(), 2);
}

#[test]
fn test_import_split_columns_normalized() {
    let (cleaner, classifier) = pipeline();
    let t = table(
        &["Date", "Description", "Debit", "Credit"],
        &[&["15/01/2024", "TESCO STORES", "120.00", "0"]],
    );
    let batch = import_table(&t, "split.csv", &cleaner, &classifier).unwrap();
    let txn = &batch.transactions[0];
    assert_eq!(txn.amount, dec!(-120.00));
    assert_eq!(txn.description, "Tesco");
    assert_eq!(txn.category, "Food");
    assert_eq!(txn.subcategory, "Groceries");
}

#[test]
fn test_import_income_sign_flipped_non_negative() {
    let (cleaner, classifier) = pipeline();
    let t = table(
        &["Date", "Description", "Amount"],
        &[&["31/01/2024", "MONTHLY SALARY", "-2500.00"]],
    );
    let batch = import_table(&t, "pay.csv", &cleaner, &classifier).unwrap();
    let txn = &batch.transactions[0];
    assert_eq!(txn.category, "Income");
    assert_eq!(txn.amount, dec!(2500.00));
}

#[test]
fn test_import_statement_metadata() {
    let (cleaner, classifier) = pipeline();
    let t = table(
        &["Date", "Description", "Amount"],
        &[
            &["20/01/2024", "COFFEE SHOP LEEDS", "-4.50"],
            &["05/01/2024", "GROCERY STORE YORK", "-82.10"],
        ],
    );
    let batch = import_table(&t, "jan.csv", &cleaner, &classifier).unwrap();
    assert_eq!(batch.statement.source_filename, "jan.csv");
    assert_eq!(batch.statement.transaction_count, 2);
    let (min, max) = batch.statement.date_range.unwrap();
    assert_eq!(min, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(max, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
}

#[test]
fn test_import_rejects_unsniffable_schema() {
    let (cleaner, classifier) = pipeline();
    let t = table(&["Foo"], &[&["just words"]]);
    assert!(import_table(&t, "bad.csv", &cleaner, &classifier).is_err());
}

// ── import_tables (extraction boundary) ───────────────────────

#[test]
fn test_import_tables_concatenates() {
    let (cleaner, classifier) = pipeline();
    let t1 = table(
        &["Date", "Description", "Amount"],
        &[&["15/01/2024", "COFFEE SHOP LEEDS", "-4.50"]],
    );
    let t2 = table(
        &["Date", "Description", "Amount"],
        &[&["16/01/2024", "GROCERY STORE YORK", "-82.10"]],
    );
    let batch = import_tables(vec![t1, t2], "doc.pdf", &cleaner, &classifier).unwrap();
    assert_eq!(batch.transactions.len(), 2);
}

#[test]
fn test_import_tables_empty_extraction_fails() {
    let (cleaner, classifier) = pipeline();
    let err = import_tables(Vec::new(), "doc.pdf", &cleaner, &classifier).unwrap_err();
    assert!(err.to_string().contains("no tables"));
}

#[test]
fn test_import_tables_all_empty_extraction_fails() {
    let (cleaner, classifier) = pipeline();
    let empty = table(&["Date", "Description", "Amount"], &[]);
    assert!(import_tables(vec![empty], "doc.pdf", &cleaner, &classifier).is_err());
}

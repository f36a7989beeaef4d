#![allow(clippy::unwrap_used)]

use super::*;
use crate::import::AmountColumns;
use rust_decimal_macros::dec;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

// ── parse_money ───────────────────────────────────────────────

#[test]
fn test_parse_money_basic() {
    assert_eq!(parse_money("100.50").unwrap(), dec!(100.50));
    assert_eq!(parse_money("-42.99").unwrap(), dec!(-42.99));
}

#[test]
fn test_parse_money_currency_symbols() {
    assert_eq!(parse_money("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_money("£99.99").unwrap(), dec!(99.99));
    assert_eq!(parse_money("€-12.00").unwrap(), dec!(-12.00));
}

#[test]
fn test_parse_money_whitespace_and_quotes() {
    assert_eq!(parse_money(" \"1 234.00\" ").unwrap(), dec!(1234.00));
}

#[test]
fn test_parse_money_parentheses_negative() {
    assert_eq!(parse_money("(500.00)").unwrap(), dec!(-500.00));
    assert_eq!(parse_money("($1,500.00)").unwrap(), dec!(-1500.00));
}

#[test]
fn test_parse_money_credit_marker() {
    assert_eq!(parse_money("250.00CR").unwrap(), dec!(250.00));
    assert_eq!(parse_money("250.00 CR").unwrap(), dec!(250.00));
}

#[test]
fn test_parse_money_debit_marker() {
    assert_eq!(parse_money("120.00DR").unwrap(), dec!(-120.00));
}

#[test]
fn test_parse_money_empty_is_error() {
    assert!(parse_money("").is_err());
    assert!(parse_money("   ").is_err());
}

#[test]
fn test_parse_money_invalid() {
    assert!(parse_money("not_a_number").is_err());
    assert!(parse_money("12/01/2024").is_err());
}

// ── row_amount, single column ─────────────────────────────────

#[test]
fn test_row_amount_single_column() {
    let columns = AmountColumns::Single(2);
    let r = row(&["15/01/2024", "Coffee", "-4.50"]);
    assert_eq!(row_amount(&r, &columns).unwrap(), dec!(-4.50));
}

#[test]
fn test_row_amount_single_column_unparsable() {
    let columns = AmountColumns::Single(2);
    let r = row(&["15/01/2024", "Coffee", "n/a"]);
    assert!(row_amount(&r, &columns).is_err());
}

#[test]
fn test_row_amount_single_column_missing_cell() {
    let columns = AmountColumns::Single(5);
    let r = row(&["15/01/2024", "Coffee"]);
    assert!(row_amount(&r, &columns).is_err());
}

// ── row_amount, split columns ─────────────────────────────────

#[test]
fn test_row_amount_debit_only() {
    let columns = AmountColumns::Split {
        debit: 2,
        credit: 3,
    };
    let r = row(&["15/01/2024", "TESCO STORES", "120.00", "0"]);
    assert_eq!(row_amount(&r, &columns).unwrap(), dec!(-120.00));
}

#[test]
fn test_row_amount_credit_only() {
    let columns = AmountColumns::Split {
        debit: 2,
        credit: 3,
    };
    let r = row(&["15/01/2024", "SALARY", "", "2500.00"]);
    assert_eq!(row_amount(&r, &columns).unwrap(), dec!(2500.00));
}

#[test]
fn test_row_amount_debit_sign_forced_negative() {
    // Some banks report debits as positive magnitudes, some as signed.
    let columns = AmountColumns::Split {
        debit: 0,
        credit: 1,
    };
    assert_eq!(row_amount(&row(&["-45.00", ""]), &columns).unwrap(), dec!(-45.00));
    assert_eq!(row_amount(&row(&["45.00", ""]), &columns).unwrap(), dec!(-45.00));
}

#[test]
fn test_row_amount_both_sides_sum() {
    let columns = AmountColumns::Split {
        debit: 0,
        credit: 1,
    };
    let r = row(&["30.00", "100.00"]);
    assert_eq!(row_amount(&r, &columns).unwrap(), dec!(70.00));
}

#[test]
fn test_row_amount_both_blank_is_zero() {
    let columns = AmountColumns::Split {
        debit: 0,
        credit: 1,
    };
    let r = row(&["", ""]);
    assert_eq!(row_amount(&r, &columns).unwrap(), dec!(0));
}

#[test]
fn test_row_amount_unparsable_side_counts_as_zero() {
    let columns = AmountColumns::Split {
        debit: 0,
        credit: 1,
    };
    let r = row(&["n/a", "55.00"]);
    assert_eq!(row_amount(&r, &columns).unwrap(), dec!(55.00));
}

#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_default_brackets_shape() {
    let brackets = default_us_brackets();
    assert_eq!(brackets.len(), 7);
    assert_eq!(brackets[0].min, dec!(0));
    assert_eq!(brackets[0].rate, dec!(0.10));
    assert!(brackets[6].max.is_none());
}

#[test]
fn test_zero_income() {
    let assessment = compute_tax(dec!(0), &default_us_brackets());
    assert_eq!(assessment.total_tax, Decimal::ZERO);
    assert_eq!(assessment.effective_rate, Decimal::ZERO);
    assert!(assessment.bracket_breakdown.is_empty());
}

#[test]
fn test_income_within_first_bracket() {
    let assessment = compute_tax(dec!(5000), &default_us_brackets());
    assert_eq!(assessment.total_tax, dec!(500.00));
    assert_eq!(assessment.bracket_breakdown.len(), 1);
    assert_eq!(assessment.bracket_breakdown[0].income_in_bracket, dec!(5000));
}

#[test]
fn test_income_at_bracket_boundary() {
    // Exactly the top of the first bracket: nothing spills over.
    let assessment = compute_tax(dec!(11000), &default_us_brackets());
    assert_eq!(assessment.total_tax, dec!(1100.00));
    assert_eq!(assessment.bracket_breakdown.len(), 1);
}

#[test]
fn test_stepwise_sum_at_75000() {
    // 11000 @ 10% + 33725 @ 12% + 30275 @ 22%
    let assessment = compute_tax(dec!(75000), &default_us_brackets());
    assert_eq!(assessment.total_tax, dec!(11807.50));
    assert_eq!(assessment.bracket_breakdown.len(), 3);
    assert_eq!(
        assessment.bracket_breakdown[2].income_in_bracket,
        dec!(30275)
    );
    // effective_rate = total_tax / income * 100
    assert_eq!(assessment.effective_rate.round_dp(2), dec!(15.74));
}

#[test]
fn test_top_bracket_is_unbounded() {
    let assessment = compute_tax(dec!(1000000), &default_us_brackets());
    assert_eq!(assessment.bracket_breakdown.len(), 7);
    let top = assessment.bracket_breakdown.last().unwrap();
    assert_eq!(top.income_in_bracket, dec!(1000000) - dec!(578125));
    let sum: Decimal = assessment
        .bracket_breakdown
        .iter()
        .map(|b| b.tax_amount)
        .sum();
    assert_eq!(assessment.total_tax, sum);
}

#[test]
fn test_unsorted_brackets_are_sorted_by_min() {
    let mut brackets = default_us_brackets();
    brackets.reverse();
    let sorted = compute_tax(dec!(75000), &default_us_brackets());
    let shuffled = compute_tax(dec!(75000), &brackets);
    assert_eq!(sorted, shuffled);
}

#[test]
fn test_total_tax_monotonic_in_income() {
    let brackets = default_us_brackets();
    let mut previous = Decimal::ZERO;
    for income in (0..=300_000).step_by(12_500) {
        let assessment = compute_tax(Decimal::from(income), &brackets);
        assert!(
            assessment.total_tax >= previous,
            "tax decreased at income {income}"
        );
        previous = assessment.total_tax;
    }
}

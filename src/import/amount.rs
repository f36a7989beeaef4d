use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::AmountColumns;

/// Parse a raw statement cell into a signed decimal. Strips currency
/// symbols, thousands separators, quotes and whitespace; `(123.45)`
/// means negative; a trailing `CR` marker is a credit (keep positive)
/// and `DR` a debit (negate).
pub fn parse_money(s: &str) -> Result<Decimal> {
    let mut cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '$' | '£' | '€' | ',' | '"') && !c.is_whitespace())
        .collect();

    let mut negate = false;
    if let Some(stripped) = cleaned.strip_suffix("CR") {
        cleaned = stripped.to_string();
    } else if let Some(stripped) = cleaned.strip_suffix("DR") {
        cleaned = stripped.to_string();
        negate = true;
    }
    if let Some(inner) = cleaned
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        cleaned = format!("-{inner}");
    }
    if cleaned.is_empty() {
        anyhow::bail!("empty amount");
    }

    let value = Decimal::from_str(&cleaned)
        .with_context(|| format!("Failed to parse '{}' as an amount", s))?;
    Ok(if negate { -value } else { value })
}

/// Produce the signed amount for one row given the sniffed amount
/// column layout.
pub fn row_amount(row: &[String], columns: &AmountColumns) -> Result<Decimal> {
    match *columns {
        AmountColumns::Single(idx) => {
            let raw = row.get(idx).map(|s| s.trim()).unwrap_or("");
            parse_money(raw)
        }
        AmountColumns::Split { debit, credit } => {
            // A blank or unparsable side counts as zero, so one-sided
            // rows survive.
            let debit_raw = row.get(debit).map(|s| s.trim()).unwrap_or("");
            let credit_raw = row.get(credit).map(|s| s.trim()).unwrap_or("");
            let debit_val = -parse_money(debit_raw).unwrap_or(Decimal::ZERO).abs();
            let credit_val = parse_money(credit_raw).unwrap_or(Decimal::ZERO).abs();

            // When only one side is active, use it directly rather than
            // the sum: the inactive column sometimes reports a noisy
            // placeholder zero.
            if debit_val.is_zero() && !credit_val.is_zero() {
                Ok(credit_val)
            } else if credit_val.is_zero() && !debit_val.is_zero() {
                Ok(debit_val)
            } else {
                Ok(credit_val + debit_val)
            }
        }
    }
}

#[cfg(test)]
#[path = "amount_tests.rs"]
mod tests;

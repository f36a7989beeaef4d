use rust_decimal::Decimal;

use super::amount::parse_money;
use super::{parse_date, ImportError, RawTable};

/// How the signed amount is laid out in the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountColumns {
    Single(usize),
    Split { debit: usize, credit: usize },
}

/// The sniffer's verdict: which columns hold the date, the description
/// and the amount(s), plus an optional source subcategory column whose
/// value is carried through as a classification hint.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub date_column: usize,
    pub description_column: usize,
    pub amount: AmountColumns,
    pub subcategory_column: Option<usize>,
    pub fixed_layout: bool,
}

/// Barclays-style export. Recognized exactly; bypasses the heuristics
/// and keeps the source's own Subcategory column as a hint.
const FIXED_LAYOUT_HEADER: [&str; 6] = [
    "Number",
    "Date",
    "Account",
    "Amount",
    "Subcategory",
    "Memo",
];

const DATE_KEYWORDS: [&str; 6] = ["date", "time", "day", "post", "memo", "transaction date"];
const DESCRIPTION_KEYWORDS: [&str; 9] = [
    "desc",
    "narrative",
    "details",
    "transaction",
    "merchant",
    "payee",
    "name",
    "memo",
    "description",
];
const AMOUNT_KEYWORDS: [&str; 6] = ["amount", "sum", "value", "debit", "credit", "balance"];
const SUBCATEGORY_NAMES: [&str; 5] = ["subcategory", "subcat", "category", "type", "transaction type"];
const DEBIT_NAME_KEYWORDS: [&str; 5] = ["debit", "withdrawal", "expense", "payment", "out"];
const CREDIT_NAME_KEYWORDS: [&str; 5] = ["credit", "deposit", "income", "received", "in"];

/// Values per column sampled by the content pass.
const SAMPLE_ROWS: usize = 5;
/// Larger sample used when judging numeric plausibility.
const NUMERIC_SAMPLE_ROWS: usize = 20;
/// Fraction of sampled values that must parse for a column to count as
/// numeric.
const NUMERIC_PARSE_RATIO: f64 = 0.7;

/// Infer the column roles of a raw table. Three passes, each only
/// filling roles the previous pass left unresolved: header names, then
/// cell contents, then position. Fails only when no usable combination
/// exists even after the positional fallback.
pub fn sniff_schema(table: &RawTable) -> Result<ColumnProfile, ImportError> {
    if let Some(profile) = detect_fixed_layout(&table.headers) {
        return Ok(profile);
    }
    if table.width() == 0 || table.rows.is_empty() {
        return Err(ImportError::Schema("the table has no data".into()));
    }

    // Pass 1: header names. A column may land in more than one bucket
    // ("memo" is both a date and a description keyword); resolution
    // below disambiguates.
    let mut date_cols: Vec<usize> = Vec::new();
    let mut desc_cols: Vec<usize> = Vec::new();
    let mut amount_cols: Vec<usize> = Vec::new();
    for (idx, header) in table.headers.iter().enumerate() {
        let h = header.to_lowercase();
        if DATE_KEYWORDS.iter().any(|k| h.contains(k)) {
            date_cols.push(idx);
        }
        if DESCRIPTION_KEYWORDS.iter().any(|k| h.contains(k)) {
            desc_cols.push(idx);
        }
        if AMOUNT_KEYWORDS.iter().any(|k| h.contains(k)) {
            amount_cols.push(idx);
        }
    }

    // Pass 2: cell contents, for roles still without a candidate.
    if date_cols.is_empty() || desc_cols.is_empty() || amount_cols.is_empty() {
        for idx in 0..table.width() {
            let sample = column_sample(table, idx, SAMPLE_ROWS);
            if sample.is_empty() {
                continue;
            }
            if date_cols.is_empty() && sample.iter().all(|v| parse_date(v).is_ok()) {
                date_cols.push(idx);
            }
            if desc_cols.is_empty() && is_description_like(&sample) {
                desc_cols.push(idx);
            }
            if !amount_cols.contains(&idx)
                && is_amount_like(&column_sample(table, idx, NUMERIC_SAMPLE_ROWS))
            {
                amount_cols.push(idx);
            }
        }
    }

    // Pass 3: positional fallback.
    if date_cols.is_empty() {
        date_cols.push(0);
    }
    if desc_cols.is_empty() {
        if let Some(idx) = widest_column(table) {
            desc_cols.push(idx);
        }
    }
    if amount_cols.is_empty() || amount_cols.len() > 3 {
        amount_cols = positional_amount_candidates(table, &date_cols);
    }

    let date_column = date_cols[0];
    let description_column = desc_cols
        .iter()
        .copied()
        .find(|&c| c != date_column)
        .or_else(|| desc_cols.first().copied())
        .ok_or_else(|| ImportError::Schema("no description column found".into()))?;

    amount_cols.retain(|&c| c != date_column && c != description_column);
    if amount_cols.is_empty() {
        return Err(ImportError::Schema(
            "no amount column found, even by position".into(),
        ));
    }

    let amount = resolve_amount_columns(table, &amount_cols);
    let subcategory_column = table.headers.iter().position(|h| {
        let h = h.trim().to_lowercase();
        SUBCATEGORY_NAMES.iter().any(|n| *n == h)
    });

    Ok(ColumnProfile {
        date_column,
        description_column,
        amount,
        subcategory_column,
        fixed_layout: false,
    })
}

fn detect_fixed_layout(headers: &[String]) -> Option<ColumnProfile> {
    if headers.len() != FIXED_LAYOUT_HEADER.len() {
        return None;
    }
    let matched = headers
        .iter()
        .zip(FIXED_LAYOUT_HEADER)
        .all(|(h, want)| h.trim() == want);
    matched.then_some(ColumnProfile {
        date_column: 1,
        description_column: 5,
        amount: AmountColumns::Single(3),
        subcategory_column: Some(4),
        fixed_layout: true,
    })
}

/// First `n` non-blank values of a column.
fn column_sample<'a>(table: &'a RawTable, idx: usize, n: usize) -> Vec<&'a str> {
    table
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(n)
        .collect()
}

fn is_description_like(sample: &[&str]) -> bool {
    let textual = sample
        .iter()
        .any(|v| parse_money(v).is_err() && parse_date(v).is_err());
    textual && mean_len(sample) > 10.0
}

fn is_amount_like(sample: &[&str]) -> bool {
    if sample.is_empty() {
        return false;
    }
    let parsed: Vec<Decimal> = sample.iter().filter_map(|v| parse_money(v).ok()).collect();
    if (parsed.len() as f64) < sample.len() as f64 * NUMERIC_PARSE_RATIO {
        return false;
    }
    let Some(mean_abs) = mean_abs(&parsed) else {
        return false;
    };
    if mean_abs >= Decimal::from(100_000) {
        return false;
    }
    let has_decimals = sample.iter().any(|v| v.contains('.'));
    let has_currency = sample.iter().any(|v| v.contains(['$', '£', '€']));
    let typical_band = mean_abs >= Decimal::new(1, 2) && mean_abs <= Decimal::from(10_000);
    has_decimals || has_currency || typical_band
}

fn mean_len(sample: &[&str]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let total: usize = sample.iter().map(|s| s.chars().count()).sum();
    total as f64 / sample.len() as f64
}

fn mean_abs(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum: Decimal = values.iter().map(|v| v.abs()).sum();
    Some(sum / Decimal::from(values.len()))
}

/// Column with the greatest mean string length; used as the last-resort
/// description guess.
fn widest_column(table: &RawTable) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for idx in 0..table.width() {
        let lengths: Vec<usize> = table
            .rows
            .iter()
            .filter_map(|row| row.get(idx))
            .map(|s| s.chars().count())
            .collect();
        if lengths.is_empty() {
            continue;
        }
        let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
        if best.map(|(_, m)| mean > m).unwrap_or(true) {
            best = Some((idx, mean));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Last-resort amount candidates: numeric columns outside the date
/// column(s), preferring those whose mean magnitude looks like a
/// transaction amount.
fn positional_amount_candidates(table: &RawTable, date_cols: &[usize]) -> Vec<usize> {
    let mut potential: Vec<usize> = Vec::new();
    for idx in 0..table.width() {
        if date_cols.contains(&idx) {
            continue;
        }
        let sample = column_sample(table, idx, NUMERIC_SAMPLE_ROWS);
        if sample.is_empty() {
            continue;
        }
        let parsed = sample.iter().filter(|v| parse_money(v).is_ok()).count();
        if (parsed as f64) >= sample.len() as f64 * NUMERIC_PARSE_RATIO {
            potential.push(idx);
        }
    }

    let filtered: Vec<usize> = potential
        .iter()
        .copied()
        .filter(|&idx| {
            let sample = column_sample(table, idx, NUMERIC_SAMPLE_ROWS);
            let parsed: Vec<Decimal> =
                sample.iter().filter_map(|v| parse_money(v).ok()).collect();
            match mean_abs(&parsed) {
                Some(mean) => mean >= Decimal::new(1, 2) && mean <= Decimal::from(10_000),
                None => false,
            }
        })
        .collect();

    if filtered.is_empty() {
        potential
    } else {
        filtered
    }
}

struct ColumnStats {
    positive_ratio: f64,
    negative_ratio: f64,
}

fn column_stats(table: &RawTable, idx: usize) -> Option<ColumnStats> {
    let values: Vec<Decimal> = table
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .filter_map(|v| parse_money(v.trim()).ok())
        .collect();
    if values.is_empty() {
        return None;
    }
    let total = values.len() as f64;
    let positive = values.iter().filter(|v| v.is_sign_positive() && !v.is_zero()).count();
    let negative = values.iter().filter(|v| v.is_sign_negative()).count();
    Some(ColumnStats {
        positive_ratio: positive as f64 / total,
        negative_ratio: negative as f64 / total,
    })
}

/// Decide between a single signed column and a debit/credit pair when
/// more than one amount candidate survived.
fn resolve_amount_columns(table: &RawTable, candidates: &[usize]) -> AmountColumns {
    if candidates.len() == 1 {
        return AmountColumns::Single(candidates[0]);
    }

    // Header names first.
    let mut debit: Option<usize> = None;
    let mut credit: Option<usize> = None;
    for &idx in candidates {
        let h = table.headers[idx].to_lowercase();
        if DEBIT_NAME_KEYWORDS.iter().any(|k| h.contains(k)) {
            debit = Some(idx);
        } else if CREDIT_NAME_KEYWORDS.iter().any(|k| h.contains(k)) {
            credit = Some(idx);
        }
    }
    if let (Some(d), Some(c)) = (debit, credit) {
        if d != c {
            return AmountColumns::Split {
                debit: d,
                credit: c,
            };
        }
    }

    // Value statistics: the column skewing positive is the credit side,
    // the one skewing negative the debit side. The same column winning
    // both means it is a single signed column after all.
    let stats: Vec<(usize, ColumnStats)> = candidates
        .iter()
        .filter_map(|&idx| column_stats(table, idx).map(|s| (idx, s)))
        .collect();
    if stats.len() >= 2 {
        let mut top_pos = stats[0].0;
        let mut top_pos_ratio = stats[0].1.positive_ratio;
        let mut top_neg = stats[0].0;
        let mut top_neg_ratio = stats[0].1.negative_ratio;
        for (idx, s) in &stats[1..] {
            if s.positive_ratio > top_pos_ratio {
                top_pos = *idx;
                top_pos_ratio = s.positive_ratio;
            }
            if s.negative_ratio > top_neg_ratio {
                top_neg = *idx;
                top_neg_ratio = s.negative_ratio;
            }
        }
        if top_pos == top_neg {
            return AmountColumns::Single(top_pos);
        }
        return AmountColumns::Split {
            debit: top_neg,
            credit: top_pos,
        };
    }
    if let [(only, _)] = stats.as_slice() {
        // Only one candidate actually holds values.
        return AmountColumns::Single(*only);
    }

    // No data to judge with; take the first two in order.
    AmountColumns::Split {
        debit: candidates[0],
        credit: candidates[1],
    }
}

#[cfg(test)]
#[path = "sniff_tests.rs"]
mod tests;

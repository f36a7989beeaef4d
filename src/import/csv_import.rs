use anyhow::{Context, Result};
use std::path::Path;

use super::amount::parse_money;
use super::{parse_date, RawTable};

/// Read a CSV statement into a raw table, sniffing whether the first
/// row is a header. Header cells typically parse as neither dates nor
/// amounts; when the first row looks like data, generic column names
/// are generated instead.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .context("Failed to open CSV file")?;

    let mut all_rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.context("Failed to read CSV record")?;
        all_rows.push(record.iter().map(|s| s.to_string()).collect());
    }
    if all_rows.is_empty() {
        anyhow::bail!("CSV file is empty");
    }

    let width = all_rows[0].len();
    let looks_like_header = all_rows[0].iter().all(|field| {
        let trimmed = field.trim();
        parse_money(trimmed).is_err() && parse_date(trimmed).is_err()
    });

    let headers = if looks_like_header {
        all_rows.remove(0)
    } else {
        (0..width).map(|i| format!("Column {}", i + 1)).collect()
    };

    Ok(RawTable {
        headers,
        rows: all_rows,
    })
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;

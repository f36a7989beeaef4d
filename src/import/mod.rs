mod amount;
mod clean;
mod csv_import;
mod sniff;

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::categorize::Classifier;
use crate::models::{StatementBatch, Transaction};

pub use clean::DescriptionCleaner;
pub use sniff::{sniff_schema, AmountColumns, ColumnProfile};

/// A raw tabular batch as produced by the CSV reader or a PDF table
/// extractor: ordered column headers plus rows of raw cell values.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// No usable date/description/amount combination, even after
    /// positional fallback. The batch is rejected wholesale.
    #[error("could not identify date, description and amount columns: {0}")]
    Schema(String),
    /// The extraction collaborator produced no usable tables.
    #[error("no tables with data were extracted from the document")]
    Extraction,
}

/// Per-batch row accounting. Rows with an unparsable date or amount are
/// dropped whole, never persisted partially.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportStats {
    pub rows: usize,
    pub dropped_dates: usize,
    pub dropped_amounts: usize,
}

impl ImportStats {
    pub fn dropped(&self) -> usize {
        self.dropped_dates + self.dropped_amounts
    }
}

#[derive(Debug)]
pub struct ImportedBatch {
    pub statement: StatementBatch,
    pub transactions: Vec<Transaction>,
    pub stats: ImportStats,
}

/// Import one CSV statement file.
pub fn import_csv(
    path: &Path,
    cleaner: &DescriptionCleaner,
    classifier: &Classifier,
) -> Result<ImportedBatch> {
    let table = csv_import::read_table(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("statement.csv");
    import_table(&table, filename, cleaner, classifier)
}

/// Import the tables handed back by an external extractor (e.g. a PDF
/// table reader). Multiple tables are concatenated before sniffing; an
/// empty or all-empty extraction rejects the batch.
pub fn import_tables(
    tables: Vec<RawTable>,
    source_name: &str,
    cleaner: &DescriptionCleaner,
    classifier: &Classifier,
) -> Result<ImportedBatch> {
    let combined = concat_tables(tables)?;
    import_table(&combined, source_name, cleaner, classifier)
}

fn concat_tables(tables: Vec<RawTable>) -> Result<RawTable, ImportError> {
    let mut tables: Vec<RawTable> = tables.into_iter().filter(|t| !t.rows.is_empty()).collect();
    if tables.is_empty() {
        return Err(ImportError::Extraction);
    }
    let mut combined = tables.remove(0);
    for table in tables {
        combined.rows.extend(table.rows);
    }
    Ok(combined)
}

/// Run the full pipeline over one raw table: sniff the schema, then per
/// row normalize the amount, clean the description and classify. Fails
/// before touching anything when no schema can be sniffed, so a bad
/// batch never partially lands.
pub fn import_table(
    table: &RawTable,
    source_name: &str,
    cleaner: &DescriptionCleaner,
    classifier: &Classifier,
) -> Result<ImportedBatch> {
    let profile = sniff_schema(table)?;
    let statement = StatementBatch::new(source_name);

    let mut stats = ImportStats::default();
    let mut transactions = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        stats.rows += 1;
        let date_raw = row
            .get(profile.date_column)
            .map(|s| s.trim())
            .unwrap_or("");
        let Ok(date) = parse_date(date_raw) else {
            stats.dropped_dates += 1;
            continue;
        };
        let Ok(mut amount) = amount::row_amount(row, &profile.amount) else {
            stats.dropped_amounts += 1;
            continue;
        };

        let raw_description = row
            .get(profile.description_column)
            .map(|s| s.trim())
            .unwrap_or("")
            .to_string();
        let description = cleaner.clean(&raw_description);
        let source_subcategory = profile
            .subcategory_column
            .and_then(|c| row.get(c))
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from);

        let assigned = classifier.classify(&description, source_subcategory.as_deref(), amount);
        // Some exports carry income rows with a flipped sign; the ledger
        // invariant is that Income amounts are non-negative.
        if assigned.category == "Income" && amount < Decimal::ZERO {
            amount = amount.abs();
        }

        transactions.push(Transaction {
            date,
            description,
            raw_description,
            amount,
            category: assigned.category,
            subcategory: assigned.subcategory,
            source_subcategory,
            statement_id: statement.id.clone(),
        });
    }

    let statement = statement.with_transactions(&transactions);
    Ok(ImportedBatch {
        statement,
        transactions,
        stats,
    })
}

/// Day-first date parsing, matching how UK statement exports write
/// dates. US month-first is tried after the day-first forms.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        anyhow::bail!("empty date");
    }
    for fmt in &[
        "%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d/%m/%y", "%m/%d/%Y", "%d %b %Y", "%d %B %Y",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {trimmed}")
}

#[cfg(test)]
mod tests;

use chrono::NaiveDate;

use super::Transaction;

/// Metadata for one imported statement. Owns its transactions through
/// `statement_id` equality; removing a batch removes them all.
#[derive(Debug, Clone)]
pub struct StatementBatch {
    pub id: String,
    pub source_filename: String,
    pub imported_at: String,
    pub transaction_count: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl StatementBatch {
    /// Stamp a new batch. The id embeds the import time so the same file
    /// can be imported more than once and still be removable on its own.
    pub fn new(source_filename: &str) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: format!("{}_{}", source_filename, now.format("%Y%m%d%H%M%S")),
            source_filename: source_filename.to_string(),
            imported_at: now.to_rfc3339(),
            transaction_count: 0,
            date_range: None,
        }
    }

    pub fn with_transactions(mut self, transactions: &[Transaction]) -> Self {
        self.transaction_count = transactions.len();
        let min = transactions.iter().map(|t| t.date).min();
        let max = transactions.iter().map(|t| t.date).max();
        self.date_range = min.zip(max);
        self
    }

    pub fn describe_range(&self) -> String {
        match self.date_range {
            Some((min, max)) => format!("{min} to {max}"),
            None => "Unknown".into(),
        }
    }
}

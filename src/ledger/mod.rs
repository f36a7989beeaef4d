use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::categorize::Classifier;
use crate::models::{StatementBatch, Transaction};

fn owned_key(txn: &Transaction) -> (NaiveDate, String, Decimal) {
    let (date, description, amount) = txn.dedup_key();
    (date, description.to_string(), amount)
}

/// The in-memory ledger: every imported transaction plus the metadata
/// of the statements they came from. The single piece of mutable state
/// in the pipeline; all writes go through `&mut self`.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    statements: Vec<StatementBatch>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn statements(&self) -> &[StatementBatch] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Append a classified batch, drop duplicate rows and keep the
    /// ledger sorted by date descending. Rows already present win over
    /// incoming duplicates; the dedup key is (date, description,
    /// amount). Returns how many incoming rows survived.
    pub fn merge(
        &mut self,
        statement: StatementBatch,
        incoming: Vec<Transaction>,
    ) -> usize {
        let mut seen: HashSet<(NaiveDate, String, Decimal)> =
            self.transactions.iter().map(owned_key).collect();

        let mut accepted = 0;
        for txn in incoming {
            if seen.insert(owned_key(&txn)) {
                self.transactions.push(txn);
                accepted += 1;
            }
        }
        self.statements.push(statement);

        // Stable, so same-day rows keep their import order.
        self.transactions.sort_by(|a, b| b.date.cmp(&a.date));
        accepted
    }

    /// Remove one statement and every transaction it owns. The only
    /// supported deletion path.
    pub fn remove_statement(&mut self, statement_id: &str) -> usize {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.statement_id != statement_id);
        self.statements.retain(|s| s.id != statement_id);
        before - self.transactions.len()
    }

    /// Manually reassign every transaction sharing a description.
    pub fn recategorize(
        &mut self,
        description: &str,
        category: &str,
        subcategory: &str,
    ) -> usize {
        let mut updated = 0;
        for txn in &mut self.transactions {
            if txn.description == description {
                txn.category = category.to_string();
                txn.subcategory = subcategory.to_string();
                updated += 1;
            }
        }
        updated
    }

    /// Re-run classification over the whole ledger, e.g. after the
    /// taxonomy changed. Only the category fields are touched.
    pub fn reclassify_all(&mut self, classifier: &Classifier) {
        for txn in &mut self.transactions {
            let assigned = classifier.classify(
                &txn.description,
                txn.source_subcategory.as_deref(),
                txn.amount,
            );
            txn.category = assigned.category;
            txn.subcategory = assigned.subcategory;
        }
    }

    /// Inclusive date-window snapshot, newest first.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.transactions.iter().map(|t| t.date).min()?;
        let max = self.transactions.iter().map(|t| t.date).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests;

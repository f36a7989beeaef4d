use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::Transaction;

/// Summary statistics over a slice of the ledger. Income rows are
/// counted at absolute value; everything else (transfers and platform
/// deposits included) counts as outflow with amounts forced negative.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_savings: Decimal,
    pub savings_rate: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    pub expense_by_category: Vec<(String, Decimal)>,
    pub income_by_subcategory: Vec<(String, Decimal)>,
}

impl Summary {
    pub fn top_expense_category(&self) -> Option<&str> {
        self.expense_by_category.first().map(|(name, _)| name.as_str())
    }

    pub fn top_income_subcategory(&self) -> Option<&str> {
        self.income_by_subcategory
            .first()
            .map(|(name, _)| name.as_str())
    }
}

pub fn summarize<'a, I>(transactions: I) -> Summary
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut total_income = Decimal::ZERO;
    let mut outflow = Decimal::ZERO;
    let mut income_count = 0usize;
    let mut expense_count = 0usize;
    let mut by_category: HashMap<String, Decimal> = HashMap::new();
    let mut by_subcategory: HashMap<String, Decimal> = HashMap::new();

    for txn in transactions {
        if txn.is_income() {
            total_income += txn.abs_amount();
            income_count += 1;
            *by_subcategory.entry(txn.subcategory.clone()).or_default() += txn.abs_amount();
        } else {
            outflow += -txn.abs_amount();
            expense_count += 1;
            *by_category.entry(txn.category.clone()).or_default() += txn.abs_amount();
        }
    }

    let total_expenses = outflow.abs();
    let net_savings = total_income - total_expenses;
    let savings_rate = if total_income > Decimal::ZERO {
        net_savings / total_income * Decimal::from(100)
    } else {
        Decimal::ZERO
    };

    Summary {
        total_income,
        total_expenses,
        net_savings,
        savings_rate,
        income_count,
        expense_count,
        expense_by_category: sorted_desc(by_category),
        income_by_subcategory: sorted_desc(by_subcategory),
    }
}

/// Largest first; name order breaks amount ties so output is stable.
fn sorted_desc(map: HashMap<String, Decimal>) -> Vec<(String, Decimal)> {
    let mut entries: Vec<(String, Decimal)> = map.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;

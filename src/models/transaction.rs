use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub raw_description: String,
    pub amount: Decimal,
    pub category: String,
    pub subcategory: String,
    pub source_subcategory: Option<String>,
    pub statement_id: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.category == "Income"
    }

    pub fn is_transfer(&self) -> bool {
        self.category == "Transfer"
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// Key used to detect duplicate rows across imports.
    pub fn dedup_key(&self) -> (NaiveDate, &str, Decimal) {
        (self.date, self.description.as_str(), self.amount)
    }
}

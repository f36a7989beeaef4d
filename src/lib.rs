//! LedgerSift turns bank-statement exports of unknown tabular layout
//! into a normalized, categorized transaction ledger: sniff the column
//! schema, normalize amounts and descriptions, classify each row with
//! an ordered rule chain, then merge into a deduplicated ledger.

pub mod categorize;
pub mod import;
pub mod ledger;
pub mod models;
pub mod summary;
pub mod tax;

pub use categorize::{Classification, Classifier};
pub use import::{DescriptionCleaner, ImportError, ImportStats, ImportedBatch, RawTable};
pub use ledger::Ledger;
pub use models::{CategoryTaxonomy, Sign, StatementBatch, Transaction, VendorRule};
pub use summary::{summarize, Summary};
pub use tax::{compute_tax, default_us_brackets, TaxAssessment, TaxBracket};

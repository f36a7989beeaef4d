mod statement;
mod taxonomy;
mod transaction;
mod vendor_rule;

pub use statement::StatementBatch;
pub use taxonomy::CategoryTaxonomy;
pub use transaction::Transaction;
pub use vendor_rule::{Sign, VendorRule};

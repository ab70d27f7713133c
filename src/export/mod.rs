//! Export module for fintrack
//!
//! Two write-only outputs over the stored ledger:
//! - CSV: spreadsheet-compatible transaction rows
//! - Statement: paginated human-readable text dump

pub mod csv;
pub mod statement;

pub use csv::export_transactions_csv;
pub use statement::{export_statement, LINES_PER_PAGE};

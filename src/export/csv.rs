//! CSV export
//!
//! Writes the transaction list as spreadsheet-compatible CSV with the
//! columns `Date,Type,Category,Amount,Currency,Account,Notes`. Currency and
//! account name come from the source account; rows whose account is gone
//! fall back to "N/A" and "Unknown" instead of being dropped.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::ReportPeriod;
use crate::storage::Storage;

/// Export transactions to CSV, newest first
///
/// When `period` is given only transactions dated within it are written.
/// Returns the number of data rows written.
pub fn export_transactions_csv<W: Write>(
    storage: &Storage,
    writer: W,
    period: Option<&ReportPeriod>,
) -> FintrackResult<usize> {
    let accounts = storage.accounts.get_all()?;
    let by_id: HashMap<_, _> = accounts.iter().map(|a| (a.id, a)).collect();

    let transactions = match period {
        Some(p) => storage
            .transactions
            .get_by_date_range(p.start_date(), p.end_date())?,
        None => storage.transactions.get_all()?,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Date", "Type", "Category", "Amount", "Currency", "Account", "Notes",
        ])
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for txn in &transactions {
        let account = by_id.get(&txn.account_id);
        let currency = account.map(|a| a.currency.as_str()).unwrap_or("N/A");
        let account_name = account.map(|a| a.name.as_str()).unwrap_or("Unknown");

        csv_writer
            .write_record([
                txn.date.format("%Y-%m-%d").to_string().as_str(),
                txn.kind.to_string().as_str(),
                txn.category.as_str(),
                txn.amount.to_string().as_str(),
                currency,
                account_name,
                txn.notes.as_str(),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(transactions.len())
}

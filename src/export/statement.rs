//! Statement export
//!
//! A paginated, human-readable dump of the transaction list: each page
//! carries a header with the owner's name and generation date, a fixed
//! number of transaction lines, and a `Page N of M` footer. One-way and
//! lossy; use the CSV export for data that needs to round-trip.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::ReportPeriod;
use crate::storage::Storage;

/// Transaction lines on each statement page
pub const LINES_PER_PAGE: usize = 40;

const PAGE_WIDTH: usize = 92;

/// Write the paginated statement
///
/// When `period` is given only transactions dated within it appear, and the
/// header names the period.
pub fn export_statement<W: Write>(
    storage: &Storage,
    mut writer: W,
    period: Option<&ReportPeriod>,
) -> FintrackResult<()> {
    let accounts = storage.accounts.get_all()?;
    let by_id: HashMap<_, _> = accounts.iter().map(|a| (a.id, a)).collect();
    let owner = storage.profile.get()?.map(|p| p.name);

    let transactions = match period {
        Some(p) => storage
            .transactions
            .get_by_date_range(p.start_date(), p.end_date())?,
        None => storage.transactions.get_all()?,
    };

    let pages: Vec<&[crate::models::Transaction]> = if transactions.is_empty() {
        vec![&[]]
    } else {
        transactions.chunks(LINES_PER_PAGE).collect()
    };
    let page_count = pages.len();
    let generated = chrono::Local::now().format("%Y-%m-%d").to_string();

    let mut write = |s: &str| -> FintrackResult<()> {
        writeln!(writer, "{}", s).map_err(|e| FintrackError::Export(e.to_string()))
    };

    for (page_index, chunk) in pages.into_iter().enumerate() {
        write(&"=".repeat(PAGE_WIDTH))?;
        write("TRANSACTION STATEMENT")?;
        if let Some(name) = &owner {
            write(&format!("Prepared for: {}", name))?;
        }
        if let Some(p) = period {
            write(&format!("Period: {}", p))?;
        }
        write(&format!("Generated: {}", generated))?;
        write(&"=".repeat(PAGE_WIDTH))?;
        write(&format!(
            "{:<12} {:<10} {:<20} {:>16} {:<20}",
            "Date", "Type", "Category", "Amount", "Account"
        ))?;
        write(&"-".repeat(PAGE_WIDTH))?;

        for txn in chunk {
            let account = by_id.get(&txn.account_id);
            let account_name = account.map(|a| a.name.as_str()).unwrap_or("Unknown");
            let amount = match account {
                Some(a) => txn.amount.format_with_currency(&a.currency),
                None => txn.amount.to_string(),
            };

            write(&format!(
                "{:<12} {:<10} {:<20} {:>16} {:<20}",
                txn.date.format("%Y-%m-%d"),
                txn.kind.to_string(),
                truncate(&txn.category, 20),
                amount,
                truncate(account_name, 20)
            ))?;
            if !txn.notes.is_empty() {
                write(&format!("             note: {}", truncate(&txn.notes, 70)))?;
            }
        }

        if chunk.is_empty() {
            write("(no transactions)")?;
        }

        write(&"-".repeat(PAGE_WIDTH))?;
        write(&format!("Page {} of {}", page_index + 1, page_count))?;
        write("")?;
    }

    writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

/// Shorten a string to `max` characters with a trailing ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

//! Transaction display formatting
//!
//! Formats transactions for terminal output: register rows for listings
//! and a detail view for `txn show`. Account names are resolved from the
//! accounts passed in; a transaction whose account has since been deleted
//! shows a placeholder instead of failing.

use std::collections::HashMap;

use crate::models::{Account, AccountId, Transaction, TransactionKind};

/// Placeholder shown when a referenced account no longer exists
const MISSING_ACCOUNT: &str = "(deleted)";

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], accounts: &[Account]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let names: HashMap<AccountId, &str> =
        accounts.iter().map(|a| (a.id, a.name.as_str())).collect();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<8}  {:<16}  {:>14}  {}\n",
        "ID", "Date", "Type", "Category", "Amount", "Account"
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<8}  {:-<16}  {:->14}  {:-<20}\n",
        "", "", "", "", "", ""
    ));

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, &names));
        output.push('\n');
    }

    output
}

/// Format a single register row
pub fn format_transaction_row(txn: &Transaction, names: &HashMap<AccountId, &str>) -> String {
    let source = names
        .get(&txn.account_id)
        .copied()
        .unwrap_or(MISSING_ACCOUNT);
    let account_display = match txn.to_account_id {
        Some(to) => format!(
            "{} → {}",
            source,
            names.get(&to).copied().unwrap_or(MISSING_ACCOUNT)
        ),
        None => source.to_string(),
    };

    format!(
        "{:<12}  {}  {:<8}  {:<16}  {:>14}  {}",
        txn.id.to_string(),
        txn.date.format("%Y-%m-%d"),
        txn.kind.to_string(),
        truncate(&txn.category, 16),
        signed_amount(txn),
        account_display
    )
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    source: Option<&Account>,
    destination: Option<&Account>,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Date:      {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("  Type:      {}\n", txn.kind));
    output.push_str(&format!("  Category:  {}\n", txn.category));

    match source {
        Some(account) => {
            output.push_str(&format!(
                "  Amount:    {}\n",
                txn.amount.format_with_currency(&account.currency)
            ));
            output.push_str(&format!("  Account:   {} ({})\n", account.name, account.id));
        }
        None => {
            output.push_str(&format!("  Amount:    {}\n", txn.amount.grouped()));
            output.push_str(&format!(
                "  Account:   {} ({})\n",
                MISSING_ACCOUNT, txn.account_id
            ));
        }
    }

    if let Some(to_id) = txn.to_account_id {
        match destination {
            Some(account) => {
                output.push_str(&format!("  To:        {} ({})\n", account.name, account.id))
            }
            None => output.push_str(&format!("  To:        {} ({})\n", MISSING_ACCOUNT, to_id)),
        }
    }

    if !txn.notes.is_empty() {
        output.push_str(&format!("  Notes:     {}\n", txn.notes));
    }

    output.push_str(&format!(
        "  Recorded:  {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Amount with an explicit direction sign; transfers stay unsigned
fn signed_amount(txn: &Transaction) -> String {
    match txn.kind {
        TransactionKind::Income => format!("+{}", txn.amount.grouped()),
        TransactionKind::Expense => format!("-{}", txn.amount.grouped()),
        TransactionKind::Transfer => txn.amount.grouped(),
    }
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

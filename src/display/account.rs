//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Account;
use crate::services::AccountSummary;

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found. Add one with `fintrack account add`.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let kind_width = accounts
        .iter()
        .map(|a| a.kind.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<kind_width$}  {:<8}  {:>14}\n",
        "ID",
        "Name",
        "Type",
        "Currency",
        "Balance",
        name_width = name_width,
        kind_width = kind_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<kind_width$}  {:-<8}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        kind_width = kind_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<kind_width$}  {:<8}  {:>14}\n",
            account.id.to_string(),
            account.name,
            account.kind,
            account.currency,
            account.balance.grouped(),
            name_width = name_width,
            kind_width = kind_width,
        ));
    }

    output
}

/// Format a single account's details
pub fn format_account_details(summary: &AccountSummary) -> String {
    let account = &summary.account;

    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:               {}\n", account.id));
    if !account.kind.is_empty() {
        output.push_str(&format!("  Type:             {}\n", account.kind));
    }
    output.push_str(&format!("  Currency:         {}\n", account.currency));
    output.push('\n');
    output.push_str(&format!(
        "  Opening Balance:  {}\n",
        account.initial_balance.grouped()
    ));
    output.push_str(&format!(
        "  Current Balance:  {}\n",
        account.balance.grouped()
    ));
    output.push_str(&format!(
        "  This Period:      +{} / -{}\n",
        summary.period_income.grouped(),
        summary.period_expense.grouped()
    ));

    if !summary.drift().is_zero() {
        output.push('\n');
        output.push_str(&format!(
            "  WARNING: stored balance is off by {} from the transaction history\n",
            summary.drift().grouped()
        ));
        output.push_str("  Run `fintrack verify` for details.\n");
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

//! Account activity report
//!
//! Per-account income and expense totals for a reporting period, one row
//! per account. Transfers are excluded; they shuffle balances without being
//! activity in either direction.

use crate::error::FintrackResult;
use crate::models::{Account, Money, ReportPeriod, TransactionKind};
use crate::storage::Storage;

/// One account's activity within the period
#[derive(Debug, Clone)]
pub struct ActivityRow {
    pub account: Account,
    pub income: Money,
    pub expense: Money,
    pub transaction_count: usize,
}

impl ActivityRow {
    /// Income minus expenses for this account
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Activity across all accounts for one period
#[derive(Debug, Clone)]
pub struct AccountActivity {
    pub period: ReportPeriod,
    /// One row per account, in account name order
    pub rows: Vec<ActivityRow>,
}

impl AccountActivity {
    /// Generate the activity report for the period
    pub fn generate(storage: &Storage, period: &ReportPeriod) -> FintrackResult<Self> {
        let accounts = storage.accounts.get_all()?;
        let mut rows = Vec::with_capacity(accounts.len());

        for account in accounts {
            let transactions = storage.transactions.get_by_account(account.id)?;

            let mut income = Money::zero();
            let mut expense = Money::zero();
            let mut transaction_count = 0;

            for txn in &transactions {
                if !period.contains(txn.date) || txn.is_transfer() {
                    continue;
                }
                match txn.kind {
                    TransactionKind::Income => income += txn.amount,
                    TransactionKind::Expense => expense += txn.amount,
                    TransactionKind::Transfer => continue,
                }
                transaction_count += 1;
            }

            rows.push(ActivityRow {
                account,
                income,
                expense,
                transaction_count,
            });
        }

        Ok(Self {
            period: period.clone(),
            rows,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Account activity for {}\n", self.period));
        output.push_str(&"=".repeat(76));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14} {:>14} {:>14} {:>6}\n",
            "Account", "Income", "Expenses", "Net", "Txns"
        ));
        output.push_str(&"-".repeat(76));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<24} {:>14} {:>14} {:>14} {:>6}\n",
                row.account.name,
                row.income.grouped(),
                row.expense.grouped(),
                row.net().grouped(),
                row.transaction_count
            ));
        }

        output
    }
}

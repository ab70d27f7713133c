//! Period summary report
//!
//! Income, expense, and cashflow totals for a reporting period. Transfers
//! move money between accounts without earning or spending it, so they are
//! left out of every total; balance adjustments count like any other income
//! or expense.

use crate::error::FintrackResult;
use crate::models::{Money, ReportPeriod, TransactionKind};
use crate::storage::Storage;

/// Income and expense totals for one period
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    /// The period covered
    pub period: ReportPeriod,
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts
    pub total_expense: Money,
    /// Transactions counted (transfers excluded)
    pub transaction_count: usize,
    /// Transfers seen but not counted
    pub transfer_count: usize,
}

impl PeriodSummary {
    /// Generate a summary for the period
    pub fn generate(storage: &Storage, period: &ReportPeriod) -> FintrackResult<Self> {
        let transactions = storage
            .transactions
            .get_by_date_range(period.start_date(), period.end_date())?;

        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut transaction_count = 0;
        let mut transfer_count = 0;

        for txn in &transactions {
            match txn.kind {
                TransactionKind::Income => {
                    total_income += txn.amount;
                    transaction_count += 1;
                }
                TransactionKind::Expense => {
                    total_expense += txn.amount;
                    transaction_count += 1;
                }
                TransactionKind::Transfer => transfer_count += 1,
            }
        }

        Ok(Self {
            period: period.clone(),
            total_income,
            total_expense,
            transaction_count,
            transfer_count,
        })
    }

    /// Cashflow for the period: income minus expenses
    pub fn cashflow(&self) -> Money {
        self.total_income - self.total_expense
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Summary for {}\n", self.period));
        output.push_str(&"=".repeat(44));
        output.push('\n');
        output.push_str(&format!("{:<16} {:>16}\n", "Income:", self.total_income.grouped()));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Expenses:",
            self.total_expense.grouped()
        ));
        output.push_str(&"-".repeat(44));
        output.push('\n');
        output.push_str(&format!("{:<16} {:>16}\n", "Cashflow:", self.cashflow().grouped()));
        output.push_str(&format!(
            "{:<16} {:>16}\n",
            "Transactions:", self.transaction_count
        ));
        if self.transfer_count > 0 {
            output.push_str(&format!(
                "{:<16} {:>16}\n",
                "Transfers:", self.transfer_count
            ));
        }

        output
    }
}

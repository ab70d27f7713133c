//! Report CLI commands
//!
//! Runs the ledger aggregations and prints their terminal renderings.

use clap::Subcommand;

use crate::error::{FintrackError, FintrackResult};
use crate::models::TransactionKind;
use crate::reports::{AccountActivity, CategoryBreakdown, PeriodSummary};
use crate::storage::Storage;

use super::parse_period_or_current;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expense, and cashflow totals for a period
    Summary {
        /// Period (YYYY-MM, YYYY, or START..END); defaults to this month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Totals per category for a period
    Categories {
        /// Period (YYYY-MM, YYYY, or START..END); defaults to this month
        #[arg(short, long)]
        period: Option<String>,
        /// Which side to break down (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },
    /// Per-account income and expense activity for a period
    Activity {
        /// Period (YYYY-MM, YYYY, or START..END); defaults to this month
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> FintrackResult<()> {
    match cmd {
        ReportCommands::Summary { period } => {
            let period = parse_period_or_current(period.as_deref())?;
            let report = PeriodSummary::generate(storage, &period)?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Categories { period, kind } => {
            let period = parse_period_or_current(period.as_deref())?;
            let kind = match TransactionKind::parse(&kind) {
                Some(TransactionKind::Income) => TransactionKind::Income,
                Some(TransactionKind::Expense) => TransactionKind::Expense,
                _ => {
                    return Err(FintrackError::Validation(format!(
                        "Invalid breakdown type: '{}'. Valid types: income, expense",
                        kind
                    )))
                }
            };
            let report = CategoryBreakdown::generate(storage, &period, kind)?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Activity { period } => {
            let period = parse_period_or_current(period.as_deref())?;
            let report = AccountActivity::generate(storage, &period)?;
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}

//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, and deleting
//! transactions.

use clap::Subcommand;

use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, TransactionKind};
use crate::services::{AccountService, LedgerService, RecordTransactionInput, TransactionFilter};
use crate::storage::Storage;

use super::{parse_date_or_today, parse_period_or_current};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Account name or ID
        account: String,
        /// Amount (always positive; the type gives the direction)
        amount: String,
        /// Transaction type (income, expense, transfer)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Category label (required for income and expenses)
        #[arg(short, long)]
        category: Option<String>,
        /// Destination account for transfers
        #[arg(long)]
        to: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by account name or ID
        #[arg(short, long)]
        account: Option<String>,
        /// Filter by type (income, expense, transfer)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by period (YYYY-MM, YYYY, or START..END)
        #[arg(short, long)]
        period: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or ID fragment
        id: String,
    },
    /// Delete a transaction, reversing its balance effects
    Delete {
        /// Transaction ID or ID fragment
        id: String,
        /// Skip the confirmation preview
        #[arg(long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> FintrackResult<()> {
    let accounts = AccountService::new(storage);
    let ledger = LedgerService::new(storage);

    match cmd {
        TransactionCommands::Add {
            account,
            amount,
            kind,
            category,
            to,
            date,
            notes,
        } => {
            let source = accounts.resolve(&account)?;

            let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                FintrackError::Validation(format!(
                    "Invalid transaction type: '{}'. Valid types: income, expense, transfer",
                    kind
                ))
            })?;

            let amount = Money::parse(&amount).map_err(|e| {
                FintrackError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '45.00' or '45'. Error: {}",
                    amount, e
                ))
            })?;

            let category = match (kind, category) {
                (TransactionKind::Transfer, _) => String::new(),
                (_, Some(category)) => category,
                (_, None) => {
                    return Err(FintrackError::Validation(
                        "Income and expense transactions need a category. Use --category".into(),
                    ))
                }
            };

            let to_account_id = match to {
                Some(to) => Some(accounts.resolve(&to)?.id),
                None => None,
            };

            let txn = ledger.record(RecordTransactionInput {
                account_id: source.id,
                kind,
                amount,
                category,
                date: parse_date_or_today(date.as_deref())?,
                notes,
                to_account_id,
            })?;

            println!("Recorded {}: {}", txn.kind, txn.id);
            println!("  Date:     {}", txn.date.format("%Y-%m-%d"));
            println!(
                "  Amount:   {}",
                txn.amount.format_with_currency(&source.currency)
            );
            println!("  Category: {}", txn.category);
            let updated = accounts.resolve(&source.name)?;
            println!(
                "  Balance:  {} now {}",
                updated.name,
                updated.balance.format_with_currency(&updated.currency)
            );
        }

        TransactionCommands::List {
            account,
            kind,
            category,
            period,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);

            if let Some(account) = account {
                filter = filter.account(accounts.resolve(&account)?.id);
            }
            if let Some(kind) = kind {
                let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                    FintrackError::Validation(format!(
                        "Invalid transaction type: '{}'. Valid types: income, expense, transfer",
                        kind
                    ))
                })?;
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(period) = period {
                let period = parse_period_or_current(Some(&period))?;
                filter = filter.period(&period);
            }

            let transactions = ledger.list(filter)?;
            let all_accounts = accounts.list()?;
            print!(
                "{}",
                format_transaction_register(&transactions, &all_accounts)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = ledger.resolve(&id)?;
            let source = accounts.get(txn.account_id)?;
            let destination = match txn.to_account_id {
                Some(to) => accounts.get(to)?,
                None => None,
            };
            print!(
                "{}",
                format_transaction_details(&txn, source.as_ref(), destination.as_ref())
            );
        }

        TransactionCommands::Delete { id, force } => {
            let txn = ledger.resolve(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:     {}", txn.date.format("%Y-%m-%d"));
                println!("  Type:     {}", txn.kind);
                println!("  Category: {}", txn.category);
                println!("  Amount:   {}", txn.amount.grouped());
                println!();
                println!("Deleting reverses its effect on account balances.");
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = ledger.delete(txn.id)?;
            println!(
                "Deleted transaction: {} ({} {} {})",
                deleted.id,
                deleted.date.format("%Y-%m-%d"),
                deleted.kind,
                deleted.amount.grouped()
            );
        }
    }

    Ok(())
}

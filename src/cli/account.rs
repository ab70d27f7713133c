//! Account CLI commands
//!
//! Implements CLI commands for account management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, ReportPeriod};
use crate::services::{AccountService, CreateAccountInput, LedgerService};
use crate::storage::Storage;

use super::parse_date_or_today;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Account name
        name: String,
        /// Account type label (checking, savings, cash, ...)
        #[arg(short = 't', long = "type", default_value = "checking")]
        kind: String,
        /// Currency code; defaults to the configured currency
        #[arg(short, long)]
        currency: Option<String>,
        /// Opening balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Rename an account
    Rename {
        /// Account name or ID
        account: String,
        /// New name
        new_name: String,
    },
    /// Change an account's type label
    SetKind {
        /// Account name or ID
        account: String,
        /// New type label
        kind: String,
    },
    /// Set an account's balance, recording the difference as a transaction
    SetBalance {
        /// Account name or ID
        account: String,
        /// Target balance (e.g., "1234.56")
        balance: String,
        /// Adjustment date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an account, keeping its transactions
    Delete {
        /// Account name or ID
        account: String,
        /// Skip the confirmation preview
        #[arg(long)]
        force: bool,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> FintrackResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add {
            name,
            kind,
            currency,
            balance,
        } => {
            let opening_balance = Money::parse(&balance).map_err(|e| {
                FintrackError::Validation(format!(
                    "Invalid balance format: '{}'. Use format like '1000.00' or '1000'. Error: {}",
                    balance, e
                ))
            })?;
            let currency = currency.unwrap_or_else(|| settings.default_currency.clone());

            let account = service.create(CreateAccountInput {
                name,
                kind,
                currency,
                opening_balance,
            })?;

            println!("Created account: {}", account.name);
            println!("  Type:            {}", account.kind);
            println!("  Currency:        {}", account.currency);
            println!("  Opening Balance: {}", account.balance.grouped());
            println!("  ID:              {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            print!("{}", format_account_list(&accounts));
        }

        AccountCommands::Show { account } => {
            let found = service.resolve(&account)?;
            let summary = service.summarize(&found, Some(&ReportPeriod::current_month()))?;
            print!("{}", format_account_details(&summary));
        }

        AccountCommands::Rename { account, new_name } => {
            let found = service.resolve(&account)?;
            let old_name = found.name.clone();
            let renamed = service.rename(found.id, &new_name)?;
            println!("Renamed account: {} -> {}", old_name, renamed.name);
        }

        AccountCommands::SetKind { account, kind } => {
            let found = service.resolve(&account)?;
            let updated = service.set_kind(found.id, &kind)?;
            println!("Account '{}' is now type '{}'", updated.name, updated.kind);
        }

        AccountCommands::SetBalance {
            account,
            balance,
            date,
        } => {
            let found = service.resolve(&account)?;
            let new_balance = Money::parse(&balance).map_err(|e| {
                FintrackError::Validation(format!(
                    "Invalid balance format: '{}'. Use format like '1234.56'. Error: {}",
                    balance, e
                ))
            })?;
            let date = parse_date_or_today(date.as_deref())?;

            let ledger = LedgerService::new(storage);
            match ledger.set_balance(found.id, new_balance, date)? {
                Some(txn) => {
                    println!(
                        "Set balance of '{}' to {}",
                        found.name,
                        new_balance.format_with_currency(&found.currency)
                    );
                    println!(
                        "  Recorded adjustment: {} {} ({})",
                        txn.kind,
                        txn.amount.grouped(),
                        txn.id
                    );
                }
                None => println!(
                    "Balance of '{}' already matches; nothing recorded",
                    found.name
                ),
            }
        }

        AccountCommands::Delete { account, force } => {
            let found = service.resolve(&account)?;

            if !force {
                println!("About to delete account:");
                println!("  Name:    {}", found.name);
                println!(
                    "  Balance: {}",
                    found.balance.format_with_currency(&found.currency)
                );
                println!();
                println!("Its transactions are kept and will show up in `fintrack verify`.");
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(found.id)?;
            println!("Deleted account: {} ({})", deleted.name, deleted.id);
        }
    }

    Ok(())
}

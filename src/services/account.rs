//! Account service
//!
//! Business logic for account management: creation, lookup by name or ID
//! fragment, renaming, deletion, and computed balance summaries.

use crate::audit::EntityType;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Account, AccountId, Money, ReportPeriod, TransactionKind};
use crate::storage::{ChangeEvent, Storage};

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new account
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    pub name: String,
    /// Free-form label such as "checking" or "cash"
    pub kind: String,
    /// ISO-style currency code; stored uppercase
    pub currency: String,
    pub opening_balance: Money,
}

/// An account with figures computed from its transactions
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account: Account,
    /// Income posted to this account within the period
    pub period_income: Money,
    /// Expenses posted from this account within the period
    pub period_expense: Money,
    /// Balance recomputed from the opening balance and every posting
    pub computed_balance: Money,
}

impl AccountSummary {
    /// Difference between the stored balance and the recomputed one
    pub fn drift(&self) -> Money {
        self.account.balance - self.computed_balance
    }
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account
    pub fn create(&self, input: CreateAccountInput) -> FintrackResult<Account> {
        let name = input.name.trim();

        if self.storage.accounts.name_exists(name, None)? {
            return Err(FintrackError::duplicate_account(name));
        }

        let account = Account::new(name, input.kind, input.currency, input.opening_balance);
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;
        self.storage.notify(ChangeEvent::Accounts);

        log::debug!("Created account '{}' ({})", account.name, account.id);

        Ok(account)
    }

    /// Get an account by ID
    pub fn get(&self, id: AccountId) -> FintrackResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Get an account by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> FintrackResult<Option<Account>> {
        self.storage.accounts.get_by_name(name)
    }

    /// Find an account by name, full ID, or ID fragment
    ///
    /// Names win over IDs. A fragment must match exactly one account;
    /// matching several is an error rather than a silent pick.
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Account>> {
        if let Some(account) = self.storage.accounts.get_by_name(identifier)? {
            return Ok(Some(account));
        }

        if let Ok(id) = identifier.parse::<AccountId>() {
            if let Some(account) = self.storage.accounts.get(id)? {
                return Ok(Some(account));
            }
        }

        let matches: Vec<Account> = self
            .storage
            .accounts
            .get_all()?
            .into_iter()
            .filter(|a| a.id.matches(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            n => Err(FintrackError::Validation(format!(
                "'{}' matches {} accounts; use more characters of the ID",
                identifier, n
            ))),
        }
    }

    /// Like [`find`](Self::find), but an unknown identifier is an error
    pub fn resolve(&self, identifier: &str) -> FintrackResult<Account> {
        self.find(identifier)?
            .ok_or_else(|| FintrackError::account_not_found(identifier))
    }

    /// Get all accounts, sorted by name
    pub fn list(&self) -> FintrackResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// Compute period activity and the recomputed balance for one account
    pub fn summarize(
        &self,
        account: &Account,
        period: Option<&ReportPeriod>,
    ) -> FintrackResult<AccountSummary> {
        let transactions = self.storage.transactions.get_by_account(account.id)?;

        let mut period_income = Money::zero();
        let mut period_expense = Money::zero();
        let mut computed_balance = account.initial_balance;

        for txn in &transactions {
            for (affected, delta) in txn.balance_effects() {
                if affected == account.id {
                    computed_balance += delta;
                }
            }

            let in_period = period.map(|p| p.contains(txn.date)).unwrap_or(true);
            if !in_period || txn.is_transfer() {
                continue;
            }
            match txn.kind {
                TransactionKind::Income => period_income += txn.amount,
                TransactionKind::Expense => period_expense += txn.amount,
                TransactionKind::Transfer => {}
            }
        }

        Ok(AccountSummary {
            account: account.clone(),
            period_income,
            period_expense,
            computed_balance,
        })
    }

    /// Rename an account
    pub fn rename(&self, id: AccountId, new_name: &str) -> FintrackResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| FintrackError::account_not_found(id.to_string()))?;

        let new_name = new_name.trim();
        if self.storage.accounts.name_exists(new_name, Some(id))? {
            return Err(FintrackError::duplicate_account(new_name));
        }

        let before = account.clone();
        account.rename(new_name);
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
            Some(format!("name: {} -> {}", before.name, account.name)),
        )?;
        self.storage.notify(ChangeEvent::Accounts);

        Ok(account)
    }

    /// Change an account's kind label
    pub fn set_kind(&self, id: AccountId, kind: &str) -> FintrackResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| FintrackError::account_not_found(id.to_string()))?;

        let before = account.clone();
        account.set_kind(kind);
        account
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
            Some(format!("type: {} -> {}", before.kind, account.kind)),
        )?;
        self.storage.notify(ChangeEvent::Accounts);

        Ok(account)
    }

    /// Delete an account
    ///
    /// Transactions that reference the account are kept; they become
    /// dangling references, reported by the `verify` command. Deleting the
    /// account does not touch other accounts' balances.
    pub fn delete(&self, id: AccountId) -> FintrackResult<Account> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| FintrackError::account_not_found(id.to_string()))?;

        let referencing = self.storage.transactions.get_by_account(id)?.len();
        if referencing > 0 {
            log::warn!(
                "Deleting account '{}' which {} transaction(s) still reference",
                account.name,
                referencing
            );
        }

        self.storage.accounts.delete(id)?;
        self.storage.accounts.save()?;

        self.storage.log_delete(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;
        self.storage.notify(ChangeEvent::Accounts);

        Ok(account)
    }
}

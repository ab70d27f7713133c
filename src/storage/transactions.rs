//! Transaction repository
//!
//! Transactions live in one map keyed by ID, with a side index from account
//! to the transactions referencing it. Transfers are indexed under both the
//! source and the destination account, so "everything touching this
//! account" is a single lookup.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::error::FintrackError;
use crate::models::{AccountId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of transactions.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TransactionData {
    pub transactions: Vec<Transaction>,
}

/// Map and account index, always mutated together under one lock
#[derive(Default)]
struct Store {
    by_id: HashMap<TransactionId, Transaction>,
    by_account: HashMap<AccountId, Vec<TransactionId>>,
}

impl Store {
    fn link(&mut self, txn: &Transaction) {
        for account_id in referenced_accounts(txn) {
            self.by_account.entry(account_id).or_default().push(txn.id);
        }
    }

    fn unlink(&mut self, txn: &Transaction) {
        for account_id in referenced_accounts(txn) {
            if let Some(ids) = self.by_account.get_mut(&account_id) {
                ids.retain(|&id| id != txn.id);
            }
        }
    }
}

/// Accounts a transaction references: source, plus destination for transfers
fn referenced_accounts(txn: &Transaction) -> impl Iterator<Item = AccountId> + '_ {
    std::iter::once(txn.account_id).chain(txn.to_account_id)
}

/// Newest first: by date, then by creation time
fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|t| std::cmp::Reverse((t.date, t.created_at)));
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    store: RwLock<Store>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            store: RwLock::new(Store::default()),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Store>, FintrackError> {
        self.store
            .read()
            .map_err(|_| FintrackError::Storage("transaction store lock poisoned".into()))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Store>, FintrackError> {
        self.store
            .write()
            .map_err(|_| FintrackError::Storage("transaction store lock poisoned".into()))
    }

    /// Replace the store with the contents of transactions.json
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut store = self.write_guard()?;
        *store = Store::default();
        for txn in file_data.transactions {
            store.link(&txn);
            store.by_id.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Write the current store to transactions.json, newest first
    pub fn save(&self) -> Result<(), FintrackError> {
        let store = self.read_guard()?;
        let mut transactions: Vec<Transaction> = store.by_id.values().cloned().collect();
        sort_newest_first(&mut transactions);
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Look up a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FintrackError> {
        Ok(self.read_guard()?.by_id.get(&id).cloned())
    }

    /// All transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, FintrackError> {
        let store = self.read_guard()?;
        let mut transactions: Vec<Transaction> = store.by_id.values().cloned().collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions referencing an account as source or destination
    pub fn get_by_account(&self, account_id: AccountId) -> Result<Vec<Transaction>, FintrackError> {
        let store = self.read_guard()?;
        let mut transactions: Vec<Transaction> = store
            .by_account
            .get(&account_id)
            .into_iter()
            .flatten()
            .filter_map(|id| store.by_id.get(id).cloned())
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Transactions dated within an inclusive range, newest first
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, FintrackError> {
        let store = self.read_guard()?;
        let mut transactions: Vec<Transaction> = store
            .by_id
            .values()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect();
        sort_newest_first(&mut transactions);
        Ok(transactions)
    }

    /// Insert or replace a transaction, keeping the account index current
    pub fn upsert(&self, txn: Transaction) -> Result<(), FintrackError> {
        let mut store = self.write_guard()?;

        if let Some(old) = store.by_id.remove(&txn.id) {
            store.unlink(&old);
        }
        store.link(&txn);
        store.by_id.insert(txn.id, txn);

        Ok(())
    }

    /// Remove a transaction; false if it was not present
    pub fn delete(&self, id: TransactionId) -> Result<bool, FintrackError> {
        let mut store = self.write_guard()?;

        match store.by_id.remove(&id) {
            Some(txn) => {
                store.unlink(&txn);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn count(&self) -> Result<usize, FintrackError> {
        Ok(self.read_guard()?.by_id.len())
    }
}

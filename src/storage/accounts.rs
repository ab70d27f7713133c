//! Account repository
//!
//! In-memory map of accounts with explicit load/save to accounts.json.
//! Queries hand out owned clones; the map never escapes the lock.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FintrackError;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of accounts.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AccountData {
    pub accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<AccountId, Account>>,
}

type Guard<'a> = RwLockReadGuard<'a, HashMap<AccountId, Account>>;
type GuardMut<'a> = RwLockWriteGuard<'a, HashMap<AccountId, Account>>;

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read_guard(&self) -> Result<Guard<'_>, FintrackError> {
        self.data
            .read()
            .map_err(|_| FintrackError::Storage("account store lock poisoned".into()))
    }

    fn write_guard(&self) -> Result<GuardMut<'_>, FintrackError> {
        self.data
            .write()
            .map_err(|_| FintrackError::Storage("account store lock poisoned".into()))
    }

    /// Replace the in-memory map with the contents of accounts.json
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut data = self.write_guard()?;
        *data = file_data
            .accounts
            .into_iter()
            .map(|account| (account.id, account))
            .collect();

        Ok(())
    }

    /// Write the current map to accounts.json
    pub fn save(&self) -> Result<(), FintrackError> {
        let accounts = self.collect_sorted(&self.read_guard()?);
        write_json_atomic(&self.path, &AccountData { accounts })
    }

    fn collect_sorted(&self, data: &Guard<'_>) -> Vec<Account> {
        let mut accounts: Vec<Account> = data.values().cloned().collect();
        accounts.sort_by_key(|a| a.name.to_lowercase());
        accounts
    }

    /// Look up an account by ID
    pub fn get(&self, id: AccountId) -> Result<Option<Account>, FintrackError> {
        Ok(self.read_guard()?.get(&id).cloned())
    }

    /// All accounts, sorted by name
    pub fn get_all(&self) -> Result<Vec<Account>, FintrackError> {
        Ok(self.collect_sorted(&self.read_guard()?))
    }

    /// Look up an account by name, ignoring case
    pub fn get_by_name(&self, name: &str) -> Result<Option<Account>, FintrackError> {
        let wanted = name.to_lowercase();
        Ok(self
            .read_guard()?
            .values()
            .find(|a| a.name.to_lowercase() == wanted)
            .cloned())
    }

    /// Insert or replace an account
    pub fn upsert(&self, account: Account) -> Result<(), FintrackError> {
        self.write_guard()?.insert(account.id, account);
        Ok(())
    }

    /// Remove an account; false if it was not present
    pub fn delete(&self, id: AccountId) -> Result<bool, FintrackError> {
        Ok(self.write_guard()?.remove(&id).is_some())
    }

    pub fn exists(&self, id: AccountId) -> Result<bool, FintrackError> {
        Ok(self.read_guard()?.contains_key(&id))
    }

    /// Whether another account already uses this name (case-insensitive)
    pub fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<AccountId>,
    ) -> Result<bool, FintrackError> {
        let wanted = name.to_lowercase();
        Ok(self
            .read_guard()?
            .values()
            .any(|a| a.name.to_lowercase() == wanted && Some(a.id) != exclude_id))
    }

    pub fn count(&self) -> Result<usize, FintrackError> {
        Ok(self.read_guard()?.len())
    }
}

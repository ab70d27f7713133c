//! Storage layer for fintrack
//!
//! JSON file storage with atomic writes, an in-memory change feed, and an
//! audit trail. [`Storage`] is the single handle the service layer works
//! through: it owns the repositories, the [`ChangeNotifier`], and the
//! [`AuditLogger`].

pub mod accounts;
pub mod events;
pub mod file_io;
pub mod init;
pub mod profile;
pub mod transactions;

pub use accounts::AccountRepository;
pub use events::{ChangeEvent, ChangeNotifier};
pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use profile::ProfileRepository;
pub use transactions::TransactionRepository;

use std::sync::mpsc;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FintrackPaths;
use crate::error::FintrackResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FintrackPaths,
    pub accounts: AccountRepository,
    pub transactions: TransactionRepository,
    pub profile: ProfileRepository,
    notifier: ChangeNotifier,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            profile: ProfileRepository::new(paths.profile_file()),
            notifier: ChangeNotifier::new(),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> FintrackResult<()> {
        self.accounts.load()?;
        self.transactions.load()?;
        self.profile.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> FintrackResult<()> {
        self.accounts.save()?;
        self.transactions.save()?;
        self.profile.save()?;
        Ok(())
    }

    /// Re-read accounts and transactions from disk, discarding in-memory
    /// state. Used to unwind a posting whose save failed partway.
    pub fn reload_ledger(&self) -> FintrackResult<()> {
        self.accounts.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Register a listener for data-change events
    pub fn subscribe(&self) -> mpsc::Receiver<ChangeEvent> {
        self.notifier.subscribe()
    }

    /// Broadcast a data-change event to all listeners
    pub fn notify(&self, event: ChangeEvent) {
        self.notifier.notify(event);
    }

    /// Access the audit log reader
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FintrackResult<()> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record an update in the audit log
    ///
    /// When `diff_summary` is `None` a field-level summary is derived from
    /// the two snapshots.
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> FintrackResult<()> {
        let mut entry = AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        );

        if entry.diff_summary.is_none() {
            if let (Some(b), Some(a)) = (&entry.before, &entry.after) {
                entry.diff_summary = generate_diff(b, a);
            }
        }

        self.audit.log(&entry)
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FintrackResult<()> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

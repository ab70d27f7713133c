//! Storage initialization
//!
//! First-run setup: creates the directory tree, empty store files, and
//! default settings.

use crate::config::paths::FintrackPaths;
use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};

use super::accounts::AccountData;
use super::file_io::{json_file_valid, write_json_atomic};
use super::transactions::TransactionData;

/// Initialize storage for a fresh installation
///
/// Safe to call on an existing installation: present files are left alone,
/// missing ones are created empty. Fails if a present store file no longer
/// parses, rather than shadowing it with fresh data.
pub fn initialize_storage(paths: &FintrackPaths) -> FintrackResult<()> {
    paths.ensure_directories()?;

    for file in [paths.accounts_file(), paths.transactions_file()] {
        if file.exists() && !json_file_valid(&file) {
            return Err(FintrackError::Config(format!(
                "Existing data file is corrupt: {}",
                file.display()
            )));
        }
    }

    if !paths.accounts_file().exists() {
        write_json_atomic(paths.accounts_file(), &AccountData::default())?;
    }
    if !paths.transactions_file().exists() {
        write_json_atomic(paths.transactions_file(), &TransactionData::default())?;
    }
    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    log::info!("Storage ready at {}", paths.base_dir().display());

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FintrackPaths) -> bool {
    !paths.is_initialized()
}

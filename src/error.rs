//! Error types
//!
//! Everything fallible in the crate returns [`FintrackResult`]. The variants
//! split along how the CLI should react: validation and not-found errors are
//! the user's to fix, storage and I/O errors are the environment's.

use thiserror::Error;

/// The error type for all fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Settings file or data directory problems
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O failures
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON encode/decode failures
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lookup that resolved to nothing
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Name collision on create or rename
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Ledger rule violations (posting, reversal, balance edits)
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// Transfer between accounts holding different currencies
    #[error("Currency mismatch: cannot transfer from {source} ({source_currency}) to {destination} ({destination_currency})")]
    CurrencyMismatch {
        // `r#` keeps thiserror from treating this field as the error's source()
        r#source: String,
        source_currency: String,
        destination: String,
        destination_currency: String,
    },

    /// CSV or statement writer failures
    #[error("Export error: {0}")]
    Export(String),

    /// Repository load/save failures
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FintrackError {
    fn missing(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// A lookup failed to find an account
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Account", identifier)
    }

    /// A lookup failed to find a transaction
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::missing("Transaction", identifier)
    }

    /// An account name is already taken
    pub fn duplicate_account(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FintrackError {
    fn from(e: std::io::Error) -> Self {
        FintrackError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(e: serde_json::Error) -> Self {
        FintrackError::Json(e.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, balance movement, and cross-entity operations.

pub mod account;
pub mod ledger;
pub mod profile;

pub use account::{AccountService, AccountSummary, CreateAccountInput};
pub use ledger::{
    AccountDrift, DanglingReference, IntegrityReport, LedgerService, RecordTransactionInput,
    TransactionFilter,
};
pub use profile::ProfileService;

//! Core data models for fintrack
//!
//! This module contains all the data structures that represent the ledger
//! domain: accounts, transactions, the user profile, and reporting periods.

pub mod account;
pub mod ids;
pub mod money;
pub mod period;
pub mod profile;
pub mod transaction;

pub use account::Account;
pub use ids::{AccountId, TransactionId};
pub use money::Money;
pub use period::ReportPeriod;
pub use profile::UserProfile;
pub use transaction::{
    Transaction, TransactionKind, BALANCE_ADJUSTMENT_CATEGORY, TRANSFER_CATEGORY,
};

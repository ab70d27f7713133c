//! Display formatting for terminal output
//!
//! Hand-formatted tables and detail views for accounts and transactions.
//! Reports carry their own `format_terminal` methods; this module covers
//! the entity views the CLI prints directly.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::{format_transaction_details, format_transaction_register};

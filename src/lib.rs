//! fintrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack ledger
//! application: accounts, the transactions that move money between them,
//! and the reporting built on top. Account balances are only ever changed
//! by posting or reversing transactions, so the transaction history always
//! explains every balance.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, money, periods)
//! - `storage`: JSON file storage layer with change notifications
//! - `services`: Business logic layer (accounts, ledger posting, profile)
//! - `audit`: Audit logging system
//! - `reports`: Aggregations over the stored ledger
//! - `export`: CSV and plain-text statement writers
//! - `display`: Terminal formatting for entities
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FintrackPaths, settings::Settings};
//! use fintrack::storage::Storage;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};

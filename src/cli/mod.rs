//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod export;
pub mod profile;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use export::{handle_export_command, ExportCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::ReportPeriod;

/// Parse a YYYY-MM-DD date argument, defaulting to today
pub(crate) fn parse_date_or_today(date: Option<&str>) -> FintrackResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            FintrackError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a period argument, defaulting to the current month
pub(crate) fn parse_period_or_current(period: Option<&str>) -> FintrackResult<ReportPeriod> {
    match period {
        Some(s) => ReportPeriod::parse(s)
            .map_err(|e| FintrackError::Validation(format!("Invalid period '{}': {}", s, e))),
        None => Ok(ReportPeriod::current_month()),
    }
}

//! Reports module for fintrack
//!
//! Pure aggregations over the stored ledger: period summaries, category
//! breakdowns, per-account activity, and the overview snapshot.

pub mod activity;
pub mod categories;
pub mod overview;
pub mod summary;

pub use activity::{AccountActivity, ActivityRow};
pub use categories::{CategoryBreakdown, CategoryRow};
pub use overview::{CurrencyTotal, Overview};
pub use summary::PeriodSummary;

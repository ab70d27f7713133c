//! Append-only audit trail
//!
//! Every create, update, and delete that goes through [`Storage`] is recorded
//! as an [`AuditEntry`] in a JSONL log next to the data files. The `history`
//! command reads the log back for display.
//!
//! [`Storage`]: crate::storage::Storage

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

//! Audit log of expense changes
//!
//! Every create, update and delete performed through the services is
//! appended to `audit.log` as one JSON line, with before/after snapshots.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

//! Audit logging for the expense tracker
//!
//! Every add, update and delete of an expense and every budget change is
//! appended to a line-delimited JSON log that sits next to the ledger file.
//!
//! - `AuditEntry`: one logged operation with before/after snapshots.
//! - `AuditLogger`: appends entries to the log and reads them back.
//! - `expense_diff` / `budget_diff`: field-level summary of an update.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::expense_added(&expense))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::{budget_diff, expense_diff};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

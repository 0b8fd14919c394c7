//! Error types for the expense tracker
//!
//! Console input mistakes are not errors here; the shell reports those
//! itself. `TrackerError` covers what can go wrong underneath: file access,
//! unknown records, CSV output and the audit log.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Console or file I/O outside the ledger and audit files
    #[error("I/O error: {0}")]
    Io(String),

    /// No record with the given identifier
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// CSV file could not be created or written
    #[error("Export error: {0}")]
    Export(String),

    /// Audit log could not be written or read back
    #[error("Audit error: {0}")]
    Audit(String),

    /// Ledger file could not be read, parsed or replaced
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

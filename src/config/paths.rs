//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-file` command-line flag
//! 2. `EXPENSE_TRACKER_FILE` environment variable
//! 3. `expenses.json` in the working directory
//!
//! The audit log always sits next to the data file.

use std::path::{Path, PathBuf};

/// File name used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// The JSON ledger read on start and written on save/exit
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Paths rooted at the default data file in the working directory
    pub fn new() -> Self {
        Self::with_data_file(PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Create TrackerPaths for an explicit data file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the JSON ledger
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the path to the audit log (`expenses.json` -> `expenses.audit.log`)
    pub fn audit_log(&self) -> PathBuf {
        self.data_file.with_extension("audit.log")
    }

    /// Resolve a user-entered file name, falling back to the data file when blank
    pub fn resolve_or_default(&self, entered: &str) -> PathBuf {
        let entered = entered.trim();
        if entered.is_empty() {
            self.data_file.clone()
        } else {
            PathBuf::from(entered)
        }
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_data_file() {
        let paths = TrackerPaths::new();
        assert_eq!(paths.data_file(), Path::new("expenses.json"));
        assert_eq!(paths.audit_log(), PathBuf::from("expenses.audit.log"));
    }

    #[test]
    fn test_custom_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_file(temp_dir.path().join("ledger.json"));

        assert_eq!(paths.data_file(), temp_dir.path().join("ledger.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("ledger.audit.log"));
    }

    #[test]
    fn test_resolve_or_default() {
        let paths = TrackerPaths::with_data_file("ledger.json");

        assert_eq!(paths.resolve_or_default(""), PathBuf::from("ledger.json"));
        assert_eq!(paths.resolve_or_default("   "), PathBuf::from("ledger.json"));
        assert_eq!(
            paths.resolve_or_default(" other.json "),
            PathBuf::from("other.json")
        );
    }
}

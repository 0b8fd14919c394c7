//! Storage layer for the expense tracker
//!
//! `Storage` is the single owned context every operation works against: the
//! expense records, the monthly budgets, the audit logger and the location of
//! the ledger file. It is loaded from and saved to one JSON document:
//!
//! ```json
//! {
//!   "expenses": [{"id": 1, "description": "Coffee", "amount": 4.5,
//!                 "category": "Food", "date": "2025-06-03"}],
//!   "budgets": {"6": 100.0}
//! }
//! ```

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json_optional, write_json_atomic};

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money, Month};

/// Serializable ledger document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    pub expenses: Vec<Expense>,
    pub budgets: BTreeMap<Month, Money>,
}

/// What happened when a ledger file was loaded
///
/// Only `Loaded` keeps data; the other two leave the store empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; counts of what it held
    Loaded { expenses: usize, budgets: usize },
    /// No file at that path
    Missing,
    /// The file exists but is not a ledger document
    Malformed(String),
}

/// Main storage coordinator that owns all in-memory state
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
    /// Most recent audit write that failed, not yet reported
    audit_failure: Option<TrackerError>,
}

impl Storage {
    /// Create an empty Storage that records mutations in the audit log
    pub fn new(paths: TrackerPaths) -> Self {
        let audit = Some(AuditLogger::new(paths.audit_log()));
        Self {
            paths,
            expenses: ExpenseRepository::new(),
            budgets: BudgetRepository::new(),
            audit,
            audit_failure: None,
        }
    }

    /// Create an empty Storage with audit logging switched off
    pub fn without_audit(paths: TrackerPaths) -> Self {
        Self {
            audit: None,
            ..Self::new(paths)
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Take the last audit write failure, if one happened since the last call
    ///
    /// A failed audit write never undoes or fails the mutation it describes.
    pub fn take_audit_failure(&mut self) -> Option<TrackerError> {
        self.audit_failure.take()
    }

    /// Snapshot the in-memory state as a ledger document
    pub fn snapshot(&self) -> LedgerData {
        LedgerData {
            expenses: self.expenses.to_vec(),
            budgets: self.budgets.to_map(),
        }
    }

    /// Replace all in-memory state with a ledger document
    pub fn restore(&mut self, data: LedgerData) {
        self.expenses.replace_all(data.expenses);
        self.budgets.replace_all(data.budgets);
    }

    /// Drop all in-memory state
    pub fn clear(&mut self) {
        self.restore(LedgerData::default());
    }

    /// Load the configured data file
    pub fn load(&mut self) -> LoadOutcome {
        let path = self.paths.data_file().to_path_buf();
        self.load_from(&path)
    }

    /// Load a ledger file, replacing all in-memory state
    ///
    /// Never fails: a missing or unreadable file leaves the store empty and
    /// is reported through the returned outcome.
    pub fn load_from(&mut self, path: &Path) -> LoadOutcome {
        match read_json_optional::<LedgerData, _>(path) {
            Ok(Some(data)) => {
                let outcome = LoadOutcome::Loaded {
                    expenses: data.expenses.len(),
                    budgets: data.budgets.len(),
                };
                self.restore(data);
                outcome
            }
            Ok(None) => {
                self.clear();
                LoadOutcome::Missing
            }
            Err(e) => {
                self.clear();
                LoadOutcome::Malformed(e.to_string())
            }
        }
    }

    /// Save to the configured data file
    pub fn save(&self) -> TrackerResult<()> {
        self.save_to(self.paths.data_file())
    }

    /// Save everything to a ledger file, overwriting it
    pub fn save_to(&self, path: &Path) -> TrackerResult<()> {
        write_json_atomic(path, &self.snapshot())
    }

    /// Record a created expense
    pub fn log_expense_created(&mut self, expense: &Expense) {
        self.log(|| AuditEntry::expense_added(expense))
    }

    /// Record an edited expense
    pub fn log_expense_updated(&mut self, before: &Expense, after: &Expense) {
        self.log(|| AuditEntry::expense_updated(before, after))
    }

    /// Record a removed expense
    pub fn log_expense_deleted(&mut self, expense: &Expense) {
        self.log(|| AuditEntry::expense_deleted(expense))
    }

    /// Record a budget being set, as a create or an overwrite
    pub fn log_budget_set(&mut self, month: Month, previous: Option<Money>, amount: Money) {
        self.log(|| AuditEntry::budget_set(month, previous, amount))
    }

    fn log(&mut self, entry: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry()) {
                self.audit_failure = Some(e);
            }
        }
    }
}

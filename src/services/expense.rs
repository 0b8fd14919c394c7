//! Expense service
//!
//! Add, update and delete operations on the expense records. Each mutation
//! is applied to the in-memory store first and then written to the audit
//! log. An audit write that fails is kept on the storage for the caller to
//! report; the mutation stands either way.

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseChanges, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense mutations
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense dated today
    pub fn add(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Expense {
        let today = Local::now().date_naive();
        self.add_dated(description, amount, category, today)
    }

    /// Record a new expense on a specific date
    pub fn add_dated(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Expense {
        let expense = self
            .storage
            .expenses
            .insert(description, amount, category, date)
            .clone();

        self.storage.log_expense_created(&expense);
        expense
    }

    /// Overwrite the supplied fields of the first expense with this id
    ///
    /// Returns the expense as it is after the update.
    pub fn update(&mut self, id: ExpenseId, changes: ExpenseChanges) -> TrackerResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get_mut(id)
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;

        let before = expense.clone();
        expense.apply(changes);
        let after = expense.clone();

        if before != after {
            self.storage.log_expense_updated(&before, &after);
        }

        Ok(after)
    }

    /// Remove every expense with this id, returning how many were removed
    ///
    /// Removing an id that does not exist is not an error.
    pub fn delete(&mut self, id: ExpenseId) -> usize {
        let removed = self.storage.expenses.remove_all(id);

        for expense in &removed {
            self.storage.log_expense_deleted(expense);
        }

        removed.len()
    }
}

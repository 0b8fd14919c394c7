//! Budget service
//!
//! Sets the budget amount for a calendar month.

use crate::models::{Money, Month};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Set (or overwrite) the budget for a month
    ///
    /// Returns the amount that was replaced, if any.
    pub fn set_budget(&mut self, month: Month, amount: Money) -> Option<Money> {
        let previous = self.storage.budgets.set(month, amount);
        self.storage.log_budget_set(month, previous, amount);
        previous
    }
}

//! Summary service
//!
//! Read-only queries over the ledger: listing, totals and budget checks.
//! Monthly figures only count expenses dated in the requested month of the
//! requested year.

use crate::models::{Expense, Money, Month};
use crate::storage::Storage;

/// Outcome of checking a month's spending against its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No budget has been set for the month
    NoBudget,
    /// Spending is strictly above the budget
    Over {
        budget: Money,
        spent: Money,
        overage: Money,
    },
    /// Spending is at or below the budget
    Within { budget: Money, spent: Money },
}

impl BudgetStatus {
    /// Check if spending exceeded the budget
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over { .. })
    }
}

/// Service for ledger queries
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All expenses in insertion order
    pub fn list(&self) -> impl Iterator<Item = &'a Expense> + 'a {
        let storage: &'a Storage = self.storage;
        storage.expenses.iter()
    }

    /// Sum of every recorded amount, regardless of date
    pub fn total(&self) -> Money {
        self.storage.expenses.iter().map(|e| e.amount).sum()
    }

    /// Sum of amounts dated in the given month of the given year
    pub fn monthly_total(&self, month: Month, year: i32) -> Money {
        self.storage
            .expenses
            .iter()
            .filter(|e| e.is_in(month, year))
            .map(|e| e.amount)
            .sum()
    }

    /// Compare a month's spending against its budget
    pub fn check_budget(&self, month: Month, year: i32) -> BudgetStatus {
        let Some(budget) = self.storage.budgets.get(month) else {
            return BudgetStatus::NoBudget;
        };

        let spent = self.monthly_total(month, year);
        if spent > budget {
            BudgetStatus::Over {
                budget,
                spent,
                overage: spent - budget,
            }
        } else {
            BudgetStatus::Within { budget, spent }
        }
    }
}

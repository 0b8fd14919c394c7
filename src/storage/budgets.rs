//! Budget repository
//!
//! One budget amount per calendar month. Setting a month again overwrites
//! the previous amount; budgets are never deleted.

use std::collections::BTreeMap;

use crate::models::{Money, Month};

/// In-memory store of monthly budgets
#[derive(Debug, Default)]
pub struct BudgetRepository {
    budgets: BTreeMap<Month, Money>,
}

impl BudgetRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget for a month, returning the amount it replaced
    pub fn set(&mut self, month: Month, amount: Money) -> Option<Money> {
        self.budgets.insert(month, amount)
    }

    /// Get the budget for a month
    pub fn get(&self, month: Month) -> Option<Money> {
        self.budgets.get(&month).copied()
    }

    /// Iterate over budgets in month order
    pub fn iter(&self) -> impl Iterator<Item = (Month, Money)> + '_ {
        self.budgets.iter().map(|(m, a)| (*m, *a))
    }

    /// Replace every budget
    pub fn replace_all(&mut self, budgets: BTreeMap<Month, Money>) {
        self.budgets = budgets;
    }

    /// Number of months with a budget
    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    /// Check if no budget is set
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    /// Clone the mapping out for serialization
    pub fn to_map(&self) -> BTreeMap<Month, Money> {
        self.budgets.clone()
    }
}

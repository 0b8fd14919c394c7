//! Expense display formatting

use crate::models::Expense;

/// Shown by the list view when there is nothing to list
pub const NO_EXPENSES: &str = "No expenses recorded.";

/// Format expenses one per line, lazily, in the order given
pub fn format_expense_rows<'a, I>(expenses: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a Expense>,
    I::IntoIter: 'a,
{
    expenses.into_iter().map(|e| e.to_string())
}

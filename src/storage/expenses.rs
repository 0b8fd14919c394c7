//! Expense repository
//!
//! Holds expenses in insertion order together with the identifier counter.
//! The counter is derived state: it is recomputed whenever the collection is
//! replaced wholesale and is never written to disk.

use chrono::NaiveDate;

use crate::models::{Expense, ExpenseId, Money};

/// In-memory store of expense records
#[derive(Debug, Default)]
pub struct ExpenseRepository {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl ExpenseRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new expense under the next identifier
    pub fn insert(
        &mut self,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> &Expense {
        let id = self.next_id;
        self.next_id = id.next();
        self.expenses.push(Expense::new(id, description, amount, category, date));
        &self.expenses[self.expenses.len() - 1]
    }

    /// First expense with the given id, in insertion order
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Mutable access to the first expense with the given id
    pub fn get_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Remove every expense carrying the given id, returning what was removed
    pub fn remove_all(&mut self, id: ExpenseId) -> Vec<Expense> {
        let (removed, kept): (Vec<Expense>, Vec<Expense>) = std::mem::take(&mut self.expenses)
            .into_iter()
            .partition(|e| e.id == id);
        self.expenses = kept;
        removed
    }

    /// Iterate over all expenses in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter()
    }

    /// Replace the whole collection and recompute the id counter
    pub fn replace_all(&mut self, expenses: Vec<Expense>) {
        self.next_id = expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(ExpenseId::FIRST);
        self.expenses = expenses;
    }

    /// The identifier the next insert will use
    pub fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if there are no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Clone the expenses out for serialization
    pub fn to_vec(&self) -> Vec<Expense> {
        self.expenses.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    fn expense(id: u64) -> Expense {
        Expense::new(ExpenseId::new(id), "x", Money::from_cents(100), "Misc", day())
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut repo = ExpenseRepository::new();
        let a = repo.insert("Coffee", Money::from_cents(450), "Food", day()).id;
        let b = repo.insert("Bus", Money::from_cents(200), "Transport", day()).id;

        assert_eq!(a, ExpenseId::new(1));
        assert_eq!(b, ExpenseId::new(2));
        assert_eq!(repo.next_id(), ExpenseId::new(3));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut repo = ExpenseRepository::new();
        repo.insert("a", Money::zero(), "c", day());
        repo.insert("b", Money::zero(), "c", day());
        repo.remove_all(ExpenseId::new(2));

        let id = repo.insert("c", Money::zero(), "c", day()).id;
        assert_eq!(id, ExpenseId::new(3));
    }

    #[test]
    fn test_remove_all_duplicates() {
        let mut repo = ExpenseRepository::new();
        repo.replace_all(vec![expense(1), expense(2), expense(1)]);

        let removed = repo.remove_all(ExpenseId::new(1));
        assert_eq!(removed.len(), 2);
        assert_eq!(repo.len(), 1);
        assert!(repo.get(ExpenseId::new(1)).is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut repo = ExpenseRepository::new();
        repo.replace_all(vec![expense(1)]);

        assert!(repo.remove_all(ExpenseId::new(9)).is_empty());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_get_mut_first_match() {
        let mut repo = ExpenseRepository::new();
        repo.replace_all(vec![expense(4), expense(4)]);

        repo.get_mut(ExpenseId::new(4)).unwrap().description = "first".into();

        let descriptions: Vec<_> = repo.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "x"]);
    }

    #[test]
    fn test_replace_all_recomputes_counter() {
        let mut repo = ExpenseRepository::new();
        repo.replace_all(vec![expense(3), expense(10), expense(7)]);
        assert_eq!(repo.next_id(), ExpenseId::new(11));

        repo.replace_all(Vec::new());
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), ExpenseId::FIRST);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut repo = ExpenseRepository::new();
        repo.replace_all(vec![expense(5), expense(2), expense(8)]);

        let ids: Vec<u64> = repo.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![5, 2, 8]);
    }
}

//! Expense model
//!
//! A single recorded expense. The date has day precision; it is stamped
//! from the local clock when the expense is added and never edited.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned in sequence
    pub id: ExpenseId,

    /// Free-text description
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// Free-form category name
    pub category: String,

    /// Day the expense was recorded (stored as YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Field changes for an existing expense
///
/// `None` leaves the field as it is. `Some("")` and `Some(Money::zero())`
/// are real values and are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseChanges {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
}

impl ExpenseChanges {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }

    /// Apply the supplied fields, leaving the id and date untouched
    pub fn apply(&mut self, changes: ExpenseChanges) {
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
    }

    /// Check whether this expense falls in the given month of the given year
    pub fn is_in(&self, month: Month, year: i32) -> bool {
        Month::of(&self.date) == month && self.date.year() == year
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Description: {}, Amount: {}, Category: {}, Date: {}",
            self.id,
            self.description,
            self.amount,
            self.category,
            self.date.format("%Y-%m-%d")
        )
    }
}

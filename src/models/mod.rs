//! Core data models for the expense tracker
//!
//! This module contains the data structures that make up a ledger:
//! expenses, their identifiers, money amounts and budget months.

pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use expense::{Expense, ExpenseChanges};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};

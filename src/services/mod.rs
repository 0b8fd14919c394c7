//! Business logic layer
//!
//! Services borrow the `Storage` context: mutations take it mutably, queries
//! share it.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use summary::{BudgetStatus, SummaryService};

//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::{format_expense_rows, NO_EXPENSES};
pub use report::{
    format_audit_history, format_budget_status, format_load_outcome, format_monthly_total,
    format_total,
};

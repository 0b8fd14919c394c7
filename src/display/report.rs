//! Report formatting utilities for terminal output
//!
//! One-line messages for totals, budget checks, loads and audit history.

use std::path::Path;

use crate::audit::AuditEntry;
use crate::models::{Money, Month};
use crate::services::BudgetStatus;
use crate::storage::LoadOutcome;

/// Format the all-time total
pub fn format_total(total: Money) -> String {
    format!("Total expenses: {}", total)
}

/// Format a month's total
pub fn format_monthly_total(month: Month, total: Money) -> String {
    format!("Total expenses for month {}: {}", month, total)
}

/// Format the result of a budget check
pub fn format_budget_status(month: Month, status: &BudgetStatus) -> String {
    match status {
        BudgetStatus::NoBudget => "No budget set for this month.".to_string(),
        BudgetStatus::Over { overage, .. } => format!(
            "Warning: You have exceeded your budget for month {} by {}",
            month, overage
        ),
        BudgetStatus::Within { budget, spent } => format!(
            "You are within your budget for month {} ({} of {} spent)",
            month, spent, budget
        ),
    }
}

/// Format the result of loading a ledger file
pub fn format_load_outcome(path: &Path, outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::Loaded { expenses, budgets } => format!(
            "Data loaded from {} ({} expenses, {} budgets)",
            path.display(),
            expenses,
            budgets
        ),
        LoadOutcome::Missing => {
            format!("{} not found. Starting with empty data.", path.display())
        }
        LoadOutcome::Malformed(reason) => format!(
            "Error reading {}. Starting with empty data. ({})",
            path.display(),
            reason
        ),
    }
}

/// Format audit entries as a history listing, oldest first
pub fn format_audit_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.to_string());
        output.push('\n');
    }
    output
}

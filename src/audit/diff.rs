//! Change summaries for audit logging
//!
//! An update is summarized as `field: old -> new` pairs, one per field that
//! actually changed, in display form (`amount: 4.50 -> 5.00`).

use crate::models::{Expense, Money};

/// Longest text value shown in full; longer ones are cut with `...`
const MAX_TEXT: usize = 50;

/// Summarize the edited fields of an expense, or `None` if nothing changed
pub fn expense_diff(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: {} -> {}",
            quoted(&before.description),
            quoted(&after.description)
        ));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.category != after.category {
        changes.push(format!(
            "category: {} -> {}",
            quoted(&before.category),
            quoted(&after.category)
        ));
    }
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

/// Summarize a budget overwrite, or `None` if the amount is unchanged
pub fn budget_diff(before: Money, after: Money) -> Option<String> {
    (before != after).then(|| format!("{} -> {}", before, after))
}

fn quoted(text: &str) -> String {
    if text.chars().count() > MAX_TEXT {
        let head: String = text.chars().take(MAX_TEXT - 3).collect();
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", text)
    }
}

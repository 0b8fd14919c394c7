//! Audit entry data structures
//!
//! One `AuditEntry` per ledger mutation. Entries carry JSON snapshots of the
//! record before and after the change so the log can be read without the
//! ledger file.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Expense, Money, Month};

use super::diff::{budget_diff, expense_diff};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// What kind of record an entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Budget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Budget => write!(f, "Budget"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Expense id or budget month
    pub entity_id: String,

    /// Expense description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,

    /// `field: old -> new` pairs for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: Option<Value>,
        after: Option<Value>,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    fn expense_record(
        operation: Operation,
        expense: &Expense,
        before: Option<&Expense>,
        after: Option<&Expense>,
        diff_summary: Option<String>,
    ) -> Self {
        Self::record(
            operation,
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            before.and_then(snapshot),
            after.and_then(snapshot),
            diff_summary,
        )
    }

    /// A newly recorded expense
    pub fn expense_added(expense: &Expense) -> Self {
        Self::expense_record(Operation::Create, expense, None, Some(expense), None)
    }

    /// An edited expense, with a summary of the changed fields
    pub fn expense_updated(before: &Expense, after: &Expense) -> Self {
        Self::expense_record(
            Operation::Update,
            after,
            Some(before),
            Some(after),
            expense_diff(before, after),
        )
    }

    /// A removed expense
    pub fn expense_deleted(expense: &Expense) -> Self {
        Self::expense_record(Operation::Delete, expense, Some(expense), None, None)
    }

    /// A budget set for a month; an update when it replaced an earlier amount
    pub fn budget_set(month: Month, previous: Option<Money>, amount: Money) -> Self {
        let (operation, diff) = match previous {
            None => (Operation::Create, None),
            Some(before) => (Operation::Update, budget_diff(before, amount)),
        };

        Self::record(
            operation,
            EntityType::Budget,
            month.to_string(),
            None,
            previous.as_ref().and_then(snapshot),
            snapshot(&amount),
            diff,
        )
    }
}

fn snapshot<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

/// One line per entry, plus an indented line of changes for updates
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;

        if let Some(name) = &self.entity_name {
            write!(f, " ({})", name)?;
        }

        if let Some(diff) = &self.diff_summary {
            write!(f, "\n  Changes: {}", diff)?;
        }

        Ok(())
    }
}

//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log line
///
/// Creates carry only `after`, deletes only `before`, updates both plus a
/// field-level summary of what changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub expense_id: ExpenseId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// e.g. `amount: 1250 -> 1500`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    pub fn create(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            expense_id: expense.id,
            before: None,
            after: serde_json::to_value(expense).ok(),
            diff_summary: None,
        }
    }

    pub fn update(before: &Expense, after: &Expense) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            expense_id: after.id,
            before: before_json,
            after: after_json,
            diff_summary,
        }
    }

    pub fn delete(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            expense_id: expense.id,
            before: serde_json::to_value(expense).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// One-line rendering for `expenses audit`
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} expense #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseDraft, Money};
    use chrono::NaiveDate;

    fn expense(cents: i64, description: &str) -> Expense {
        Expense::from_draft(
            ExpenseId::new(7),
            ExpenseDraft::new(
                NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
                Money::from_cents(cents),
                ExpenseCategory::Food,
                description,
            ),
        )
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&expense(1250, "Lunch"));
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.expense_id, ExpenseId::new(7));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 1250);
    }

    #[test]
    fn test_update_entry_has_diff() {
        let entry = AuditEntry::update(&expense(1250, "Lunch"), &expense(1500, "Lunch"));
        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(entry.diff_summary.as_deref(), Some("amount: 1250 -> 1500"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&expense(1250, "Lunch"));
        assert!(entry.after.is_none());
        assert!(entry.before.is_some());
    }

    #[test]
    fn test_human_readable() {
        let entry = AuditEntry::update(&expense(1250, "Lunch"), &expense(1250, "Dinner"));
        let text = entry.format_human_readable();
        assert!(text.contains("UPDATE expense #7"));
        assert!(text.contains("description: \"Lunch\" -> \"Dinner\""));
    }
}

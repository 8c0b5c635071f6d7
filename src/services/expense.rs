//! Expense service
//!
//! The boundary between raw user text and the store: parses amount, date and
//! category input, rejects anything invalid before a single row is touched,
//! and records every mutation in the audit log.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseDraft, ExpenseId, Money, Period};
use crate::storage::Storage;

/// Message shown when amount text cannot be used
pub const INVALID_AMOUNT_MESSAGE: &str = "Please enter a valid amount.";

/// Parse amount text such as `12.50`, `12` or `$12.5`
///
/// Negative amounts and amounts above `Money::MAX` are rejected along with
/// anything non-numeric.
pub fn parse_amount(text: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(text).map_err(|e| {
        debug!(input = text, error = %e, "rejected amount");
        ExpenseError::Validation(INVALID_AMOUNT_MESSAGE.into())
    })?;

    if amount.is_negative() || amount > Money::MAX {
        debug!(input = text, "amount out of range");
        return Err(ExpenseError::Validation(INVALID_AMOUNT_MESSAGE.into()));
    }
    Ok(amount)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD.",
            text.trim()
        ))
    })
}

/// Parse a category name, ignoring case
pub fn parse_category(text: &str) -> ExpenseResult<ExpenseCategory> {
    text.parse::<ExpenseCategory>()
        .map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Raw text for a new expense
///
/// Missing date means today; missing category means the first in the set.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpenseInput {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// Validate every field and build a draft
    pub fn into_draft(self, today: NaiveDate) -> ExpenseResult<ExpenseDraft> {
        let amount = parse_amount(&self.amount)?;
        let date = match non_blank(self.date) {
            Some(text) => parse_date(&text)?,
            None => today,
        };
        let category = match non_blank(self.category) {
            Some(text) => parse_category(&text)?,
            None => ExpenseCategory::default(),
        };

        Ok(ExpenseDraft::new(
            date,
            amount,
            category,
            self.description.unwrap_or_default().trim(),
        ))
    }
}

/// Raw text for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    /// Validate the given fields and overlay them onto `draft`
    pub fn apply(self, mut draft: ExpenseDraft) -> ExpenseResult<ExpenseDraft> {
        if let Some(text) = self.amount {
            draft.amount = parse_amount(&text)?;
        }
        if let Some(text) = self.date {
            draft.date = parse_date(&text)?;
        }
        if let Some(text) = self.category {
            draft.category = parse_category(&text)?;
        }
        if let Some(text) = self.description {
            draft.description = text.trim().to_string();
        }
        Ok(draft)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse raw input and store a new expense
    pub fn add(&self, input: ExpenseInput) -> ExpenseResult<Expense> {
        let draft = input.into_draft(today())?;
        self.create(draft)
    }

    /// Store an already-typed draft
    pub fn create(&self, draft: ExpenseDraft) -> ExpenseResult<Expense> {
        draft
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let id = self.storage.expenses.create(&draft)?;
        let expense = Expense::from_draft(id, draft);

        self.audit(expense.id, self.storage.log_create(&expense));
        info!(id = %expense.id, amount = %expense.amount, "expense added");
        Ok(expense)
    }

    /// Fetch one expense, failing if it does not exist
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// All expenses, newest date first
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.list()
    }

    pub fn list_for_period(&self, period: &Period) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.list_for_period(period)
    }

    /// Overwrite every mutable field of `id`
    pub fn update(&self, id: ExpenseId, draft: ExpenseDraft) -> ExpenseResult<Expense> {
        draft
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let before = self.get(id)?;
        if !self.storage.expenses.update(id, &draft)? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }

        let after = Expense::from_draft(id, draft);
        self.audit(id, self.storage.log_update(&before, &after));
        info!(id = %id, "expense updated");
        Ok(after)
    }

    /// Apply text changes to an existing expense
    pub fn edit(&self, id: ExpenseId, changes: ExpenseChanges) -> ExpenseResult<Expense> {
        let current = self.get(id)?;
        let draft = changes.apply(current.to_draft())?;
        self.update(id, draft)
    }

    /// Remove an expense, returning what was deleted
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self.get(id)?;
        if !self.storage.expenses.delete(id)? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }

        self.audit(id, self.storage.log_delete(&expense));
        info!(id = %id, "expense deleted");
        Ok(expense)
    }

    /// Sum of all expenses dated in `period`
    pub fn total_for_period(&self, period: &Period) -> ExpenseResult<Money> {
        self.storage.expenses.sum_for_period(period)
    }

    // The row is already committed; a failed audit append must not turn the
    // mutation into a reported failure.
    fn audit(&self, id: ExpenseId, result: ExpenseResult<()>) {
        if let Err(e) = result {
            warn!(id = %id, error = %e, "failed to write audit entry");
        }
    }
}

//! Expense model
//!
//! A stored expense is an `ExpenseDraft` plus the id the store assigned to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// The mutable fields of an expense, before it has an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Date the money was spent
    pub date: NaiveDate,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Category from the fixed set
    pub category: ExpenseCategory,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl ExpenseDraft {
    /// Create a draft with all fields
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: ExpenseCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

/// An expense as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier
    pub id: ExpenseId,

    /// Date the money was spent
    pub date: NaiveDate,

    /// Amount spent
    pub amount: Money,

    /// Category from the fixed set
    pub category: ExpenseCategory,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Attach an id to a draft
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            date: draft.date,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
        }
    }

    /// Copy of the mutable fields
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description.clone(),
        }
    }

    /// ISO `yyyy-MM-dd` date, the stored column format
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Date rendered with a strftime pattern; falls back to ISO when the
    /// pattern cannot be rendered
    pub fn date_display(&self, format: &str) -> String {
        let mut out = String::new();
        match write!(out, "{}", self.date.format(format)) {
            Ok(()) => out,
            Err(_) => self.date_string(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

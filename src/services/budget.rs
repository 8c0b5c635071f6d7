//! Budget tracker
//!
//! Compares a month's spending with the configured monthly budget and
//! produces everything a progress bar needs: value, maximum, state and label.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, Period};
use crate::storage::ExpenseRepository;

/// Whether spending is within the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    UnderBudget,
    OverBudget,
}

impl BudgetState {
    pub fn is_over(self) -> bool {
        self == BudgetState::OverBudget
    }
}

/// Progress of one month's spending against the budget
///
/// `value` and `max` are whole dollars. Under budget the bar runs up to the
/// budget; over budget `max` is the total so the bar reads full.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub total: Money,
    pub budget: Money,
    pub value: u64,
    pub max: u64,
    pub state: BudgetState,
    pub label: String,
    /// Percentage over budget to one decimal, only when over
    pub percent_over: Option<f64>,
}

impl BudgetProgress {
    /// Filled fraction of the bar in `0.0..=1.0`
    pub fn ratio(&self) -> f64 {
        match self.state {
            BudgetState::OverBudget => 1.0,
            BudgetState::UnderBudget => {
                (self.total.cents() as f64 / self.budget.cents() as f64).clamp(0.0, 1.0)
            }
        }
    }
}

/// Tracks spending against a fixed monthly budget
#[derive(Debug, Clone, Copy)]
pub struct BudgetTracker {
    budget: Money,
}

impl BudgetTracker {
    /// A zero or negative budget cannot be tracked against
    pub fn new(budget: Money) -> ExpenseResult<Self> {
        if !budget.is_positive() {
            return Err(ExpenseError::Config(format!(
                "Monthly budget must be positive, got {}",
                budget
            )));
        }
        Ok(Self { budget })
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Progress for a month whose expenses sum to `total`
    pub fn progress(&self, total: Money) -> BudgetProgress {
        let total_dollars = whole_dollars(total);
        let budget_dollars = whole_dollars(self.budget);

        if total <= self.budget {
            return BudgetProgress {
                total,
                budget: self.budget,
                value: total_dollars,
                max: budget_dollars,
                state: BudgetState::UnderBudget,
                label: format!(
                    "Monthly Budget Progress: ${} / ${}",
                    total_dollars, budget_dollars
                ),
                percent_over: None,
            };
        }

        let tenths = percent_over_tenths(total, self.budget);
        BudgetProgress {
            total,
            budget: self.budget,
            value: total_dollars,
            max: total_dollars,
            state: BudgetState::OverBudget,
            label: format!(
                "Monthly Budget Exceeded: ${} / ${} ({}.{}% over)",
                total_dollars,
                budget_dollars,
                tenths / 10,
                tenths % 10
            ),
            percent_over: Some(tenths as f64 / 10.0),
        }
    }

    /// Progress for the expenses stored under `period`
    pub fn progress_for_period(
        &self,
        expenses: &ExpenseRepository,
        period: &Period,
    ) -> ExpenseResult<BudgetProgress> {
        Ok(self.progress(expenses.sum_for_period(period)?))
    }
}

fn whole_dollars(amount: Money) -> u64 {
    u64::try_from(amount.dollars()).unwrap_or(0)
}

/// `(total - budget) / budget * 100`, in tenths of a percent, rounded half-up
fn percent_over_tenths(total: Money, budget: Money) -> i64 {
    let over = i128::from(total.cents() - budget.cents());
    let budget = i128::from(budget.cents());
    let tenths = (over * 1000 + budget / 2) / budget;
    i64::try_from(tenths).unwrap_or(i64::MAX)
}

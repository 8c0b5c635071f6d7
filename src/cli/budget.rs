//! CLI command for budget progress

use crate::config::Settings;
use crate::display::format_budget_progress;
use crate::error::ExpenseResult;
use crate::models::Period;
use crate::services::BudgetTracker;
use crate::storage::Storage;

use super::expense::parse_period;

/// Print progress against the monthly budget for `period` (default: this month)
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<String>,
) -> ExpenseResult<()> {
    let period = match period {
        Some(text) => parse_period(&text)?,
        None => Period::current(),
    };

    let tracker = BudgetTracker::new(settings.monthly_budget)?;
    let progress = tracker.progress_for_period(&storage.expenses, &period)?;

    print!("{}", format_budget_progress(&progress, &period));
    Ok(())
}

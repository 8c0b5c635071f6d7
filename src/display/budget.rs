//! Budget progress formatting

use super::report::format_bar;
use crate::models::Period;
use crate::services::BudgetProgress;

const BAR_WIDTH: usize = 40;

/// Label line followed by a text progress bar
pub fn format_budget_progress(progress: &BudgetProgress, period: &Period) -> String {
    let percent = (progress.ratio() * 100.0).round() as u32;
    let marker = if progress.state.is_over() { " OVER" } else { "" };

    format!(
        "{}\n{}\n[{}] {}%{}\n",
        period,
        progress.label,
        format_bar(progress.ratio(), 1.0, BAR_WIDTH),
        percent,
        marker
    )
}

//! Display formatting for terminal output
//!
//! Turns expenses, budget progress and report rows into text for the
//! command line.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::format_budget_progress;
pub use expense::{format_expense_details, format_expense_table};

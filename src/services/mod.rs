//! Service layer for the expense tracker
//!
//! Services sit on top of the storage layer: they validate user input,
//! compute budget progress and record audit entries.

pub mod budget;
pub mod expense;
pub mod import;

pub use budget::{BudgetProgress, BudgetState, BudgetTracker};
pub use expense::{ExpenseChanges, ExpenseInput, ExpenseService};
pub use import::{ImportResult, ImportService, RowError};

//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its fixed category set, money amounts and calendar months.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseDraft};
pub use ids::ExpenseId;
pub use money::Money;
pub use period::Period;

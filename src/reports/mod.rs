//! Reports over stored expenses

pub mod monthly;

pub use monthly::{MonthlyTotals, NO_DATA_MESSAGE};

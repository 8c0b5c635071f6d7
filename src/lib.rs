//! Expense Tracker - monthly expense tracking with a budget gauge
//!
//! Expenses are stored in SQLite, checked against a configurable monthly
//! budget and summarised per month. The same operations back both the
//! `expenses` command line and the terminal dashboard.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, periods, categories and expenses
//! - `storage`: SQLite expense store, atomic file writes
//! - `services`: Validation, budget progress, CSV import
//! - `reports`: Monthly totals
//! - `audit`: Append-only audit log of mutations
//! - `export`: CSV / JSON / YAML export
//! - `display`: Terminal formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: ratatui dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::models::Period;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let total = storage.expenses.sum_for_period(&Period::current())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};

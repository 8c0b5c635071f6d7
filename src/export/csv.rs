//! CSV export
//!
//! Uses the same `date,amount,category,description` columns the importer
//! reads, with an `id` column in front.

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::Storage;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    date: String,
    amount: String,
    category: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.get(),
            date: expense.date_string(),
            amount: expense.amount.format_plain(),
            category: expense.category.name(),
            description: &expense.description,
        }
    }
}

/// Write the given expenses as CSV
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer
            .serialize(CsvRow::from(expense))
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    if expenses.is_empty() {
        csv_writer
            .write_record(["id", "date", "amount", "category", "description"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Export all stored expenses to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> ExpenseResult<()> {
    let expenses = storage.expenses.list()?;
    write_expenses_csv(&expenses, writer)
}

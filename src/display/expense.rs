//! Expense display formatting
//!
//! Table and detail views of expenses for the command line.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::config::Settings;
use crate::models::Expense;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.get(),
            date: expense.date_display(&settings.date_format),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
            category: expense.category.name(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
        }
    }
}

/// Format expenses as a bordered table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow::new(e, settings));
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format one expense as labelled lines
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     #{}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date_display(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));

    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

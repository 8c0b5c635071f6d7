//! CLI commands for expense management

use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, Period};
use crate::services::{ExpenseChanges, ExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Arguments for `expenses add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, e.g. 12.50
    pub amount: String,

    /// Date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category: Food, Transport, Rent, Utilities or Other
    #[arg(short, long)]
    pub category: Option<String>,

    /// Description
    #[arg(short = 'm', long = "description")]
    pub description: Option<String>,
}

/// Arguments for `expenses list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one month (YYYY-MM)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Show at most this many expenses
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for `expenses edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Expense ID
    pub id: String,

    /// New amount
    #[arg(long)]
    pub amount: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}

pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let expense = service.add(ExpenseInput {
        amount: args.amount,
        date: args.date,
        category: args.category,
        description: args.description,
    })?;

    println!("Added expense #{}", expense.id);
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

pub fn handle_list(storage: &Storage, settings: &Settings, args: ListArgs) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let mut expenses = match args.period {
        Some(text) => service.list_for_period(&parse_period(&text)?)?,
        None => service.list()?,
    };
    if let Some(limit) = args.limit {
        expenses.truncate(limit);
    }

    print!("{}", format_expense_table(&expenses, settings));
    Ok(())
}

pub fn handle_show(storage: &Storage, settings: &Settings, id: &str) -> ExpenseResult<()> {
    let expense = ExpenseService::new(storage).get(parse_id(id)?)?;
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

pub fn handle_edit(storage: &Storage, settings: &Settings, args: EditArgs) -> ExpenseResult<()> {
    let id = parse_id(&args.id)?;
    let changes = ExpenseChanges {
        amount: args.amount,
        date: args.date,
        category: args.category,
        description: args.description,
    };

    if changes.is_empty() {
        println!("Nothing to change. Use --amount, --date, --category or --description.");
        return Ok(());
    }

    let expense = ExpenseService::new(storage).edit(id, changes)?;
    println!("Updated expense #{}", expense.id);
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

pub fn handle_delete(storage: &Storage, id: &str) -> ExpenseResult<()> {
    let expense = ExpenseService::new(storage).delete(parse_id(id)?)?;
    println!("Deleted expense: {}", expense);
    Ok(())
}

pub(crate) fn parse_id(text: &str) -> ExpenseResult<ExpenseId> {
    text.parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid expense ID: {}", text)))
}

pub(crate) fn parse_period(text: &str) -> ExpenseResult<Period> {
    Period::parse(text).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid period format: {}. Use YYYY-MM (e.g., 2025-01)",
            e
        ))
    })
}

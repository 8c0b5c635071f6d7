//! CLI commands for reports

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::ExpenseResult;
use crate::reports::MonthlyTotals;
use crate::storage::{write_atomic, Storage};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending per month, as a bar chart
    Monthly {
        /// Export to CSV file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> ExpenseResult<()> {
    match cmd {
        ReportCommands::Monthly { output } => {
            let totals = MonthlyTotals::from_expenses(&storage.expenses.list()?);

            if let Some(path) = output {
                write_atomic(&path, |writer| totals.export_csv(writer))?;
                println!(
                    "Monthly totals ({} months) exported to: {}",
                    totals.len(),
                    path.display()
                );
            } else {
                print!("{}", totals.format_terminal());
            }
        }
    }

    Ok(())
}

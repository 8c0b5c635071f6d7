use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_audit_command, handle_budget_command, handle_delete, handle_edit,
    handle_export_command, handle_import_command, handle_list, handle_report_command,
    handle_show, AddArgs, EditArgs, ListArgs, ReportCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::export::ExportFormat;
use expense_tracker::logging::{self, LogTarget};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Monthly expense tracker with a budget gauge",
    long_about = "Record expenses, watch spending against a monthly budget and \
                  chart totals per month, from the command line or a terminal dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single expense
    Show {
        /// Expense ID
        id: String,
    },

    /// Change fields of an existing expense
    Edit(EditArgs),

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
    },

    /// Show progress against the monthly budget
    Budget {
        /// Month to check (YYYY-MM, default: this month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Reports over stored expenses
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all expenses
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import expenses from a CSV file
    Import {
        /// CSV file with a date,amount,category,description header
        file: PathBuf,
        /// Validate rows without saving anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::Tui,
        Some(_) => LogTarget::Cli,
    };
    logging::init(target);

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Add(args)) => handle_add(&storage, &settings, args)?,
        Some(Commands::List(args)) => handle_list(&storage, &settings, args)?,
        Some(Commands::Show { id }) => handle_show(&storage, &settings, &id)?,
        Some(Commands::Edit(args)) => handle_edit(&storage, &settings, args)?,
        Some(Commands::Delete { id }) => handle_delete(&storage, &id)?,
        Some(Commands::Budget { period }) => handle_budget_command(&storage, &settings, period)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, cmd)?,
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, format, output)?;
        }
        Some(Commands::Import { file, dry_run }) => {
            handle_import_command(&storage, &file, dry_run)?;
        }
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Database:         {}", paths.database_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Monthly budget:  {}",
                settings.monthly_budget.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}

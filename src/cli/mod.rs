//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;

pub use audit::handle_audit_command;
pub use budget::handle_budget_command;
pub use expense::{handle_add, handle_delete, handle_edit, handle_list, handle_show};
pub use expense::{AddArgs, EditArgs, ListArgs};
pub use export::handle_export_command;
pub use import::handle_import_command;
pub use report::{handle_report_command, ReportCommands};

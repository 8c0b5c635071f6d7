//! Storage layer for the expense tracker
//!
//! Expenses live in a single SQLite table; settings and exports go through
//! the atomic JSON/file helpers in `file_io`.

pub mod database;
pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_atomic, write_json_atomic};

use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::models::Expense;

/// Main storage coordinator: the expense store plus the audit log
pub struct Storage {
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Open the on-disk database under `paths`, creating directories as needed
    pub fn new(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        let conn = database::open(&paths.database_file())?;

        Ok(Self {
            expenses: ExpenseRepository::new(conn),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
        })
    }

    /// In-memory store with auditing turned off
    pub fn open_in_memory(paths: ExpensePaths) -> ExpenseResult<Self> {
        let conn = database::open_in_memory()?;

        Ok(Self {
            expenses: ExpenseRepository::new(conn),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: false,
        })
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn log_create(&self, expense: &Expense) -> ExpenseResult<()> {
        self.log(AuditEntry::create(expense))
    }

    pub fn log_update(&self, before: &Expense, after: &Expense) -> ExpenseResult<()> {
        self.log(AuditEntry::update(before, after))
    }

    pub fn log_delete(&self, expense: &Expense) -> ExpenseResult<()> {
        self.log(AuditEntry::delete(expense))
    }

    fn log(&self, entry: AuditEntry) -> ExpenseResult<()> {
        if !self.audit_enabled {
            return Ok(());
        }
        debug!(operation = %entry.operation, id = %entry.expense_id, "audit");
        self.audit.log(&entry)
    }
}

//! JSON export
//!
//! Dumps every expense plus summary metadata, tagged with a schema version so
//! a later reader can tell what it is looking at.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, newest first
    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Summary figures for a reader skimming the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total_amount: Money,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        Ok(Self::from_expenses(storage.expenses.list()?))
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }

    /// Check that an export read back from disk is self-consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(expense.id) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
            if expense.amount.is_negative() {
                return Err(format!("Expense {} has a negative amount", expense.id));
            }
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Metadata lists {} expenses but file contains {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        Ok(())
    }
}

/// Write the full export as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Read a JSON export back, for verification
pub fn import_from_json(json_str: &str) -> ExpenseResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| ExpenseError::Import(e.to_string()))?;
    export.validate().map_err(ExpenseError::Import)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::models::{ExpenseCategory, ExpenseDraft};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_expenses() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::open_in_memory(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()))
                .unwrap();

        for (day, cents, category) in [
            (4, 1250, ExpenseCategory::Food),
            (9, 80_000, ExpenseCategory::Rent),
        ] {
            storage
                .expenses
                .create(&ExpenseDraft::new(
                    NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                    Money::from_cents(cents),
                    category,
                    "",
                ))
                .unwrap();
        }
        (temp_dir, storage)
    }

    #[test]
    fn test_export_reads_back() {
        let (_temp_dir, storage) = storage_with_expenses();
        let mut buffer = Vec::new();

        export_full_json(&storage, &mut buffer, true).unwrap();
        let export = import_from_json(&String::from_utf8(buffer).unwrap()).unwrap();

        assert_eq!(export.expenses.len(), 2);
        assert_eq!(export.metadata.total_amount, Money::from_cents(81_250));
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2024-03-04"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2024-03-09"));
    }

    #[test]
    fn test_amounts_serialize_as_cents() {
        let (_temp_dir, storage) = storage_with_expenses();
        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["expenses"][1]["amount"], 1250);
        assert_eq!(value["expenses"][1]["category"], "Food");
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let (_temp_dir, storage) = storage_with_expenses();
        let mut export = FullExport::from_storage(&storage).unwrap();
        let copy = export.expenses[0].clone();
        export.expenses.push(copy);
        export.metadata.expense_count += 1;

        assert!(export.validate().unwrap_err().contains("Duplicate"));
    }

    #[test]
    fn test_validate_rejects_other_schema() {
        let mut export = FullExport::from_expenses(Vec::new());
        export.schema_version = "0.1".into();
        assert!(export.validate().is_err());
    }
}

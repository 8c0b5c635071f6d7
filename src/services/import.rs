//! CSV import service
//!
//! Reads rows with the header `date,amount,category,description`, validates
//! each one with the same rules as interactive entry, and creates the valid
//! ones. Bad rows are collected with their line number and skipped.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft};
use crate::services::expense::{today, ExpenseInput, ExpenseService};
use crate::storage::Storage;

/// One raw CSV row, before validation
#[derive(Debug, Clone, Deserialize)]
struct ImportRow {
    date: String,
    amount: String,
    category: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<ImportRow> for ExpenseInput {
    fn from(row: ImportRow) -> Self {
        ExpenseInput {
            amount: row.amount,
            date: Some(row.date),
            category: Some(row.category),
            description: row.description,
        }
    }
}

/// A row that could not be imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line in the file, counting the header
    pub line: u64,
    pub message: String,
}

/// Outcome of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Expenses created (empty on a dry run)
    pub imported: Vec<Expense>,
    /// Rows that passed validation
    pub valid_rows: usize,
    pub errors: Vec<RowError>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import from a file on disk
    pub fn import_file(&self, path: &Path, dry_run: bool) -> ExpenseResult<ImportResult> {
        let file = std::fs::File::open(path).map_err(|e| {
            ExpenseError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_from_reader(file, dry_run)
    }

    /// Validate every row, then create the valid ones unless `dry_run`
    pub fn import_from_reader<R: Read>(&self, reader: R, dry_run: bool) -> ExpenseResult<ImportResult> {
        let (drafts, errors) = parse_rows(reader)?;
        let mut result = ImportResult {
            valid_rows: drafts.len(),
            errors,
            ..ImportResult::default()
        };

        if dry_run {
            return Ok(result);
        }

        let service = ExpenseService::new(self.storage);
        for (line, draft) in drafts {
            match service.create(draft) {
                Ok(expense) => result.imported.push(expense),
                Err(e) if e.is_validation() => result.errors.push(RowError {
                    line,
                    message: e.to_string(),
                }),
                Err(e) => return Err(e),
            }
        }

        info!(
            imported = result.imported.len(),
            skipped = result.errors.len(),
            "csv import finished"
        );
        Ok(result)
    }
}

/// Parse and validate all rows without touching the store
fn parse_rows<R: Read>(reader: R) -> ExpenseResult<(Vec<(u64, ExpenseDraft)>, Vec<RowError>)> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in ["date", "amount", "category"] {
        if !headers.iter().any(|h| h.eq_ignore_ascii_case(required)) {
            return Err(ExpenseError::Import(format!(
                "Missing '{}' column; expected header date,amount,category,description",
                required
            )));
        }
    }
    let headers = csv::StringRecord::from(
        headers
            .iter()
            .map(|h| h.to_ascii_lowercase())
            .collect::<Vec<_>>(),
    );

    let today = today();
    let mut drafts = Vec::new();
    let mut errors = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let parsed = record
            .deserialize::<ImportRow>(Some(&headers))
            .map_err(|e| ExpenseError::Import(e.to_string()))
            .and_then(|row| ExpenseInput::from(row).into_draft(today));

        match parsed {
            Ok(draft) => drafts.push((line, draft)),
            Err(e) => {
                warn!(line, error = %e, "skipping csv row");
                errors.push(RowError {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok((drafts, errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::{ExpenseCategory, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    const CSV: &str = "\
date,amount,category,description
2024-01-05,10.00,Food,Groceries
2024-01-06,abc,Food,Broken
2024-01-20,5,transport,
2024-13-01,1,Food,Bad date
2024-02-01,7.25,Hobbies,Unknown category
";

    #[test]
    fn test_import_skips_invalid_rows() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let result = service.import_from_reader(CSV.as_bytes(), false).unwrap();

        assert_eq!(result.imported.len(), 2);
        assert_eq!(result.valid_rows, 2);
        let lines: Vec<u64> = result.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 5, 6]);
        assert!(result.errors[0].message.contains("valid amount"));

        let stored = storage.expenses.list().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].category, ExpenseCategory::Transport);
        assert_eq!(stored[1].amount, Money::from_dollars(10));
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let result = service.import_from_reader(CSV.as_bytes(), true).unwrap();

        assert_eq!(result.valid_rows, 2);
        assert!(result.imported.is_empty());
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let err = service
            .import_from_reader("date,amount\n2024-01-01,3\n".as_bytes(), false)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Import(_)));
    }

    #[test]
    fn test_description_column_optional() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);

        let result = service
            .import_from_reader("Date,Amount,Category\n2024-03-03,2.5,Other\n".as_bytes(), false)
            .unwrap();
        assert_eq!(result.imported.len(), 1);
        assert_eq!(result.imported[0].description, "");
    }

    #[test]
    fn test_import_file_missing() {
        let (temp_dir, storage) = create_test_storage();
        let service = ImportService::new(&storage);
        let err = service
            .import_file(&temp_dir.path().join("nope.csv"), false)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Import(_)));
    }
}

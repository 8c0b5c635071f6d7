//! CLI command for CSV import

use std::path::Path;

use crate::error::ExpenseResult;
use crate::services::ImportService;
use crate::storage::Storage;

pub fn handle_import_command(storage: &Storage, file: &Path, dry_run: bool) -> ExpenseResult<()> {
    let result = ImportService::new(storage).import_file(file, dry_run)?;

    for error in &result.errors {
        eprintln!("Skipped line {}: {}", error.line, error.message);
    }

    if dry_run {
        println!(
            "Dry run: {} rows valid, {} rows would be skipped. Nothing was saved.",
            result.valid_rows,
            result.errors.len()
        );
    } else {
        println!(
            "Imported {} expenses, skipped {} rows.",
            result.imported.len(),
            result.errors.len()
        );
    }

    Ok(())
}

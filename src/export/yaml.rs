//! YAML export
//!
//! Same content as the JSON export, in a form that is easier to read by eye.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Write the full export as YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| ExpenseError::Export(e.to_string());

    writeln!(writer, "# Expense tracker export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Read a YAML export back, for verification
pub fn import_from_yaml(yaml_str: &str) -> ExpenseResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ExpenseError::Import(e.to_string()))?;
    export.validate().map_err(ExpenseError::Import)?;
    Ok(export)
}

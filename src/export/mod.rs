//! Export of stored expenses
//!
//! - CSV: spreadsheet-friendly, and readable by `expenses import`
//! - JSON: machine-readable full export with metadata
//! - YAML: the same export in a human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use clap::ValueEnum;

pub use self::csv::{export_expenses_csv, write_expenses_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Storage;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per expense, importable
    Csv,
    /// Full export with metadata
    Json,
    /// Full export, human-readable
    #[value(alias = "yml")]
    Yaml,
}

impl ExportFormat {
    /// File extension, used for default output names
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }

    /// Write every stored expense to `writer` in this format
    pub fn write<W: Write>(self, storage: &Storage, writer: &mut W) -> ExpenseResult<()> {
        match self {
            ExportFormat::Csv => export_expenses_csv(storage, writer),
            ExportFormat::Json => export_full_json(storage, writer, true),
            ExportFormat::Yaml => export_full_yaml(storage, writer),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(ExpenseError::Export(format!(
                "Unknown format '{}'. Use csv, json or yaml.",
                other
            ))),
        }
    }
}

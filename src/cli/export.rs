//! CLI command for data export

use std::io::Write;
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::ExportFormat;
use crate::storage::{write_atomic, Storage};

/// Export every expense to `output`, or to stdout when no path is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    match output {
        Some(path) => {
            write_atomic(&path, |writer| format.write(storage, writer))?;
            let count = storage.expenses.count()?;
            println!(
                "Exported {} expenses as {} to: {}",
                count,
                format,
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            format.write(storage, &mut handle)?;
            handle
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

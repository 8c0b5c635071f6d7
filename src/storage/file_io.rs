//! File I/O utilities with atomic writes
//!
//! Settings and export files are written to a sibling temp file and renamed
//! into place, so a crash never leaves a half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> ExpenseResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ExpenseError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> ExpenseResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)?;
        writeln!(writer)?;
        Ok(())
    })
}

/// Run `write` against a temp file next to `path`, then rename it into place
///
/// The temp file is removed if `write` or the rename fails.
pub fn write_atomic<P, F>(path: P, write: F) -> ExpenseResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> ExpenseResult<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_and_sync(&temp_path, write).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| ExpenseError::Io(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_sync<F>(temp_path: &Path, write: F) -> ExpenseResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> ExpenseResult<()>,
{
    let file = File::create(temp_path)
        .map_err(|e| ExpenseError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write(&mut writer)?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Io(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

/// `report.csv` -> `report.csv.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

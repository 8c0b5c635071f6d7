//! SQLite connection setup
//!
//! Opens the database file and creates the `expenses` table if needed.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};

/// Schema of the single expenses table
///
/// `date` holds ISO `yyyy-MM-dd` text so that period sums can match on a
/// `YYYY-MM` prefix; `amount` is a REAL in currency units.
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount REAL NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses (date);
";

/// Open (or create) the database at `path` and apply the schema
pub fn open(path: &Path) -> ExpenseResult<Connection> {
    debug!(path = %path.display(), "opening expense database");
    let conn = Connection::open(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the schema applied
pub fn open_in_memory() -> ExpenseResult<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> ExpenseResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

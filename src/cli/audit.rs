//! CLI command for viewing the audit log

use crate::error::ExpenseResult;
use crate::storage::Storage;

pub fn handle_audit_command(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

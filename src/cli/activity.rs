//! Activity (audit log) command

use crate::error::PocketResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_activity_command(storage: &Storage, count: usize) -> PocketResult<()> {
    let entries = storage.audit().read_recent(count)?;
    if entries.is_empty() {
        println!("No activity recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

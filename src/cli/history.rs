//! CLI command for the change history
//!
//! Prints the most recent audit log entries recorded next to the data file.

use std::io::Write;

use crate::audit::AuditLogger;
use crate::config::paths::TrackerPaths;
use crate::display::format_audit_history;
use crate::error::TrackerResult;

/// Default number of entries shown by `history`
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Write the last `limit` audit entries for this data file
pub fn handle_history_command<W: Write>(
    paths: &TrackerPaths,
    limit: usize,
    mut output: W,
) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    write!(output, "{}", format_audit_history(&entries))?;
    Ok(())
}

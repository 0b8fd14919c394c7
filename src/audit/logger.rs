//! Append-only audit log
//!
//! Each entry is one JSON line, appended and flushed as soon as the mutation
//! it describes has been applied. The log is never rewritten.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

use super::entry::AuditEntry;

/// Writes and reads the JSONL audit log next to a ledger file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> TrackerResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| audit_err("Failed to serialize audit entry", e))?;
        line.push('\n');

        if let Some(parent) = self.log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| audit_err("Failed to create log directory", e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| audit_err("Failed to open audit log", e))?;

        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| audit_err("Failed to write audit entry", e))
    }

    /// Every entry, oldest first; a log that does not exist yet is empty
    pub fn read_all(&self) -> TrackerResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(audit_err("Failed to open audit log", e)),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line =
                line.map_err(|e| audit_err(&format!("Failed to read audit log line {}", line_no), e))?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                audit_err(&format!("Failed to parse audit entry at line {}", line_no), e)
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrackerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

fn audit_err(what: &str, cause: impl std::fmt::Display) -> TrackerError {
    TrackerError::Audit(format!("{}: {}", what, cause))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use crate::models::{Expense, ExpenseId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("expenses.audit.log"));
        (logger, temp_dir)
    }

    fn added(id: u64) -> AuditEntry {
        AuditEntry::expense_added(&Expense::new(
            ExpenseId::new(id),
            format!("Expense {}", id),
            Money::from_cents(100),
            "Misc",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ))
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&added(1)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Expense);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Expense 1"));
    }

    #[test]
    fn test_one_line_per_entry() {
        let (logger, _temp) = create_test_logger();
        for id in 1..=3 {
            logger.log(&added(id)).unwrap();
        }

        let raw = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(raw.lines().count(), 3);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for id in 1..=10 {
            logger.log(&added(id)).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["8", "9", "10"]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (logger, _temp) = create_test_logger();
        logger.log(&added(1)).unwrap();
        let mut raw = std::fs::read_to_string(logger.path()).unwrap();
        raw.push_str("\n\n");
        std::fs::write(logger.path(), raw).unwrap();
        logger.log(&added(2)).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_line_reported() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "{oops\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, TrackerError::Audit(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("ledgers").join("expenses.audit.log"));

        logger.log(&added(1)).unwrap();
        assert_eq!(logger.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_appends_across_loggers() {
        let (logger, temp) = create_test_logger();
        logger.log(&added(1)).unwrap();

        let reopened = AuditLogger::new(temp.path().join("expenses.audit.log"));
        reopened.log(&added(2)).unwrap();
        assert_eq!(logger.read_all().unwrap().len(), 2);
    }
}

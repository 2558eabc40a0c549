//! Append-only audit log.
//!
//! One CSV-like line per processed file: `action,checksum,"old","new"`.
//! The file is opened, written, and closed per record so a kill between
//! files never leaves a partially written handle behind.

use crate::Result;
use std::io::Write;
use std::path::Path;

/// A single audit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    /// Lower-case action name (test/move/copy).
    pub action: String,
    /// Hex content hash of the source at record time; empty if unreadable.
    pub checksum: String,
    pub old_path: String,
    pub new_path: String,
}

impl HistoryRecord {
    /// Serialize to the on-disk line format.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},\"{}\",\"{}\"",
            self.action, self.checksum, self.old_path, self.new_path
        )
    }
}

/// Append a record to the audit log, creating the file if needed.
pub fn append(path: &Path, record: &HistoryRecord) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    writeln!(file, "{}", record.to_line())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> HistoryRecord {
        HistoryRecord {
            action: "move".to_string(),
            checksum: "abc123".to_string(),
            old_path: "/in/a.mkv".to_string(),
            new_path: "/in/Show - S01E02 - Pilot.mkv".to_string(),
        }
    }

    #[test]
    fn test_line_format() {
        assert_eq!(
            record().to_line(),
            "move,abc123,\"/in/a.mkv\",\"/in/Show - S01E02 - Pilot.mkv\""
        );
    }

    #[test]
    fn test_append_is_additive() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("history");

        append(&log, &record()).unwrap();
        append(&log, &record()).unwrap();

        let content = std::fs::read_to_string(&log).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().all(|l| l == record().to_line()));
    }
}

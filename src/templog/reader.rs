// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Log directory reader
//!
//! Reads every file of a log directory in file name order. Each file is a
//! space-delimited table with a header line. The first bad row of a file ends
//! the reading of that file: rows before it are kept, the rest are dropped, and
//! one diagnostic is recorded.

use std::path::Path;

use tracing::{debug, warn};

use super::diagnostics::{DiagnosticSink, RowDiagnostic};
use super::entry::{date_prefix, LogEntry};
use crate::error::{HostkeepError, Result};

/// Read all log files in `dir` in lexicographic file name order.
///
/// A missing or unreadable directory, or a file that cannot be read, is an
/// error. Subdirectories are skipped.
pub fn read_log_dir(dir: &Path, sink: &mut dyn DiagnosticSink) -> Result<Vec<LogEntry>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| HostkeepError::log_dir(dir, e))? {
        let entry = entry.map_err(|e| HostkeepError::log_dir(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }
        files.push((entry.file_name(), path));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut entries = Vec::new();
    for (name, path) in files {
        let name = name.to_string_lossy();
        let file_entries = read_log_file(&path, &name, sink)?;
        debug!(
            "Read {} entries from {}",
            file_entries.len(),
            path.display()
        );
        entries.extend(file_entries);
    }

    Ok(entries)
}

/// Read one log file. `file_name` supplies the date prefix.
pub fn read_log_file(
    path: &Path,
    file_name: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<LogEntry>> {
    let bytes = std::fs::read(path).map_err(|e| HostkeepError::log_dir(path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    parse_log_content(file_name, &content, sink)
}

/// Parse the content of one log file.
pub fn parse_log_content(
    file_name: &str,
    content: &str,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<LogEntry>> {
    let prefix = date_prefix(file_name);
    let mut entries = Vec::new();

    // First line is the header.
    for (row, line) in content.lines().skip(1).enumerate() {
        match LogEntry::parse_row(prefix, line) {
            Ok(entry) => entries.push(entry),
            Err(error) => {
                let diagnostic = RowDiagnostic::new(file_name, row, error);
                warn!("{}", diagnostic.message());
                if let Err(e) = sink.record(&diagnostic) {
                    warn!("Could not record diagnostic: {}", e);
                }
                break;
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templog::diagnostics::MemoryDiagnostics;
    use crate::templog::entry::RowError;
    use tempfile::TempDir;

    const HEADER: &str = "time core1 core2";

    #[test]
    fn test_parse_content_skips_header() {
        let content = format!("{}\n120000 +45.0°C +46.0°C\n", HEADER);
        let mut sink = MemoryDiagnostics::new();
        let entries = parse_log_content("20200101", &content, &mut sink).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(sink.is_empty());
    }

    struct FailingSink;

    impl DiagnosticSink for FailingSink {
        fn record(&mut self, _diagnostic: &RowDiagnostic) -> Result<()> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn test_sink_failure_does_not_stop_reading() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("20200101"),
            format!("{}\n120000 +45.0°C +46.0°C\nbroken\n", HEADER),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("20200102"),
            format!("{}\n120000 +50.0°C +51.0°C\n", HEADER),
        )
        .unwrap();

        let entries = read_log_dir(dir.path(), &mut FailingSink).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_content_header_only() {
        let mut sink = MemoryDiagnostics::new();
        let entries = parse_log_content("20200101", HEADER, &mut sink).unwrap();
        assert!(entries.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_parse_content_empty_file() {
        let mut sink = MemoryDiagnostics::new();
        let entries = parse_log_content("20200101", "", &mut sink).unwrap();
        assert!(entries.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_parse_content_aborts_at_first_bad_row() {
        let content = format!(
            "{}\n100000 +40.0°C +41.0°C\n110000 +bad°C +42.0°C\n120000 +43.0°C +44.0°C\n",
            HEADER
        );
        let mut sink = MemoryDiagnostics::new();
        let entries = parse_log_content("20200101", &content, &mut sink).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].core_1_temp, 40.0);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.entries()[0].file, "20200101");
        assert_eq!(sink.entries()[0].row, 1);
        assert!(matches!(
            sink.entries()[0].error,
            RowError::InvalidTemperature { .. }
        ));
    }

    #[test]
    fn test_parse_content_blank_line_aborts() {
        let content = format!("{}\n100000 +40.0°C +41.0°C\n\n120000 +43.0°C +44.0°C\n", HEADER);
        let mut sink = MemoryDiagnostics::new();
        let entries = parse_log_content("20200101", &content, &mut sink).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            sink.entries()[0].error,
            RowError::MissingField { index: 0 }
        );
    }

    #[test]
    fn test_parse_content_crlf() {
        let content = format!("{}\r\n100000 +40.0°C +41.0°C\r\n", HEADER);
        let mut sink = MemoryDiagnostics::new();
        let entries = parse_log_content("20200101", &content, &mut sink).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].core_2_temp, 41.0);
    }

    #[test]
    fn test_read_log_dir_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("20200102"),
            format!("{}\n080000 +50.0°C +51.0°C\n", HEADER),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("20200101"),
            format!("{}\n080000 +40.0°C +41.0°C\n", HEADER),
        )
        .unwrap();

        let mut sink = MemoryDiagnostics::new();
        let entries = read_log_dir(dir.path(), &mut sink).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].core_1_temp, 40.0);
        assert_eq!(entries[1].core_1_temp, 50.0);
    }

    #[test]
    fn test_read_log_dir_skips_subdirectories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("20200100")).unwrap();
        std::fs::write(
            dir.path().join("20200101"),
            format!("{}\n080000 +40.0°C +41.0°C\n", HEADER),
        )
        .unwrap();

        let mut sink = MemoryDiagnostics::new();
        let entries = read_log_dir(dir.path(), &mut sink).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_read_log_dir_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let mut sink = MemoryDiagnostics::new();
        let err = read_log_dir(&missing, &mut sink).unwrap_err();
        assert!(matches!(err, HostkeepError::LogDir { .. }));
    }

    #[test]
    fn test_read_log_file_invalid_utf8_is_a_row_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("20200101");
        let mut bytes = format!("{}\n080000 +40.0°C +41.0°C\n", HEADER).into_bytes();
        bytes.extend_from_slice(b"090000 +4\xff.0\xb0C +41.0\xb0C\n");
        std::fs::write(&path, bytes).unwrap();

        let mut sink = MemoryDiagnostics::new();
        let entries = read_log_file(&path, "20200101", &mut sink).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(sink.len(), 1);
    }
}

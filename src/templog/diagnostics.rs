// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Diagnostics for rows that could not be read
//!
//! The reader hands every aborted file/row pair to a [`DiagnosticSink`]. The
//! sink is owned by the caller, so tests can inspect what was recorded and the
//! CLI can append to a log file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::entry::RowError;
use crate::error::Result;

/// Timestamp prefix written in front of each diagnostic log line
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// A row that aborted the reading of its file
#[derive(Debug, Clone, PartialEq)]
pub struct RowDiagnostic {
    /// File name (not the full path)
    pub file: String,
    /// 0-based index of the data row, header excluded
    pub row: usize,
    /// What went wrong
    pub error: RowError,
}

impl RowDiagnostic {
    pub fn new(file: impl Into<String>, row: usize, error: RowError) -> Self {
        Self {
            file: file.into(),
            row,
            error,
        }
    }

    /// The message body, without timestamp
    pub fn message(&self) -> String {
        format!(
            "Error reading data (file: {}; row: {}): {}",
            self.file, self.row, self.error
        )
    }
}

/// Receives row diagnostics from the log reader
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: &RowDiagnostic) -> Result<()>;
}

/// Discards every diagnostic (tracing output still happens in the reader)
#[derive(Debug, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    fn record(&mut self, _diagnostic: &RowDiagnostic) -> Result<()> {
        Ok(())
    }
}

/// Keeps diagnostics in memory
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: Vec<RowDiagnostic>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RowDiagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn record(&mut self, diagnostic: &RowDiagnostic) -> Result<()> {
        self.entries.push(diagnostic.clone());
        Ok(())
    }
}

/// Append-only text log, one line per diagnostic
#[derive(Debug)]
pub struct DiagnosticLog {
    path: PathBuf,
    file: File,
}

impl DiagnosticLog {
    /// Open (or create) the log for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn record(&mut self, diagnostic: &RowDiagnostic) -> Result<()> {
        let now = Local::now().format(LOG_TIME_FORMAT);
        writeln!(self.file, "{} {}", now, diagnostic.message())?;
        self.file.flush()?;
        Ok(())
    }
}

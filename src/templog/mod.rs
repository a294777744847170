// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CPU core temperature logs
//!
//! Reads per-day log files and reduces them to per-day summaries:
//! - `entry`: row parsing into [`LogEntry`]
//! - `reader`: directory/file reading with per-file abort on the first bad row
//! - `diagnostics`: where aborted rows are reported
//! - `summary`: grouping by day and min/max/mean/median

pub mod diagnostics;
pub mod entry;
pub mod reader;
pub mod summary;

pub use diagnostics::{
    DiagnosticLog, DiagnosticSink, MemoryDiagnostics, NoDiagnostics, RowDiagnostic,
};
pub use entry::{LogEntry, RowError};
pub use reader::{parse_log_content, read_log_dir, read_log_file};
pub use summary::{day_key, partition_by_key, summarize, DataSummary, LogSummary, Statistic};

use std::path::Path;

use crate::error::Result;

/// Read a log directory and summarize it per day.
pub fn summarize_dir(dir: &Path, sink: &mut dyn DiagnosticSink) -> Result<Vec<LogSummary>> {
    let entries = read_log_dir(dir, sink)?;
    Ok(summarize(&entries))
}

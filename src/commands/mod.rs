// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each submodule exposes an `execute` function called from `main` with the
//! parsed arguments and the loaded settings.

pub mod backup;
pub mod links;
pub mod plot;
pub mod settings;
pub mod summary;

use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::templog::{DiagnosticLog, DiagnosticSink, NoDiagnostics};

/// Diagnostic sink for a log-reading command.
///
/// The `--log-file` path wins over `logging.diagnostic_log`; with neither,
/// diagnostics only reach the tracing output.
pub fn open_diagnostics(
    settings: &Settings,
    log_file: Option<&Path>,
) -> Result<Box<dyn DiagnosticSink>> {
    match settings.diagnostic_log(log_file) {
        Some(path) => Ok(Box::new(DiagnosticLog::open(path)?)),
        None => Ok(Box::new(NoDiagnostics)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templog::{RowDiagnostic, RowError};
    use tempfile::TempDir;

    #[test]
    fn test_open_diagnostics_without_path_discards() {
        let mut sink = open_diagnostics(&Settings::default(), None).unwrap();
        let diagnostic = RowDiagnostic::new("20200101", 0, RowError::MissingField { index: 1 });
        assert!(sink.record(&diagnostic).is_ok());
    }

    #[test]
    fn test_open_diagnostics_prefers_cli_path() {
        let dir = TempDir::new().unwrap();
        let configured = dir.path().join("configured.log");
        let cli = dir.path().join("cli.log");

        let mut settings = Settings::default();
        settings.logging.diagnostic_log = Some(configured.clone());

        let mut sink = open_diagnostics(&settings, Some(&cli)).unwrap();
        let diagnostic = RowDiagnostic::new("20200101", 3, RowError::MissingField { index: 2 });
        sink.record(&diagnostic).unwrap();
        drop(sink);

        let written = std::fs::read_to_string(&cli).unwrap();
        assert!(written.contains("(file: 20200101; row: 3)"));
        assert!(!configured.exists());
    }
}

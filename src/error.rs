// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for hostkeep
//!
//! This module defines the crate-level error type. Row-level parse failures in
//! temperature logs live in [`crate::templog::RowError`] since they are recorded
//! rather than propagated.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hostkeep operations
#[derive(Error, Debug)]
pub enum HostkeepError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The temperature log directory (or a file inside it) could not be read
    #[error("Cannot read log path '{}': {source}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External sync tool errors
    #[error("Sync error: {0}")]
    Sync(String),

    /// Symlink creation errors
    #[error("Link error: {0}")]
    Link(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),
}

/// Result type alias for hostkeep operations
pub type Result<T> = std::result::Result<T, HostkeepError>;

impl HostkeepError {
    /// Wrap an IO error with the log path it occurred on.
    pub fn log_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HostkeepError::LogDir {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = HostkeepError::Config("bad config".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_invalid_input() {
        let err = HostkeepError::InvalidInput("bad input".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_error_sync() {
        let err = HostkeepError::Sync("rsync exited with 23".to_string());
        assert!(err.to_string().contains("Sync error"));
        assert!(err.to_string().contains("23"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HostkeepError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_log_dir_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = HostkeepError::log_dir("/var/log/temps", io_err);
        let msg = err.to_string();
        assert!(msg.contains("/var/log/temps"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_log_dir_error_has_source() {
        use std::error::Error as _;
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = HostkeepError::log_dir("/root", io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = HostkeepError::Link("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Link"));
    }

    #[test]
    fn test_result_error() {
        fn test_fn() -> Result<i32> {
            Err(HostkeepError::InvalidInput("test".to_string()))
        }

        assert!(test_fn().is_err());
    }
}

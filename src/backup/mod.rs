// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Directory backup through rsync
//!
//! Builds a validated rsync command line mirroring `src` into `dest` (with
//! deletion of files missing from `src`) and runs it to completion.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::BackupConfig;
use crate::error::{HostkeepError, Result};

/// One sync from a source directory into a destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub src: PathBuf,
    pub dest: PathBuf,
    /// Pass `--verbose` to rsync
    pub verbose: bool,
    /// Pass `--dry-run` to rsync
    pub dry_run: bool,
}

/// Result of a completed rsync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub success: bool,
    /// Exit code, if the process was not killed by a signal
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub output: String,
}

impl SyncRequest {
    pub fn new(src: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            verbose: false,
            dry_run: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Both ends must be existing directories.
    pub fn validate(&self) -> Result<()> {
        for dir in [&self.src, &self.dest] {
            ensure_directory(dir)?;
        }
        Ok(())
    }

    /// Arguments passed to the sync binary, in order.
    pub fn arguments(&self, config: &BackupConfig) -> Vec<OsString> {
        let mut args: Vec<OsString> = config.base_flags.iter().map(OsString::from).collect();
        if self.verbose {
            args.push("--verbose".into());
        }
        if self.dry_run {
            args.push("--dry-run".into());
        }
        args.push(self.src.clone().into_os_string());
        args.push(self.dest.clone().into_os_string());
        args
    }

    /// The full command, ready to run.
    pub fn command(&self, config: &BackupConfig) -> Command {
        let mut command = Command::new(&config.rsync_binary);
        command.args(self.arguments(config));
        command
    }

    /// Validate, then run the sync and collect its output.
    pub fn run(&self, config: &BackupConfig) -> Result<SyncOutcome> {
        self.validate()?;

        let mut command = self.command(config);
        debug!("Running {:?}", command);

        let output = command
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                HostkeepError::Sync(format!("failed to run '{}': {}", config.rsync_binary, e))
            })?;

        // Captured separately, so stderr lines come after all of stdout rather than
        // interleaved as rsync wrote them.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(SyncOutcome {
            success: output.status.success(),
            code: output.status.code(),
            output: text,
        })
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(HostkeepError::InvalidInput(format!(
            "{} is not a directory",
            path.display()
        )))
    }
}

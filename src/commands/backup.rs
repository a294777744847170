// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Backup command

use std::io;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use serde::Serialize;

use crate::backup::{SyncOutcome, SyncRequest};
use crate::cli::args::{BackupArgs, OutputFormat};
use crate::config::Settings;
use crate::error::{HostkeepError, Result};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupInfo<'a> {
    src: String,
    dest: String,
    dry_run: bool,
    success: bool,
    code: Option<i32>,
    output: &'a str,
}

/// Build the sync request from the command-line arguments.
pub fn request(args: &BackupArgs, verbose: u8) -> SyncRequest {
    SyncRequest::new(&args.src, &args.dest)
        .verbose(verbose > 0)
        .dry_run(args.dry_run)
}

/// Turn a finished run into the command's result.
pub fn check_outcome(outcome: &SyncOutcome) -> Result<()> {
    if outcome.success {
        return Ok(());
    }
    Err(HostkeepError::Sync(match outcome.code {
        Some(code) => format!("rsync exited with status {}", code),
        None => "rsync was terminated by a signal".to_string(),
    }))
}

/// Execute the backup command
pub fn execute(
    args: &BackupArgs,
    settings: &Settings,
    format: &OutputFormat,
    verbose: u8,
) -> Result<()> {
    let request = request(args, verbose);
    request.validate()?;
    let json = matches!(format, OutputFormat::Json);

    if !json {
        println!(
            "Sync from {} to {}",
            request.src.display(),
            request.dest.display()
        );
    }

    let outcome = request.run(&settings.backup)?;

    if json {
        let info = BackupInfo {
            src: request.src.display().to_string(),
            dest: request.dest.display().to_string(),
            dry_run: request.dry_run,
            success: outcome.success,
            code: outcome.code,
            output: &outcome.output,
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", outcome.output);
        if outcome.success {
            let mut stdout = io::stdout();
            stdout.execute(SetForegroundColor(Color::Green))?;
            println!("Sync finished");
            stdout.execute(ResetColor)?;
        }
    }

    check_outcome(&outcome)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Symlink farm command

use std::io;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use serde::Serialize;

use crate::cli::args::{LinksArgs, OutputFormat};
use crate::error::Result;
use crate::links::{link_subdir_files, link_subdir_files_with, Link, LinkOutcome};

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Action {
    Created,
    Skipped,
}

#[derive(Serialize)]
struct LinkInfo {
    action: Action,
    name: String,
    target: String,
}

impl From<&LinkOutcome> for LinkInfo {
    fn from(outcome: &LinkOutcome) -> Self {
        let action = match outcome {
            LinkOutcome::Created(_) => Action::Created,
            LinkOutcome::Skipped(_) => Action::Skipped,
        };
        let link = outcome.link();
        Self {
            action,
            name: link.name.display().to_string(),
            target: link.target.display().to_string(),
        }
    }
}

/// The line printed for one outcome.
pub fn outcome_line(outcome: &LinkOutcome) -> String {
    match outcome {
        LinkOutcome::Created(link) => created_line(link),
        LinkOutcome::Skipped(link) => skipped_line(link),
    }
}

fn created_line(link: &Link) -> String {
    format!(
        "Creating link {} -> {}",
        link.name.display(),
        link.target.display()
    )
}

fn skipped_line(link: &Link) -> String {
    format!("{} already exists", link.name.display())
}

fn print_outcome(stdout: &mut io::Stdout, outcome: &LinkOutcome) -> io::Result<()> {
    if let LinkOutcome::Skipped(_) = outcome {
        stdout.execute(SetForegroundColor(Color::Yellow))?;
        println!("{}", outcome_line(outcome));
        stdout.execute(ResetColor)?;
    } else {
        println!("{}", outcome_line(outcome));
    }
    Ok(())
}

/// Execute the links command
pub fn execute(args: &LinksArgs, format: &OutputFormat) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        let report = link_subdir_files(&args.in_dir, &args.out_dir)?;
        let info: Vec<LinkInfo> = report.outcomes.iter().map(LinkInfo::from).collect();
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    // Lines are printed as links are made so a failure still shows what was done.
    let mut stdout = io::stdout();
    let mut print_error = None;
    link_subdir_files_with(&args.in_dir, &args.out_dir, |outcome| {
        if print_error.is_none() {
            print_error = print_outcome(&mut stdout, outcome).err();
        }
    })?;

    match print_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-day temperature summary command

use crate::cli::args::{OutputFormat, SummaryArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::templog::{summarize_dir, DataSummary, LogSummary};

use super::open_diagnostics;

const HEADER: &str = "day         core  min    max    mean   median";

/// Execute the summary command
pub fn execute(args: &SummaryArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let mut sink = open_diagnostics(settings, args.log_file.as_deref())?;
    let summaries = summarize_dir(&args.log_dir, sink.as_mut())?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No temperature data found in {}", args.log_dir.display());
        return Ok(());
    }

    println!("{}", render_table(&summaries));
    Ok(())
}

/// Two table rows per day, one per core.
pub fn render_table(summaries: &[LogSummary]) -> String {
    let mut lines = vec![HEADER.to_string()];
    for summary in summaries {
        lines.push(table_row(&summary.day.to_string(), 1, &summary.core_1_summary));
        lines.push(table_row("", 2, &summary.core_2_summary));
    }
    lines.join("\n")
}

fn table_row(day: &str, core: u8, stats: &DataSummary) -> String {
    format!(
        "{:<10}  {:<4}  {:<5.1}  {:<5.1}  {:<5.1}  {:.1}",
        day, core, stats.min, stats.max, stats.mean, stats.median
    )
}

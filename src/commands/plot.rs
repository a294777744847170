// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Temperature chart command

use std::io;
use std::path::PathBuf;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use serde::Serialize;

use crate::chart::{write_charts, TextChartRenderer};
use crate::cli::args::{OutputFormat, PlotArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::templog::summarize_dir;

use super::open_diagnostics;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotReport {
    pub days: usize,
    pub charts: Vec<PathBuf>,
}

/// Read the logs, summarize them and write the charts.
pub fn plot(args: &PlotArgs, settings: &Settings) -> Result<PlotReport> {
    let mut chart_config = settings.chart.clone();
    if let Some(width) = args.width {
        chart_config.width = width;
    }
    if let Some(height) = args.height {
        chart_config.height = height;
    }

    let mut sink = open_diagnostics(settings, args.log_file.as_deref())?;
    let summaries = summarize_dir(&args.log_dir, sink.as_mut())?;

    let renderer = TextChartRenderer::from_config(&chart_config);
    let charts = write_charts(&renderer, &summaries, &args.out_dir)?;

    Ok(PlotReport {
        days: summaries.len(),
        charts,
    })
}

/// Execute the plot command
pub fn execute(args: &PlotArgs, settings: &Settings, format: &OutputFormat) -> Result<()> {
    let report = plot(args, settings)?;

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut stdout = io::stdout();
    if report.charts.is_empty() {
        stdout.execute(SetForegroundColor(Color::Yellow))?;
        println!("No temperature data found in {}", args.log_dir.display());
        stdout.execute(ResetColor)?;
        return Ok(());
    }

    stdout.execute(SetForegroundColor(Color::Green))?;
    println!(
        "Plotted {} day(s) into {}",
        report.days,
        args.out_dir.display()
    );
    stdout.execute(ResetColor)?;
    for chart in &report.charts {
        println!("  {}", chart.display());
    }

    Ok(())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chart rendering for per-day temperature summaries
//!
//! One chart is written per [`Statistic`], each plotting both cores over the
//! summarized days.

pub mod text;

pub use text::TextChartRenderer;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::templog::{LogSummary, Statistic};

/// Turns summaries into chart documents
pub trait ChartRenderer {
    /// File extension of the rendered document (without the dot)
    fn extension(&self) -> &'static str;

    /// Render the chart of one statistic.
    fn render(&self, summaries: &[LogSummary], statistic: Statistic) -> Result<String>;
}

/// Write one chart per statistic into `out_dir`, creating it if needed.
///
/// Returns the written paths in [`Statistic::ALL`] order. Nothing is written
/// when there are no summaries.
pub fn write_charts(
    renderer: &dyn ChartRenderer,
    summaries: &[LogSummary],
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if summaries.is_empty() {
        return Ok(Vec::new());
    }

    if !out_dir.exists() {
        std::fs::create_dir_all(out_dir)?;
    }

    let mut written = Vec::with_capacity(Statistic::ALL.len());
    for statistic in Statistic::ALL {
        let document = renderer.render(summaries, statistic)?;
        let path = out_dir.join(format!("{}.{}", statistic.chart_stem(), renderer.extension()));
        std::fs::write(&path, document)?;
        info!("Wrote {} chart to {}", statistic, path.display());
        written.push(path);
    }

    Ok(written)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Plain-text line charts drawn with ratatui
//!
//! The chart is drawn into an off-screen [`Buffer`] and the buffer's symbols are
//! flattened into lines of text.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, LegendPosition, Widget};

use super::ChartRenderer;
use crate::config::ChartConfig;
use crate::error::{HostkeepError, Result};
use crate::templog::{LogSummary, Statistic};

/// Smallest chart that still leaves room for axes, labels and legend
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 8;

const DAY_LABEL_FORMAT: &str = "%Y %b %d";

/// Renders summaries as a braille line chart in plain text
#[derive(Debug, Clone)]
pub struct TextChartRenderer {
    width: u16,
    height: u16,
    y_min: f64,
    y_max: f64,
}

impl TextChartRenderer {
    pub fn new(width: u16, height: u16, y_min: f64, y_max: f64) -> Self {
        Self {
            width,
            height,
            y_min,
            y_max,
        }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.width, config.height, config.y_min, config.y_max)
    }

    fn check_dimensions(&self) -> Result<()> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(HostkeepError::Chart(format!(
                "chart size {}x{} is below the minimum {}x{}",
                self.width, self.height, MIN_WIDTH, MIN_HEIGHT
            )));
        }
        if self.y_min.partial_cmp(&self.y_max) != Some(std::cmp::Ordering::Less) {
            return Err(HostkeepError::Chart(format!(
                "y axis bounds [{}, {}] are empty",
                self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    fn y_labels(&self) -> Vec<String> {
        let mid = (self.y_min + self.y_max) / 2.0;
        vec![
            format!("{:.0}", self.y_min),
            format!("{:.0}", mid),
            format!("{:.0}", self.y_max),
        ]
    }
}

impl ChartRenderer for TextChartRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, summaries: &[LogSummary], statistic: Statistic) -> Result<String> {
        self.check_dimensions()?;

        let points = series(summaries, statistic);
        let x_max = day_span(summaries) as f64;

        let datasets = vec![
            Dataset::default()
                .name("Core 1")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .data(&points.core_1),
            Dataset::default()
                .name("Core 2")
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .data(&points.core_2),
        ];

        let chart = Chart::new(datasets)
            .block(Block::bordered().title(format!("Daily {} temperature", statistic)))
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(day_labels(summaries)),
            )
            .y_axis(
                Axis::default()
                    .title("°C")
                    .bounds([self.y_min, self.y_max])
                    .labels(self.y_labels()),
            )
            .legend_position(Some(LegendPosition::TopLeft));

        let area = Rect::new(0, 0, self.width, self.height);
        let mut buffer = Buffer::empty(area);
        chart.render(area, &mut buffer);

        Ok(buffer_to_text(&buffer, area))
    }
}

struct Series {
    core_1: Vec<(f64, f64)>,
    core_2: Vec<(f64, f64)>,
}

/// Chart points, x being the number of days since the first summary.
fn series(summaries: &[LogSummary], statistic: Statistic) -> Series {
    let first = summaries.first().map(|s| s.day);
    let mut core_1 = Vec::with_capacity(summaries.len());
    let mut core_2 = Vec::with_capacity(summaries.len());

    for summary in summaries {
        let x = first
            .map(|f| (summary.day - f).num_days() as f64)
            .unwrap_or_default();
        core_1.push((x, summary.core_1_summary.get(statistic)));
        core_2.push((x, summary.core_2_summary.get(statistic)));
    }

    Series { core_1, core_2 }
}

/// Number of days the x axis spans; at least one so the bounds are never empty.
fn day_span(summaries: &[LogSummary]) -> i64 {
    match (summaries.first(), summaries.last()) {
        (Some(first), Some(last)) => (last.day - first.day).num_days().max(1),
        _ => 1,
    }
}

/// Labels at the start, middle and end of the x axis.
fn day_labels(summaries: &[LogSummary]) -> Vec<String> {
    let Some(first) = summaries.first() else {
        return Vec::new();
    };

    let span = day_span(summaries);
    let mut days = vec![first.day];
    if span >= 2 {
        days.push(first.day + chrono::Duration::days(span / 2));
    }
    days.push(first.day + chrono::Duration::days(span));

    days.iter()
        .map(|d| d.format(DAY_LABEL_FORMAT).to_string())
        .collect()
}

fn buffer_to_text(buffer: &Buffer, area: Rect) -> String {
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Per-day temperature summaries
//!
//! Entries are grouped into contiguous runs that share a calendar day, and
//! each run is reduced to min/max/mean/median per core. Grouping relies on the
//! input already being ordered by timestamp; an out-of-order entry starts a
//! new run for its day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::LogEntry;

/// The four statistics of a run of readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl DataSummary {
    /// Summarize a series of values. Returns `None` for an empty series.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let min = sorted[0];
        let max = sorted[count - 1];
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        Some(Self {
            min,
            max,
            mean,
            median,
        })
    }

    /// Value of the given statistic
    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Min => self.min,
            Statistic::Max => self.max,
            Statistic::Mean => self.mean,
            Statistic::Median => self.median,
        }
    }
}

/// Summaries of both cores for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogSummary {
    pub day: NaiveDate,
    pub core_1_summary: DataSummary,
    pub core_2_summary: DataSummary,
}

/// Selects one field of a [`DataSummary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Min,
    Max,
    Mean,
    Median,
}

impl Statistic {
    pub const ALL: [Statistic; 4] = [
        Statistic::Min,
        Statistic::Max,
        Statistic::Mean,
        Statistic::Median,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Mean => "mean",
            Statistic::Median => "median",
        }
    }

    /// File stem of the chart for this statistic, e.g. `daily_min`
    pub fn chart_stem(&self) -> String {
        format!("daily_{}", self.name())
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Grouping key: the reading's timestamp truncated to midnight.
pub fn day_key(entry: &LogEntry) -> NaiveDate {
    entry.timestamp.date()
}

/// Split `items` into maximal contiguous runs with equal keys.
///
/// Runs come out in first-seen order and are never empty. The slice is
/// assumed to be sorted by `key`; equal keys that are not adjacent end up in
/// separate runs.
pub fn partition_by_key<T, K, F>(items: &[T], key: F) -> Vec<(K, &[T])>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut runs = Vec::new();
    let mut start = 0;

    while start < items.len() {
        let current = key(&items[start]);
        let len = items[start..]
            .iter()
            .take_while(|item| key(item) == current)
            .count();
        runs.push((current, &items[start..start + len]));
        start += len;
    }

    runs
}

/// Summarize time-ordered entries into one [`LogSummary`] per day.
pub fn summarize(entries: &[LogEntry]) -> Vec<LogSummary> {
    partition_by_key(entries, day_key)
        .into_iter()
        .filter_map(|(day, run)| summarize_run(day, run))
        .collect()
}

fn summarize_run(day: NaiveDate, run: &[LogEntry]) -> Option<LogSummary> {
    let core_1: Vec<f64> = run.iter().map(|e| e.core_1_temp).collect();
    let core_2: Vec<f64> = run.iter().map(|e| e.core_2_temp).collect();
    Some(LogSummary {
        day,
        core_1_summary: DataSummary::from_values(&core_1)?,
        core_2_summary: DataSummary::from_values(&core_2)?,
    })
}

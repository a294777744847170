// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Temperature log rows
//!
//! A log row looks like `120000 +45.0°C +46.0°C`: time of day followed by the
//! two core readings. The date comes from the file name.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Combined `YYYYMMDD` + `HHMMSS` timestamp format
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Number of characters in the date prefix of a log file name
pub const DATE_PREFIX_LEN: usize = 8;

/// Number of trailing unit characters on a reading (e.g. `°C`)
const UNIT_SUFFIX_LEN: usize = 2;

/// A single timestamped dual-core temperature reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the reading was taken
    pub timestamp: NaiveDateTime,
    /// Core 1 temperature in °C
    pub core_1_temp: f64,
    /// Core 2 temperature in °C
    pub core_2_temp: f64,
}

/// Why a log row could not be turned into a [`LogEntry`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("missing field {index}")]
    MissingField { index: usize },

    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("invalid temperature '{value}': {reason}")]
    InvalidTemperature { value: String, reason: String },
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, core_1_temp: f64, core_2_temp: f64) -> Self {
        Self {
            timestamp,
            core_1_temp,
            core_2_temp,
        }
    }

    /// Parse one data row of a log file.
    ///
    /// `date_prefix` is the file's `YYYYMMDD` prefix; `fields` are the row's
    /// space-separated fields. Fields past the third are ignored.
    pub fn from_fields(date_prefix: &str, fields: &[&str]) -> Result<Self, RowError> {
        let time = field(fields, 0)?;
        let timestamp = parse_timestamp(date_prefix, time)?;
        let core_1_temp = parse_temperature(field(fields, 1)?)?;
        let core_2_temp = parse_temperature(field(fields, 2)?)?;
        Ok(Self::new(timestamp, core_1_temp, core_2_temp))
    }

    /// Parse a raw row line, splitting on single spaces.
    pub fn parse_row(date_prefix: &str, line: &str) -> Result<Self, RowError> {
        let fields: Vec<&str> = split_fields(line);
        Self::from_fields(date_prefix, &fields)
    }
}

/// Split a row the way a single-space-delimited table does: consecutive
/// spaces produce empty fields, and an empty line has no fields at all.
pub fn split_fields(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(' ').collect()
}

fn field<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, RowError> {
    fields
        .get(index)
        .copied()
        .ok_or(RowError::MissingField { index })
}

/// Build the reading timestamp from the file's date prefix and the row's time.
pub fn parse_timestamp(date_prefix: &str, time: &str) -> Result<NaiveDateTime, RowError> {
    let value = format!("{}{}", date_prefix, time);
    NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT).map_err(|e| {
        RowError::InvalidTimestamp {
            value,
            reason: e.to_string(),
        }
    })
}

/// Parse a reading such as `+45.0°C`, dropping the two-character unit suffix.
pub fn parse_temperature(raw: &str) -> Result<f64, RowError> {
    // Byte offset of the second-to-last char; anything shorter has no number left.
    let number = match raw.char_indices().rev().nth(UNIT_SUFFIX_LEN - 1) {
        Some((idx, _)) => &raw[..idx],
        None => "",
    };

    number
        .parse::<f64>()
        .map_err(|e| RowError::InvalidTemperature {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

/// The `YYYYMMDD` prefix of a log file name.
///
/// Names shorter than the prefix length are returned whole; the timestamp
/// parse then rejects the first row.
pub fn date_prefix(file_name: &str) -> &str {
    match file_name.char_indices().nth(DATE_PREFIX_LEN) {
        Some((idx, _)) => &file_name[..idx],
        None => file_name,
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! hostkeep - small maintenance utilities for a home server.
//!
//! This crate exposes the library used by the `hostkeep` CLI (`src/main.rs`).
//!
//! Architecture highlights:
//! - `templog`: CPU temperature log reading, row diagnostics, per-day summaries
//! - `chart`: chart rendering of the summaries, one file per statistic
//! - `backup`: validated rsync invocation
//! - `links`: flat symlink farm over the files of subdirectories
//! - `config`, `cli`, `commands`: settings, argument parsing, subcommands

pub mod backup;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod links;
pub mod templog;

pub use error::{HostkeepError, Result};

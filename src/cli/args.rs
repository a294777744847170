// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for hostkeep.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// hostkeep - small maintenance utilities for a home server
#[derive(Parser, Debug)]
#[command(name = "hostkeep")]
#[command(version, about = "Maintenance utilities: temperature charts, backups, symlink farms")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plot logged CPU core temperatures
    Plot(PlotArgs),

    /// Print per-day CPU core temperature summaries
    Summary(SummaryArgs),

    /// Back up a directory using rsync
    Backup(BackupArgs),

    /// Link files from subdirectories of IN_DIR into OUT_DIR
    #[command(alias = "ln")]
    Links(LinksArgs),

    /// Manage configuration
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the plot subcommand
#[derive(clap::Args, Debug)]
pub struct PlotArgs {
    /// Directory containing temperature logs
    #[arg(long)]
    pub log_dir: PathBuf,

    /// Output directory
    #[arg(long)]
    pub out_dir: PathBuf,

    /// File where to log errors encountered when reading the data
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Chart width in characters (overrides settings)
    #[arg(long)]
    pub width: Option<u16>,

    /// Chart height in lines (overrides settings)
    #[arg(long)]
    pub height: Option<u16>,
}

/// Arguments for the summary subcommand
#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Directory containing temperature logs
    #[arg(long)]
    pub log_dir: PathBuf,

    /// File where to log errors encountered when reading the data
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the backup subcommand
#[derive(clap::Args, Debug)]
pub struct BackupArgs {
    /// Source directory
    #[arg(long)]
    pub src: PathBuf,

    /// Destination directory
    #[arg(long)]
    pub dest: PathBuf,

    /// Show what would be transferred without changing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Arguments for the links subcommand
#[derive(clap::Args, Debug)]
pub struct LinksArgs {
    /// Subdirectories of IN_DIR will be searched for files
    #[arg(value_name = "IN_DIR")]
    pub in_dir: PathBuf,

    /// Links will be created in OUT_DIR
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,
}

/// Arguments for the settings subcommand
#[derive(clap::Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current configuration
    Show,

    /// Print the settings file path
    Path,

    /// Set a configuration value
    Set {
        /// Setting key (e.g., chart.width, backup.rsync_binary)
        key: String,
        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}

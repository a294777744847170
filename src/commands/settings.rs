// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management command

use std::path::{Path, PathBuf};

use crate::cli::args::{SettingsArgs, SettingsCommands};
use crate::config::Settings;
use crate::error::{HostkeepError, Result};

/// Settings file in effect: `--config` if given, else the default location.
pub fn settings_path(config: Option<&Path>) -> PathBuf {
    config
        .map(Path::to_path_buf)
        .unwrap_or_else(Settings::default_path)
}

/// Apply one `key = value` change.
pub fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "chart.width" => settings.chart.width = parse_value(key, value)?,
        "chart.height" => settings.chart.height = parse_value(key, value)?,
        "chart.y_min" => settings.chart.y_min = parse_value(key, value)?,
        "chart.y_max" => settings.chart.y_max = parse_value(key, value)?,
        "backup.rsync_binary" => settings.backup.rsync_binary = value.to_string(),
        "backup.base_flags" => {
            settings.backup.base_flags = value.split_whitespace().map(String::from).collect();
        }
        "logging.diagnostic_log" => {
            settings.logging.diagnostic_log = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        _ => {
            return Err(HostkeepError::InvalidInput(format!(
                "Unknown setting: {}",
                key
            )));
        }
    }
    Ok(())
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| HostkeepError::InvalidInput(format!("Invalid value for {}: {}", key, value)))
}

/// Execute the settings command
pub fn execute(args: &SettingsArgs, settings: &Settings, config: Option<&Path>) -> Result<()> {
    match &args.command {
        SettingsCommands::Show => {
            let json = serde_json::to_string_pretty(settings)?;
            println!("{}", json);
        }
        SettingsCommands::Path => {
            println!("{}", settings_path(config).display());
        }
        SettingsCommands::Set { key, value } => {
            let mut updated = settings.clone();
            apply_setting(&mut updated, key, value)?;
            updated.validate()?;
            // Merge so keys this version does not know survive.
            updated.save_to(&settings_path(config))?;
            println!("Set {} = {}", key, value);
        }
        SettingsCommands::Reset => {
            let path = settings_path(config);
            Settings::default().save_to_clean(&path)?;
            println!("Settings reset to defaults.");
        }
    }
    Ok(())
}

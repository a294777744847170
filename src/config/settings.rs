// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for hostkeep
//!
//! Handles loading and saving settings from ~/.hostkeep/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod migration;
mod validation;

pub use io::HOME_ENV;

/// Main settings structure, stored in ~/.hostkeep/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Chart rendering settings
    #[serde(default)]
    pub chart: ChartConfig,

    /// rsync invocation settings
    #[serde(default)]
    pub backup: BackupConfig,

    /// Diagnostic logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Text chart dimensions and y axis bounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Chart width in characters
    #[serde(default = "default_chart_width")]
    pub width: u16,

    /// Chart height in lines
    #[serde(default = "default_chart_height")]
    pub height: u16,

    /// Lower y axis bound in °C
    #[serde(default = "default_y_min")]
    pub y_min: f64,

    /// Upper y axis bound in °C
    #[serde(default = "default_y_max")]
    pub y_max: f64,
}

/// External sync tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupConfig {
    /// Program to run (looked up on PATH)
    #[serde(default = "default_rsync_binary")]
    pub rsync_binary: String,

    /// Flags always passed before the optional ones
    #[serde(default = "default_base_flags")]
    pub base_flags: Vec<String>,
}

/// Where row diagnostics go when no `--log-file` is given
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_log: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            y_min: default_y_min(),
            y_max: default_y_max(),
        }
    }
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            rsync_binary: default_rsync_binary(),
            base_flags: default_base_flags(),
        }
    }
}

fn default_chart_width() -> u16 {
    100
}

fn default_chart_height() -> u16 {
    30
}

fn default_y_min() -> f64 {
    20.0
}

fn default_y_max() -> f64 {
    80.0
}

fn default_rsync_binary() -> String {
    "rsync".to_string()
}

fn default_base_flags() -> Vec<String> {
    vec![
        "--archive".to_string(),
        "--delete".to_string(),
        "--human-readable".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_chart_config_default() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 30);
        assert_eq!(config.y_min, 20.0);
        assert_eq!(config.y_max, 80.0);
    }

    #[test]
    fn test_backup_config_default() {
        let config = BackupConfig::default();
        assert_eq!(config.rsync_binary, "rsync");
        assert_eq!(
            config.base_flags,
            vec!["--archive", "--delete", "--human-readable"]
        );
    }

    #[test]
    fn test_logging_config_default() {
        assert!(LoggingConfig::default().diagnostic_log.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"chart": {"width": 120}}"#).unwrap();
        assert_eq!(settings.chart.width, 120);
        assert_eq!(settings.chart.height, 30);
        assert_eq!(settings.backup, BackupConfig::default());
    }

    #[test]
    fn test_settings_load_from_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_settings.json");

        let mut settings = Settings::default();
        settings.chart.height = 40;
        settings.logging.diagnostic_log = Some(PathBuf::from("/var/log/hostkeep.log"));

        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.chart.height, 40);
        assert_eq!(
            loaded.logging.diagnostic_log,
            Some(PathBuf::from("/var/log/hostkeep.log"))
        );
    }

    #[test]
    fn test_settings_save_preserves_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"chart": {"width": 90, "palette": "mono"}, "extra": 1}"#)
            .unwrap();

        let mut settings = Settings::load_from(&path).unwrap();
        settings.chart.width = 110;
        settings.save_to(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["chart"]["width"], 110);
        assert_eq!(raw["chart"]["palette"], "mono");
        assert_eq!(raw["extra"], 1);
    }

    #[test]
    fn test_settings_save_clean_drops_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"extra": 1}"#).unwrap();

        Settings::default().save_to_clean(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.get("extra").is_none());
    }

    #[test]
    fn test_settings_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir
            .path()
            .join("nested")
            .join("dir")
            .join("settings.json");

        Settings::default().save_to(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_settings_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_default_path() {
        let path = Settings::default_path();
        assert!(path.ends_with("settings.json"));
    }
}

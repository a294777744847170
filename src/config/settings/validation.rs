// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::cmp::Ordering;
use std::path::Path;

use crate::chart::text::{MIN_HEIGHT, MIN_WIDTH};
use crate::error::{HostkeepError, Result};

use super::Settings;

impl Settings {
    /// Reject settings no command could run with.
    pub fn validate(&self) -> Result<()> {
        if self.chart.width < MIN_WIDTH || self.chart.height < MIN_HEIGHT {
            return Err(HostkeepError::Config(format!(
                "chart size {}x{} is below the minimum {}x{}",
                self.chart.width, self.chart.height, MIN_WIDTH, MIN_HEIGHT
            )));
        }

        if self.chart.y_min.partial_cmp(&self.chart.y_max) != Some(Ordering::Less) {
            return Err(HostkeepError::Config(format!(
                "chart.y_min ({}) must be below chart.y_max ({})",
                self.chart.y_min, self.chart.y_max
            )));
        }

        if self.backup.rsync_binary.trim().is_empty() {
            return Err(HostkeepError::Config(
                "backup.rsync_binary must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Diagnostic log to use: the command-line path wins over the configured one.
    pub fn diagnostic_log<'a>(&'a self, cli_path: Option<&'a Path>) -> Option<&'a Path> {
        cli_path.or(self.logging.diagnostic_log.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_chart() {
        let mut settings = Settings::default();
        settings.chart.width = 5;
        assert!(matches!(
            settings.validate(),
            Err(HostkeepError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_y_bounds() {
        let mut settings = Settings::default();
        settings.chart.y_min = 90.0;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("y_min"));
    }

    #[test]
    fn test_validate_rejects_nan_y_bounds() {
        let mut settings = Settings::default();
        settings.chart.y_max = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_rsync_binary() {
        let mut settings = Settings::default();
        settings.backup.rsync_binary = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_diagnostic_log_priority() {
        let mut settings = Settings::default();
        assert!(settings.diagnostic_log(None).is_none());

        settings.logging.diagnostic_log = Some(PathBuf::from("/configured.log"));
        assert_eq!(
            settings.diagnostic_log(None),
            Some(Path::new("/configured.log"))
        );
        assert_eq!(
            settings.diagnostic_log(Some(Path::new("/cli.log"))),
            Some(Path::new("/cli.log"))
        );
    }
}

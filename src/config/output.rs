//! Output configuration module.
//!
//! This module defines where benchmark reports are written.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report output locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving every report file
    pub dir: PathBuf,

    /// CSV table file name
    pub csv_file: String,

    /// JSON summary file name
    pub json_file: String,

    /// SVG chart file name
    pub plot_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("results"),
            csv_file: "benchmark_results.csv".to_string(),
            json_file: "benchmark_results.json".to_string(),
            plot_file: "tst_performance_plot.svg".to_string(),
        }
    }
}

impl OutputConfig {
    /// Set the output directory.
    pub fn with_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dir = dir.into();
        self
    }

    /// Path of the CSV table.
    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }

    /// Path of the JSON summary.
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(&self.json_file)
    }

    /// Path of the SVG chart.
    pub fn plot_path(&self) -> PathBuf {
        self.dir.join(&self.plot_file)
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "output.dir cannot be empty".to_string(),
            ));
        }

        for (key, name) in [
            ("output.csv_file", &self.csv_file),
            ("output.json_file", &self.json_file),
            ("output.plot_file", &self.plot_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

//! Benchmark report output.
//!
//! A run produces three files in the configured output directory: a CSV table,
//! a JSON summary and an SVG line chart. The CSV header matches the columns
//! downstream notebooks already read.

pub mod plot;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::benchmark::BenchmarkSample;
use crate::config::OutputConfig;
use crate::error::report::ReportError;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Header row of the CSV table.
pub const CSV_HEADER: &str = "Sample Size,Insert Time (s),Search Time (s)";

/// Writes samples as a CSV table.
pub fn write_csv(samples: &[BenchmarkSample], path: &Path) -> ReportResult<()> {
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{CSV_HEADER}").map_err(write_err)?;
    for sample in samples {
        writeln!(
            out,
            "{},{},{}",
            sample.sample_size, sample.insert_secs, sample.search_secs
        )
        .map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

/// Writes samples as a pretty-printed JSON array.
pub fn write_json(samples: &[BenchmarkSample], path: &Path) -> ReportResult<()> {
    let json = serde_json::to_string_pretty(samples)?;
    fs::write(path, json).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Paths of the files written by [`ReportWriter::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// CSV table
    pub csv: PathBuf,
    /// JSON summary
    pub json: PathBuf,
    /// SVG chart
    pub plot: PathBuf,
}

/// Writes the full report set for a benchmark run.
#[derive(Debug, Clone, Default)]
pub struct ReportWriter {
    config: OutputConfig,
}

impl ReportWriter {
    /// Creates a writer with the given output configuration.
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Creates the output directory and writes the CSV, JSON and SVG files.
    ///
    /// # Returns
    ///
    /// * `Ok(ReportPaths)` - Where each file was written.
    /// * `Err(ReportError)` - If there are no samples or a file cannot be written.
    pub fn write(&self, samples: &[BenchmarkSample]) -> ReportResult<ReportPaths> {
        if samples.is_empty() {
            return Err(ReportError::NoSamples);
        }

        fs::create_dir_all(&self.config.dir).map_err(|source| ReportError::CreateDir {
            path: self.config.dir.clone(),
            source,
        })?;

        let paths = ReportPaths {
            csv: self.config.csv_path(),
            json: self.config.json_path(),
            plot: self.config.plot_path(),
        };

        write_csv(samples, &paths.csv)?;
        tracing::info!("Benchmark results saved to {}", paths.csv.display());

        write_json(samples, &paths.json)?;
        tracing::info!("Benchmark summary saved to {}", paths.json.display());

        plot::write_svg(samples, plot::DEFAULT_TITLE, &paths.plot)?;
        tracing::info!("Performance plot saved to {}", paths.plot.display());

        Ok(paths)
    }
}

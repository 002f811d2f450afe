//! Report error module.
//!
//! This module defines error types that may occur while writing benchmark reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing benchmark reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error when there are no samples to report.
    #[error("No benchmark samples to report")]
    NoSamples,

    /// Error when the output directory cannot be created.
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        /// The directory being created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when a report file cannot be written.
    #[error("Failed to write report {path}: {source}")]
    Write {
        /// The file being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when samples cannot be serialized.
    #[error("Failed to serialize benchmark samples: {0}")]
    Serialize(#[from] serde_json::Error),
}

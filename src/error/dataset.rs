//! Dataset error module.
//!
//! This module defines error types that may occur while loading word lists.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading word lists.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Error when a word list file does not exist.
    #[error("Word list not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when a word list cannot be read.
    #[error("Failed to read word list {path}: {source}")]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

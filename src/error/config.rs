//! Configuration error module.
//!
//! Errors raised while layering `config/default.toml`, an optional `--config`
//! file and `LANAI__` environment overrides, and while validating the
//! `[data]`, `[benchmark]`, `[output]`, `[tree]` and `[log]` sections.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or validating a [`LanaiConfig`](crate::config::LanaiConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file could not be read as TOML/JSON/YAML, has an unsupported
    /// extension, or does not deserialize into the known sections.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// A section is structurally invalid, such as an empty sample size list,
    /// an empty word list path or an unknown log level.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A numeric setting is outside its allowed range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// Dotted key, e.g. `benchmark.sample_sizes`
        key: String,
        /// What the value must satisfy
        message: String,
    },
}

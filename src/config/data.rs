//! Data configuration module.
//!
//! This module defines where the harness finds its word lists.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    /// Words inserted into the tree for the correctness pass
    pub insert_words: PathBuf,

    /// Words that must not be found after the correctness pass
    pub not_insert_words: PathBuf,

    /// Large word list sampled by the benchmark
    pub corpus: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            insert_words: PathBuf::from("data/insert_words.txt"),
            not_insert_words: PathBuf::from("data/not_insert_words.txt"),
            corpus: PathBuf::from("data/corncob_lowercase.txt"),
        }
    }
}

impl Validate for DataConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (key, path) in [
            ("data.insert_words", &self.insert_words),
            ("data.not_insert_words", &self.not_insert_words),
            ("data.corpus", &self.corpus),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{key} cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

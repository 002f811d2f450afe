//! Benchmark configuration module.
//!
//! This module defines the sample sizes and corpus ordering used by the
//! insert/search timing runs.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Sample sizes measured when none are configured.
pub const DEFAULT_SAMPLE_SIZES: [usize; 8] = [500, 1000, 1500, 2000, 2500, 3000, 4000, 5000];

/// Benchmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Number of corpus words inserted and searched per timed batch
    pub sample_sizes: Vec<usize>,

    /// Whether to shuffle the corpus before sampling, to approximate
    /// average-case insertion order
    pub shuffle: bool,

    /// Seed for the shuffle (None for a fresh random order every run)
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            shuffle: true,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    /// Set the sample sizes.
    pub fn with_sample_sizes(mut self, sample_sizes: Vec<usize>) -> Self {
        self.sample_sizes = sample_sizes;
        self
    }

    /// Set whether the corpus is shuffled.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Validate for BenchmarkConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.sample_sizes.is_empty() {
            return Err(ConfigError::ValidationError(
                "benchmark.sample_sizes cannot be empty".to_string(),
            ));
        }

        if self.sample_sizes.contains(&0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "benchmark.sample_sizes".to_string(),
                message: "every sample size must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

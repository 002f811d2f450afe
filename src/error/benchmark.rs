//! Benchmark error module.
//!
//! This module defines error types that may occur while preparing a benchmark run.

use thiserror::Error;

/// Errors that can occur while preparing a benchmark run.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BenchmarkError {
    /// Error when the corpus holds no words.
    #[error("Benchmark corpus is empty")]
    EmptyCorpus,

    /// Error when every requested sample size exceeds the corpus.
    #[error("No sample size in {requested:?} fits a corpus of {available} words")]
    NoUsableSampleSizes {
        /// The sample sizes that were requested
        requested: Vec<usize>,
        /// Number of words available in the corpus
        available: usize,
    },
}

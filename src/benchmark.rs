//! Insert/search timing over increasing sample sizes.
//!
//! Each sample size gets a fresh tree built from the first `size` words of the
//! corpus. The insert batch and the search batch over the same words are
//! timed separately with a monotonic clock.

use std::hint::black_box;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::BenchmarkConfig;
use crate::data_structures::TernarySearchTree;
use crate::error::benchmark::BenchmarkError;

/// Result type for benchmark operations.
pub type BenchmarkResult<T> = Result<T, BenchmarkError>;

/// Timing of one sample size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSample {
    /// Number of words inserted and searched
    pub sample_size: usize,

    /// Wall time of the insert batch, in seconds
    pub insert_secs: f64,

    /// Wall time of the search batch, in seconds
    pub search_secs: f64,

    /// Distinct words stored after the insert batch
    pub words_stored: usize,

    /// Nodes allocated after the insert batch
    pub nodes: usize,
}

/// Keeps the requested sample sizes that fit in `available` words, in order.
///
/// # Returns
///
/// * `Ok(Vec<usize>)` - The usable sizes.
/// * `Err(BenchmarkError)` - If no requested size fits.
pub fn usable_sample_sizes(requested: &[usize], available: usize) -> BenchmarkResult<Vec<usize>> {
    let sizes: Vec<usize> = requested
        .iter()
        .copied()
        .filter(|&size| size <= available)
        .collect();

    if sizes.is_empty() {
        return Err(BenchmarkError::NoUsableSampleSizes {
            requested: requested.to_vec(),
            available,
        });
    }

    if sizes.len() < requested.len() {
        tracing::warn!(
            available,
            skipped = requested.len() - sizes.len(),
            "Skipping sample sizes larger than the corpus"
        );
    }

    Ok(sizes)
}

/// Shuffles `words` in place. A seeded shuffle is reproducible.
pub fn shuffle_words(words: &mut [String], seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    words.shuffle(&mut rng);
}

/// Times insert and search batches for each sample size.
///
/// Sizes larger than `words` are clamped to the word count.
pub fn run_benchmark<S: AsRef<str>>(words: &[S], sample_sizes: &[usize]) -> Vec<BenchmarkSample> {
    sample_sizes
        .iter()
        .map(|&size| {
            let sample = &words[..size.min(words.len())];
            let mut tree = TernarySearchTree::new();

            let start = Instant::now();
            for word in sample {
                tree.insert(word);
            }
            let insert_secs = start.elapsed().as_secs_f64();

            let start = Instant::now();
            for word in sample {
                black_box(tree.search(word));
            }
            let search_secs = start.elapsed().as_secs_f64();

            tracing::debug!(
                sample_size = size,
                insert_secs,
                search_secs,
                nodes = tree.node_count(),
                "Measured sample"
            );

            BenchmarkSample {
                sample_size: size,
                insert_secs,
                search_secs,
                words_stored: tree.size(),
                nodes: tree.node_count(),
            }
        })
        .collect()
}

/// Runs a configured benchmark over a corpus.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Selects usable sample sizes, optionally shuffles the corpus, and times
    /// every sample size.
    ///
    /// # Arguments
    ///
    /// * `corpus` - The words to sample from. Consumed because it may be shuffled.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<BenchmarkSample>)` - One sample per usable size.
    /// * `Err(BenchmarkError)` - If the corpus is empty or no size fits.
    pub fn run(&self, mut corpus: Vec<String>) -> BenchmarkResult<Vec<BenchmarkSample>> {
        if corpus.is_empty() {
            return Err(BenchmarkError::EmptyCorpus);
        }

        let sizes = usable_sample_sizes(&self.config.sample_sizes, corpus.len())?;

        if self.config.shuffle {
            shuffle_words(&mut corpus, self.config.seed);
        }

        tracing::info!(sample_sizes = ?sizes, corpus = corpus.len(), "Starting benchmark");
        let samples = run_benchmark(&corpus, &sizes);
        tracing::info!(samples = samples.len(), "Benchmarking complete");

        Ok(samples)
    }
}

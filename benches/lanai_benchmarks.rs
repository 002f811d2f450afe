//! Lanai Benchmarks
//!
//! Criterion benchmarks for the ternary search tree. These complement the
//! `lanai bench` report, which times whole batches once per sample size, with
//! statistically sampled measurements of the same operations.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};
use lanai_lib::benchmark::shuffle_words;
use lanai_lib::data_structures::TernarySearchTree;
use std::time::Duration;

const SIZES: [usize; 3] = [500, 2500, 5000];

/// Pseudo-words with realistic shared prefixes, in a fixed shuffled order.
fn corpus(size: usize) -> Vec<String> {
    const SYLLABLES: [&str; 8] = ["ka", "lo", "ma", "ni", "pu", "he", "wa", "i"];
    let mut words: Vec<String> = (0..size)
        .map(|mut n| {
            let mut word = String::new();
            loop {
                word.push_str(SYLLABLES[n % SYLLABLES.len()]);
                n /= SYLLABLES.len();
                if n == 0 {
                    break;
                }
            }
            word
        })
        .collect();
    shuffle_words(&mut words, Some(0x1a4a1));
    words
}

/// Benchmark building a tree from scratch
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("tst_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in SIZES {
        let words = corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter_batched(
                TernarySearchTree::new,
                |mut tree| {
                    for word in words {
                        tree.insert(black_box(word));
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark lookups of stored and absent words
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("tst_search");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in SIZES {
        let words = corpus(size);
        let tree: TernarySearchTree = words.iter().collect();
        let misses: Vec<String> = words.iter().map(|w| format!("{w}x")).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("hit", size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(tree.search(word));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &misses, |b, misses| {
            b.iter(|| {
                for word in misses {
                    black_box(tree.search(word));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("starts_with", size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(tree.starts_with(&word[..1]));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark ordered enumeration
fn bench_get_all_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("tst_get_all_words");

    for size in SIZES {
        let tree: TernarySearchTree = corpus(size).into_iter().collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("collect", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.get_all_words()));
        });
        group.bench_with_input(BenchmarkId::new("iter_count", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.iter().count()));
        });
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_insert, bench_search, bench_get_all_words
}

criterion_main!(benches);

//! Lanai - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs the correctness pass
//! and the insert/search benchmark of the ternary search tree.

use clap::{Parser, Subcommand};
use lanai_lib::benchmark::BenchmarkRunner;
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig};
use lanai_lib::data_structures::TernarySearchTree;
use lanai_lib::dataset::{load_words, Dataset};
use lanai_lib::error::{
    ErrorContext, ErrorReporter, LanaiError, LanaiResult, TracingErrorReporter,
};
use lanai_lib::report::ReportWriter;
use lanai_lib::verify::verify_tree;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Verify, benchmark and write reports
    Run,

    /// Insert the word list and verify lookups
    Verify {
        /// Print every stored word after verification
        #[clap(long)]
        list: bool,
    },

    /// Benchmark the corpus and write reports
    Bench,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_target(false);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Inserts the word list, checks every lookup, and returns the tree.
fn verify(config: &LanaiConfig, dataset: &Dataset) -> TernarySearchTree {
    let mut tree = TernarySearchTree::with_config(config.tree.clone());
    info!("Inserting {} words into the TST...", dataset.insert_words.len());
    tree.extend(&dataset.insert_words);
    info!("Insertion complete.");

    let report = verify_tree(&tree, &dataset.insert_words, &dataset.not_insert_words);
    for word in &report.missing {
        warn!(word = %word, "Inserted word not found");
    }
    for word in &report.false_positives {
        warn!(word = %word, "Word found that was never inserted");
    }

    if report.is_success() {
        info!(checked = report.checked, "All inserted words found correctly.");
    } else {
        warn!(
            missing = report.missing.len(),
            false_positives = report.false_positives.len(),
            "Verification failed"
        );
    }

    tree
}

/// Benchmarks the corpus and writes every report file.
fn bench(config: &LanaiConfig, corpus: Vec<String>) -> LanaiResult<()> {
    let samples = BenchmarkRunner::new(config.benchmark.clone()).run(corpus)?;
    ReportWriter::new(config.output.clone()).write(&samples)?;
    Ok(())
}

fn load_dataset(config: &LanaiConfig) -> LanaiResult<Dataset> {
    Dataset::load(&config.data).map_err(|e| {
        for path in Dataset::expected_paths(&config.data) {
            warn!("Expected word list at: {}", path.display());
        }
        LanaiError::from(e)
    })
}

fn gen_config(output: &Path) -> LanaiResult<()> {
    let default_config = LanaiConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {}", output.display());
    Ok(())
}

fn execute(command: Command, config: &LanaiConfig) -> LanaiResult<()> {
    match command {
        Command::Run => {
            let dataset = load_dataset(config)?;

            info!("--- Correctness Testing ---");
            let tree = verify(config, &dataset);

            info!("--- Performance Benchmarking ---");
            bench(config, dataset.corpus)?;

            info!(size = tree.size(), nodes = tree.node_count(), "Final tree");
            Ok(())
        }
        Command::Verify { list } => {
            let dataset = load_dataset(config)?;
            let tree = verify(config, &dataset);
            if list {
                for word in &tree {
                    println!("{word}");
                }
            }
            info!(size = tree.size(), "Size");
            Ok(())
        }
        Command::Bench => {
            let corpus = load_words(&config.data.corpus)?;
            bench(config, corpus)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Logging depends on the configuration, so failures up to this point go to stderr.
    let config = match ConfigLoader::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };
    if let Err(e) = init_logging(&config.log) {
        eprintln!("{}", ErrorContext::new(e, "logging"));
        process::exit(1);
    }

    let command = args.command.unwrap_or(Command::Run);
    let component = format!("{command:?}");
    if let Err(error) = execute(command, &config) {
        TracingErrorReporter.report(&ErrorContext::new(error, component));
        process::exit(1);
    }
}

//! Word list loading.
//!
//! Word lists are UTF-8 text with one word per line. Surrounding whitespace is
//! trimmed and blank lines are skipped, so every loaded word is non-empty.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::config::DataConfig;
use crate::error::dataset::DatasetError;

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Reads one word per line from any buffered source.
///
/// # Arguments
///
/// * `reader` - The source to read from.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The trimmed, non-empty lines in source order.
/// * `Err(io::Error)` - If the source could not be read or is not valid UTF-8.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Loads a word list from a file.
///
/// # Arguments
///
/// * `path` - Path of the word list.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The words of the file.
/// * `Err(DatasetError)` - If the file is missing or unreadable.
pub fn load_words<P: AsRef<Path>>(path: P) -> DatasetResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    let words = read_words(BufReader::new(file)).map_err(|e| read_error(path, e))?;

    tracing::debug!(path = %path.display(), words = words.len(), "Loaded word list");
    Ok(words)
}

fn read_error(path: &Path, source: io::Error) -> DatasetError {
    if source.kind() == io::ErrorKind::NotFound {
        DatasetError::FileNotFound(path.to_path_buf())
    } else {
        DatasetError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The three word lists used by a full harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Words inserted for the correctness pass
    pub insert_words: Vec<String>,

    /// Words expected to be absent after the correctness pass
    pub not_insert_words: Vec<String>,

    /// Word list sampled by the benchmark
    pub corpus: Vec<String>,
}

impl Dataset {
    /// Loads every list named in `config`.
    ///
    /// Fails on the first list that cannot be loaded; nothing is partially returned.
    pub fn load(config: &DataConfig) -> DatasetResult<Self> {
        Ok(Self {
            insert_words: load_words(&config.insert_words)?,
            not_insert_words: load_words(&config.not_insert_words)?,
            corpus: load_words(&config.corpus)?,
        })
    }

    /// Paths named in `config`, for diagnostics when loading fails.
    pub fn expected_paths(config: &DataConfig) -> [PathBuf; 3] {
        [
            config.insert_words.clone(),
            config.not_insert_words.clone(),
            config.corpus.clone(),
        ]
    }
}

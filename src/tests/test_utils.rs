//! Test utilities and fixtures for Lanai.
//!
//! This module provides reusable test components: temporary directories for
//! word lists and reports, and proptest strategies for words.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// Maximum number of words in a generated list.
const MAX_LIST_LENGTH: usize = 64;

/// Create a temporary directory for test files.
///
/// # Returns
///
/// A result containing the temporary directory or an error if creation fails.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for words drawn from a small alphabet.
///
/// A narrow alphabet makes shared prefixes and sideways branches common,
/// which is where ternary search tree bugs live. Words may be empty.
pub fn word_strategy() -> BoxedStrategy<String> {
    let letter = prop_oneof![Just('a'), Just('b'), Just('c'), Just('é')];
    proptest::collection::vec(letter, 0..MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for lists of words, duplicates included.
pub fn word_list_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..MAX_LIST_LENGTH).boxed()
}

/// Test fixture for harness tests that need files on disk.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
        })
    }

    /// Path of `name` inside the fixture directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `contents` to `name` inside the fixture directory.
    ///
    /// # Returns
    ///
    /// A result containing the path to the file or an error.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write one word per line to `name` inside the fixture directory.
    pub fn write_word_file(&self, name: &str, words: &[&str]) -> std::io::Result<PathBuf> {
        let mut contents = words.join("\n");
        contents.push('\n');
        self.create_file(name, contents)
    }
}

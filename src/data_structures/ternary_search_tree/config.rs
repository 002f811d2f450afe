// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the ternary search tree.

use serde::{Deserialize, Serialize};

/// Configuration options for the [`TernarySearchTree`](super::TernarySearchTree).
///
/// The defaults store words exactly as given, with no length limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TernarySearchTreeConfig {
    /// Whether words are compared case-sensitively. When disabled every word
    /// is lower-cased before it is stored or looked up.
    pub case_sensitive: bool,

    /// Maximum word length in characters accepted by `try_insert`
    pub max_word_length: Option<usize>,
}

impl TernarySearchTreeConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: true
    /// - max_word_length: None (unbounded)
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            max_word_length: None,
        }
    }

    /// Set whether words are compared case-sensitively.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum accepted word length, in characters.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = Some(max_word_length);
        self
    }
}

impl Default for TernarySearchTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

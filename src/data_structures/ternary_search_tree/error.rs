// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the ternary search tree.
//!
//! Only the checked insertion path reports errors. Lookups never fail: an
//! absent word or prefix is an ordinary `false`.

/// Errors that can occur when inserting into a [`TernarySearchTree`](super::TernarySearchTree).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TstError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyKey,

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{key}' exceeds maximum length of {max_length} characters")]
    KeyTooLong {
        /// The word that was too long.
        key: String,
        /// The maximum allowed length, in characters.
        max_length: usize,
    },
}

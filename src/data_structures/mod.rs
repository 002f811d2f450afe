//! Data structures for Lanai.
//!
//! Holds the ternary search tree that the benchmark harness measures. The tree
//! has no unsafe code and walks its nodes with loops and explicit stacks, so
//! operations on a long word never grow the call stack. Enumeration is
//! lexicographic by code point.

pub mod ternary_search_tree;

// Re-export common data structures
pub use ternary_search_tree::{
    TernarySearchTree, TernarySearchTreeConfig, TstError, TstResult, Words,
};

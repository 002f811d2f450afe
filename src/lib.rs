//! Lanai Library
//!
//! This library contains a ternary search tree word set and the harness that
//! measures it: word list loading, a correctness pass, timed insert/search
//! batches, and CSV/JSON/SVG reports. The library is designed to be used by
//! the binary crate, but the tree can also be used on its own as a dependency.
//!
//! # Architecture
//!
//! - [`data_structures`] holds the tree. It has no I/O and no global state.
//! - [`dataset`], [`verify`], [`benchmark`] and [`report`] only use the tree's
//!   public API and treat it as an opaque ordered string set.
//! - [`config`] and [`error`] provide layered configuration and typed errors
//!   for the harness.

// Re-export public modules
pub mod benchmark;
pub mod config;
pub mod data_structures;
pub mod dataset;
pub mod error;
pub mod report;
pub mod verify;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::TernarySearchTree;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

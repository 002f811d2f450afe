//! Test modules for Lanai.
//!
//! This module contains the cross-component test suites:
//! - Property-based tests for the ternary search tree using proptest
//! - Configuration loading and validation tests
//! - Error type and reporting tests
//! - Harness tests for word loading, verification, benchmarking and reports
//! - Shared fixtures and strategies
//!
//! Unit tests for a single type stay next to that type.

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, word_list_strategy, word_strategy, TestFixture};

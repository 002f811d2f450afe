//! Correctness pass over a populated tree.

use crate::data_structures::TernarySearchTree;
use std::collections::HashSet;

/// Outcome of [`verify_tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Number of lookups performed
    pub checked: usize,

    /// Expected words that `search` did not find
    pub missing: Vec<String>,

    /// Unexpected words that `search` did find
    pub false_positives: Vec<String>,
}

impl VerificationReport {
    /// Returns `true` when every expected word was found and no unexpected word was.
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.false_positives.is_empty()
    }
}

/// Checks that every word in `expected` is stored and no word in `unexpected` is.
///
/// A word listed in both slices is treated as expected only, so overlapping
/// lists do not produce spurious false positives.
pub fn verify_tree<S: AsRef<str>>(
    tree: &TernarySearchTree,
    expected: &[S],
    unexpected: &[S],
) -> VerificationReport {
    let mut report = VerificationReport::default();

    for word in expected {
        let word = word.as_ref();
        report.checked += 1;
        let found = tree.search(word);
        tracing::trace!(word, found, "Verified inserted word");
        if !found {
            report.missing.push(word.to_string());
        }
    }

    let expected_set: HashSet<&str> = expected.iter().map(AsRef::as_ref).collect();
    for word in unexpected {
        let word = word.as_ref();
        if expected_set.contains(word) {
            continue;
        }
        report.checked += 1;
        if tree.search(word) {
            report.false_positives.push(word.to_string());
        }
    }

    report
}

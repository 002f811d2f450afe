// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ternary Search Tree Implementation
//!
//! An ordered set of strings stored one character per node. Every node has
//! three children: `left` for smaller characters at the same position,
//! `middle` for the next position of a matching character, and `right` for
//! larger characters at the same position. Words sharing a prefix share the
//! nodes of that prefix.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::ternary_search_tree::TernarySearchTree;
//!
//! let mut tree = TernarySearchTree::new();
//! for word in ["cat", "car", "cart", "dog"] {
//!     tree.insert(word);
//! }
//!
//! assert_eq!(tree.get_all_words(), vec!["car", "cart", "cat", "dog"]);
//! assert!(!tree.search("ca"));
//! assert!(tree.starts_with("ca"));
//! assert_eq!(tree.size(), 4);
//! ```
//!
//! The tree is single-threaded: mutation takes `&mut self`, so callers that
//! share a tree across threads must wrap it in their own lock.

mod config;
mod error;
mod iter;
mod node;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

pub use config::TernarySearchTreeConfig;
pub use error::TstError;
pub use iter::Words;
use node::{Link, Node};

/// Result type for ternary search tree operations
pub type TstResult<T> = Result<T, TstError>;

/// A set of strings backed by a ternary search tree.
///
/// Key features:
/// * Exact membership and prefix existence checks
/// * Lexicographically ordered enumeration, eager or lazy
/// * Prefix completion
/// * Optional case folding and word length limit
pub struct TernarySearchTree {
    /// The root node of the tree
    root: Link,

    /// Number of stored words
    len: usize,

    /// Number of allocated nodes
    nodes: usize,

    /// Configuration options
    config: TernarySearchTreeConfig,
}

impl TernarySearchTree {
    /// Creates a new empty `TernarySearchTree` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TernarySearchTreeConfig::default())
    }

    /// Creates a new empty `TernarySearchTree` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the tree.
    pub fn with_config(config: TernarySearchTreeConfig) -> Self {
        Self {
            root: None,
            len: 0,
            nodes: 0,
            config,
        }
    }

    /// Returns the configuration this tree was built with.
    pub fn config(&self) -> &TernarySearchTreeConfig {
        &self.config
    }

    /// Inserts a word into the tree.
    ///
    /// Inserting the empty string is a no-op. With a configured
    /// `max_word_length`, over-long words are skipped as well; use
    /// [`try_insert`](Self::try_insert) to observe why a word was rejected.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` otherwise.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        match self.try_insert(word) {
            Ok(inserted) => inserted,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping word");
                false
            }
        }
    }

    /// Inserts a word into the tree, reporting rejected input.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was newly stored, `false` if it was already present.
    /// * `Err(TstError)` - If the word is empty or longer than the configured limit.
    pub fn try_insert<W>(&mut self, word: W) -> TstResult<bool>
    where
        W: AsRef<str>,
    {
        let key = self.normalize(word.as_ref());
        let chars: Vec<char> = key.chars().collect();
        if chars.is_empty() {
            return Err(TstError::EmptyKey);
        }

        if let Some(max_length) = self.config.max_word_length {
            if chars.len() > max_length {
                return Err(TstError::KeyTooLong {
                    key: key.into_owned(),
                    max_length,
                });
            }
        }

        let last = chars.len() - 1;
        let mut created = 0;
        let mut index = 0;
        let mut slot = &mut self.root;

        loop {
            let c = chars[index];
            let node = slot.get_or_insert_with(|| {
                created += 1;
                Box::new(Node::new(c))
            });

            match c.cmp(&node.character) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal if index < last => {
                    index += 1;
                    slot = &mut node.middle;
                }
                Ordering::Equal => {
                    let is_new = !node.is_terminal;
                    node.is_terminal = true;
                    self.nodes += created;
                    if is_new {
                        self.len += 1;
                    }
                    return Ok(is_new);
                }
            }
        }
    }

    /// Checks whether `word` was inserted as a complete word.
    ///
    /// The empty string is never stored, so searching it returns `false`.
    /// A prefix of a stored word is not a match unless it was inserted itself.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let key = self.normalize(word.as_ref());
        self.find_node(&key).map_or(false, |node| node.is_terminal)
    }

    /// Alias for [`search`](Self::search).
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.search(word)
    }

    /// Checks whether some stored word starts with `prefix`.
    ///
    /// A stored word counts as its own prefix. The empty prefix returns `false`.
    pub fn starts_with<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        let key = self.normalize(prefix.as_ref());
        self.find_node(&key).is_some()
    }

    /// Returns every stored word exactly once, in lexicographic order.
    pub fn get_all_words(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Returns a lazy iterator over the stored words, in the same order as
    /// [`get_all_words`](Self::get_all_words).
    pub fn iter(&self) -> Words<'_> {
        Words::new(self.root.as_deref(), self.len)
    }

    /// Returns all stored words that start with `prefix`, in order.
    ///
    /// `prefix` itself is included when it was stored. The empty prefix
    /// matches every word.
    pub fn words_with_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let key = self.normalize(prefix.as_ref());
        if key.is_empty() {
            return self.get_all_words();
        }

        match self.find_node(&key) {
            Some(node) => {
                Words::with_prefix(key.into_owned(), node.is_terminal, node.middle.as_deref())
                    .collect()
            }
            None => Words::empty().collect(),
        }
    }

    /// Returns the number of stored words.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias for [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Walks to the node matching the last character of `key`.
    fn find_node(&self, key: &str) -> Option<&Node> {
        let mut chars = key.chars();
        let mut c = chars.next()?;
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            match c.cmp(&node.character) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => match chars.next() {
                    Some(next) => {
                        c = next;
                        current = node.middle.as_deref();
                    }
                    None => return Some(node),
                },
            }
        }

        None
    }

    fn normalize<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(word)
        } else {
            Cow::Owned(word.to_lowercase())
        }
    }
}

impl Default for TernarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TernarySearchTree {
    fn drop(&mut self) {
        // Unlink iteratively: a long word is a middle chain as deep as the word.
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.middle.take());
            pending.extend(node.right.take());
        }
    }
}

impl Clone for TernarySearchTree {
    fn clone(&self) -> Self {
        // Reinsert the sorted words median first; the copy comes out balanced
        // and nothing walks the source recursively.
        let words = self.get_all_words();
        let mut tree = Self::with_config(self.config.clone());
        let mut ranges = vec![(0, words.len())];
        while let Some((start, end)) = ranges.pop() {
            if start >= end {
                continue;
            }
            let mid = start + (end - start) / 2;
            tree.insert(&words[mid]);
            ranges.push((mid + 1, end));
            ranges.push((start, mid));
        }
        tree
    }
}

impl fmt::Debug for TernarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TernarySearchTree")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .field("config", &self.config)
            .field("words", &WordSet(self))
            .finish()
    }
}

/// Formats the stored words through the iterator instead of the node links.
struct WordSet<'a>(&'a TernarySearchTree);

impl fmt::Debug for WordSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TernarySearchTree {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: AsRef<str>> Extend<W> for TernarySearchTree {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for TernarySearchTree {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(words: &[&str]) -> TernarySearchTree {
        words.iter().collect()
    }

    #[test]
    fn test_tree_basic_operations() {
        let mut tree = TernarySearchTree::new();

        // Test initial state
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert!(tree.get_all_words().is_empty());
        assert!(!tree.search("x"));

        // Test insertion
        assert!(tree.insert("hello"));
        assert_eq!(tree.size(), 1);
        assert!(!tree.is_empty());

        // Test retrieval
        assert!(tree.search("hello"));
        assert!(tree.contains("hello"));
        assert!(!tree.search("hell"));
        assert!(!tree.search("hellos"));
        assert!(tree.starts_with("hell"));
        assert!(tree.starts_with("hello"));
        assert!(!tree.starts_with("help"));

        // Test idempotent insertion
        assert!(!tree.insert("hello"));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.get_all_words(), vec!["hello"]);
    }

    #[test]
    fn test_shared_prefix_scenario() {
        let tree = tree_of(&["cat", "car", "cart", "dog"]);

        assert_eq!(tree.get_all_words(), vec!["car", "cart", "cat", "dog"]);
        assert!(!tree.search("ca"));
        assert!(tree.starts_with("ca"));
        assert_eq!(tree.size(), 4);
    }

    #[test]
    fn test_strict_prefix_words_are_terminal_independently() {
        let mut tree = tree_of(&["cart"]);
        assert!(!tree.search("car"));
        assert!(tree.starts_with("car"));

        // Marking the shared node terminal must not disturb the longer word.
        assert!(tree.insert("car"));
        assert!(tree.search("car"));
        assert!(tree.search("cart"));
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.get_all_words(), vec!["car", "cart"]);

        // Extension of an existing word reuses its path.
        assert!(tree.insert("carts"));
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.get_all_words(), vec!["car", "cart", "carts"]);
    }

    #[test]
    fn test_empty_string_is_ignored() {
        let mut tree = tree_of(&["a"]);

        assert!(!tree.insert(""));
        assert_eq!(tree.try_insert(""), Err(TstError::EmptyKey));
        assert!(!tree.search(""));
        assert!(!tree.starts_with(""));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.get_all_words(), vec!["a"]);
    }

    #[test]
    fn test_single_character_reinsert() {
        let mut tree = TernarySearchTree::new();
        tree.insert("a");
        tree.insert("a");
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_ordering_with_sideways_branches() {
        // Insertion order deliberately builds left and right chains.
        let tree = tree_of(&["m", "b", "z", "ma", "a", "mz", "bb", "zzz", "c"]);
        assert_eq!(
            tree.get_all_words(),
            vec!["a", "b", "bb", "c", "m", "ma", "mz", "z", "zzz"]
        );
    }

    #[test]
    fn test_unicode_words() {
        let tree = tree_of(&["straße", "strasse", "über", "uber", "日本"]);

        assert!(tree.search("straße"));
        assert!(tree.starts_with("stra"));
        assert!(!tree.search("straß"));
        assert_eq!(
            tree.get_all_words(),
            vec!["strasse", "straße", "uber", "über", "日本"]
        );
    }

    #[test]
    fn test_iter_matches_get_all_words() {
        let tree = tree_of(&["delta", "alpha", "charlie", "bravo", "al", "alp"]);
        let lazy: Vec<String> = tree.iter().collect();
        assert_eq!(lazy, tree.get_all_words());

        let mut iter = tree.iter();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        iter.next();
        assert_eq!(iter.size_hint(), (5, Some(5)));

        let borrowed: Vec<String> = (&tree).into_iter().collect();
        assert_eq!(borrowed, lazy);
    }

    #[test]
    fn test_words_with_prefix() {
        let tree = tree_of(&["car", "cart", "carton", "cat", "dog"]);

        assert_eq!(tree.words_with_prefix("car"), vec!["car", "cart", "carton"]);
        assert_eq!(tree.words_with_prefix("cart"), vec!["cart", "carton"]);
        assert_eq!(tree.words_with_prefix("ca"), vec!["car", "cart", "carton", "cat"]);
        assert_eq!(tree.words_with_prefix("d"), vec!["dog"]);
        assert!(tree.words_with_prefix("x").is_empty());
        assert!(tree.words_with_prefix("carts").is_empty());
        assert_eq!(tree.words_with_prefix(""), tree.get_all_words());
    }

    #[test]
    fn test_case_insensitive_config() {
        let config = TernarySearchTreeConfig::new().with_case_sensitive(false);
        let mut tree = TernarySearchTree::with_config(config);

        assert!(tree.insert("Cat"));
        assert!(!tree.insert("CAT"));
        assert!(tree.search("cAt"));
        assert!(tree.starts_with("CA"));
        assert_eq!(tree.get_all_words(), vec!["cat"]);
    }

    #[test]
    fn test_max_word_length() {
        let config = TernarySearchTreeConfig::new().with_max_word_length(3);
        let mut tree = TernarySearchTree::with_config(config);

        assert_eq!(tree.try_insert("dog"), Ok(true));
        assert_eq!(
            tree.try_insert("horse"),
            Err(TstError::KeyTooLong {
                key: "horse".to_string(),
                max_length: 3,
            })
        );
        assert!(!tree.insert("horse"));
        assert!(!tree.search("horse"));
        assert!(!tree.starts_with("h"));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut tree: TernarySearchTree = ["b", "a"].into_iter().collect();
        tree.extend(vec!["c".to_string(), "a".to_string()]);
        assert_eq!(tree.get_all_words(), vec!["a", "b", "c"]);
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn test_clone_and_debug() {
        let tree = tree_of(&["m", "c", "x", "ca", "cat", "xylophone"]);
        let copy = tree.clone();

        assert_eq!(copy.get_all_words(), tree.get_all_words());
        assert_eq!(copy.size(), tree.size());
        assert_eq!(copy.node_count(), tree.node_count());
        assert_eq!(copy.config(), tree.config());

        let debug = format!("{tree:?}");
        assert!(debug.starts_with("TernarySearchTree"));
        assert!(debug.contains("len: 6"));
        assert!(debug.contains(r#"{"c", "ca", "cat", "m", "x", "xylophone"}"#));
    }

    #[test]
    fn test_clone_keeps_config() {
        let config = TernarySearchTreeConfig::new().with_case_sensitive(false);
        let mut tree = TernarySearchTree::with_config(config);
        tree.insert("Word");

        let mut copy = tree.clone();
        assert!(!copy.insert("WORD"));
        assert!(copy.search("wOrD"));
    }

    #[test]
    fn test_deep_tree_clone_and_debug() {
        let word: String = std::iter::repeat('q').take(200_000).collect();
        let tree = tree_of(&[word.as_str(), "q"]);

        let copy = tree.clone();
        assert!(copy.search(&word));
        assert_eq!(copy.size(), 2);
        assert_eq!(copy.node_count(), 200_000);

        let debug = format!("{tree:?}");
        assert!(debug.contains("len: 2"));
        assert!(debug.contains(&word));
    }

    #[test]
    fn test_long_word_does_not_overflow() {
        let word: String = std::iter::repeat('q').take(10_000).collect();
        let mut tree = TernarySearchTree::new();
        assert!(tree.insert(&word));
        assert!(tree.search(&word));
        assert_eq!(tree.get_all_words(), vec![word]);
    }
}

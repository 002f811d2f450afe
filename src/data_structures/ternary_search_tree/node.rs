//! Node implementation for the ternary search tree.
//!
//! Each node holds one character and owns up to three children. `left` and
//! `right` are alternatives at the same position in a word, `middle` is the
//! continuation to the next position.

use std::fmt;

/// Owned link to a child subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A node in the ternary search tree.
pub(crate) struct Node {
    /// The character matched at this position
    pub character: char,

    /// Whether the path ending here spells a stored word
    pub is_terminal: bool,

    /// Alternatives ordered before `character`
    pub left: Link,

    /// Continuation after `character`
    pub middle: Link,

    /// Alternatives ordered after `character`
    pub right: Link,
}

impl Node {
    /// Creates a new non-terminal leaf node.
    pub fn new(character: char) -> Self {
        Self {
            character,
            is_terminal: false,
            left: None,
            middle: None,
            right: None,
        }
    }
}

impl fmt::Debug for Node {
    // Children are shown by presence only; following them would recurse once
    // per character of the longest word.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("character", &self.character)
            .field("is_terminal", &self.is_terminal)
            .field("left", &self.left.is_some())
            .field("middle", &self.middle.is_some())
            .field("right", &self.right.is_some())
            .finish()
    }
}

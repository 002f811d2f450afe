//! Ordered word iteration for the ternary search tree.
//!
//! The traversal keeps an explicit stack instead of recursing, so iteration
//! depth is not limited by the call stack. Each frame walks its node through
//! left, emit, middle, right. That is the order that makes the output
//! lexicographic.

use std::iter::FusedIterator;

use super::node::Node;

/// Next step to take for a node on the traversal stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Left,
    Emit,
    Middle,
    Right,
}

#[derive(Debug)]
struct Frame<'a> {
    node: &'a Node,
    /// Length in bytes of the accumulated prefix that precedes `node.character`
    prefix_len: usize,
    next: Visit,
}

/// Iterator over stored words in lexicographic order.
///
/// Created by [`TernarySearchTree::iter`](super::TernarySearchTree::iter).
/// Words are built into a shared prefix buffer and only allocated when
/// yielded.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<Frame<'a>>,
    /// Prefix buffer shared by all frames. A frame only writes past its own
    /// `prefix_len`, so every frame below it keeps a valid prefix.
    prefix: String,
    /// A word to yield before walking the stack (a stored completion prefix)
    pending: Option<String>,
    /// Exact number of words left, when known
    remaining: Option<usize>,
}

impl<'a> Words<'a> {
    /// Iterates a whole tree holding `len` words.
    pub(crate) fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut words = Self {
            stack: Vec::new(),
            prefix: String::new(),
            pending: None,
            remaining: Some(len),
        };
        words.push(root, 0);
        words
    }

    /// Iterates the completions of `prefix`: `prefix` itself when `stored`,
    /// then every word below `subtree` (the middle child of the prefix's last node).
    pub(crate) fn with_prefix(prefix: String, stored: bool, subtree: Option<&'a Node>) -> Self {
        let prefix_len = prefix.len();
        let pending = stored.then(|| prefix.clone());
        let mut words = Self {
            stack: Vec::new(),
            prefix,
            pending,
            remaining: None,
        };
        words.push(subtree, prefix_len);
        words
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            stack: Vec::new(),
            prefix: String::new(),
            pending: None,
            remaining: Some(0),
        }
    }

    fn push(&mut self, node: Option<&'a Node>, prefix_len: usize) {
        if let Some(node) = node {
            self.stack.push(Frame {
                node,
                prefix_len,
                next: Visit::Left,
            });
        }
    }

    fn yielded(&mut self, word: String) -> Option<String> {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(word)
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            return self.yielded(word);
        }

        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;
            let prefix_len = frame.prefix_len;

            match frame.next {
                Visit::Left => {
                    frame.next = Visit::Emit;
                    self.push(node.left.as_deref(), prefix_len);
                }
                Visit::Emit => {
                    frame.next = Visit::Middle;
                    if node.is_terminal {
                        let mut word =
                            String::with_capacity(prefix_len + node.character.len_utf8());
                        word.push_str(&self.prefix[..prefix_len]);
                        word.push(node.character);
                        return self.yielded(word);
                    }
                }
                Visit::Middle => {
                    frame.next = Visit::Right;
                    if node.middle.is_some() {
                        self.prefix.truncate(prefix_len);
                        self.prefix.push(node.character);
                        let extended = self.prefix.len();
                        self.push(node.middle.as_deref(), extended);
                    }
                }
                Visit::Right => {
                    // The right sibling replaces this frame and shares its prefix.
                    self.stack.pop();
                    self.push(node.right.as_deref(), prefix_len);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::from(self.pending.is_some()), None),
        }
    }
}

impl FusedIterator for Words<'_> {}

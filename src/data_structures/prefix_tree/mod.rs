// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Tree Implementation
//!
//! An in-memory trie for storing words and enumerating every stored word
//! that starts with a given prefix. It is the lookup structure behind
//! keystroke-driven autocomplete.
//!
//! # Features
//!
//! - Exact membership checks in O(length of word).
//! - Prefix enumeration in lexicographic order, lazily or collected.
//! - Optional case-insensitive matching.
//! - Idempotent insertion with an O(1) word count.
//!
//! # Example
//!
//! ```
//! use prefix_complete_lib::data_structures::prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.add("cat");
//! tree.add("car");
//! tree.add("cart");
//!
//! assert_eq!(tree.size(), 3);
//! assert!(tree.contains("car"));
//! assert!(!tree.contains("ca"));
//! assert_eq!(tree.words_for_prefix("car"), vec!["car", "cart"]);
//! ```
//!
//! # Empty words
//!
//! The empty string is a word like any other: adding it marks the root as
//! terminal, counts once, and makes it appear first in `words_for_prefix("")`.

mod config;
mod error;
pub mod loader;
mod node;
mod shared;

use std::borrow::Cow;

use tracing::trace;

pub use config::{PrefixTreeConfig, WordListConfig};
pub use error::{PrefixTreeError, PrefixTreeResult};
pub use loader::LoadStats;
pub use node::TreeNode;
pub use shared::SharedPrefixTree;

/// A prefix tree holding a set of words.
///
/// Nodes are created lazily on insertion and never removed. The tree is
/// single-owner; wrap it in a [`SharedPrefixTree`] for concurrent access.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    /// The sentinel root node
    root: TreeNode,

    /// Number of distinct words added
    word_count: usize,

    /// Configuration options
    config: PrefixTreeConfig,
}

impl PrefixTree {
    /// Creates a new empty `PrefixTree` with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixTreeConfig::default())
    }

    /// Creates a new empty `PrefixTree` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the tree.
    pub fn with_config(config: PrefixTreeConfig) -> Self {
        Self {
            root: TreeNode::root(),
            word_count: 0,
            config,
        }
    }

    /// Returns the configuration this tree was built with.
    pub fn config(&self) -> &PrefixTreeConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Adds a word to the tree.
    ///
    /// Adding a word that is already present has no effect.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to add. The empty string marks the root itself.
    ///
    /// # Returns
    ///
    /// `true` if the word was new, `false` if it was already present.
    pub fn add<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref());

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        if node.is_terminal() {
            return false;
        }
        node.set_terminal(true);
        self.word_count += 1;

        trace!(word = %word, size = self.word_count, "Added word to prefix tree");
        true
    }

    /// Checks whether `word` was added to the tree.
    ///
    /// A path that exists only as the prefix of a longer word is not a match.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref());
        self.find_node(&word)
            .map(TreeNode::is_terminal)
            .unwrap_or(false)
    }

    /// Finds every word that starts with `prefix`, including `prefix` itself
    /// if it was added.
    ///
    /// Words are returned in lexicographic order. An unmatched prefix yields
    /// an empty vector.
    pub fn words_for_prefix<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.iter_prefix(prefix).collect()
    }

    /// Returns at most `limit` words starting with `prefix`, in the same
    /// order as [`words_for_prefix`](Self::words_for_prefix).
    ///
    /// A `limit` of zero means no limit.
    pub fn suggestions<P>(&self, prefix: P, limit: usize) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let words = self.iter_prefix(prefix);
        if limit == 0 {
            words.collect()
        } else {
            words.take(limit).collect()
        }
    }

    /// Lazily iterates over every word that starts with `prefix`.
    pub fn iter_prefix<P>(&self, prefix: P) -> WordsWithPrefix<'_>
    where
        P: AsRef<str>,
    {
        let prefix = self.normalize(prefix.as_ref());
        let start = self.find_node(&prefix);
        WordsWithPrefix::new(start, prefix.into_owned())
    }

    /// Returns the number of distinct words in the tree.
    pub fn size(&self) -> usize {
        self.word_count
    }

    /// Checks whether no word has been added.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Walks from the root along `key`, stopping at the first missing edge.
    fn find_node(&self, key: &str) -> Option<&TreeNode> {
        key.chars().try_fold(&self.root, |node, c| node.child(c))
    }

    fn normalize<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(iter);
        tree
    }
}

/// Pre-order iterator over the words below a prefix node.
///
/// Uses an explicit stack, so very long words cannot exhaust the call stack.
/// Children are pushed in reverse order, which makes the output lexicographic.
#[derive(Debug)]
pub struct WordsWithPrefix<'a> {
    /// Pending nodes with the buffer length to restore before visiting them
    stack: Vec<Frame<'a>>,

    /// The word spelled by the path to the node being visited
    buffer: String,
}

#[derive(Debug)]
struct Frame<'a> {
    node: &'a TreeNode,
    base_len: usize,
    edge: Option<char>,
}

impl<'a> WordsWithPrefix<'a> {
    fn new(start: Option<&'a TreeNode>, prefix: String) -> Self {
        let stack = start
            .map(|node| Frame {
                node,
                base_len: prefix.len(),
                edge: None,
            })
            .into_iter()
            .collect();
        Self {
            stack,
            buffer: prefix,
        }
    }
}

impl<'a> Iterator for WordsWithPrefix<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            self.buffer.truncate(frame.base_len);
            if let Some(c) = frame.edge {
                self.buffer.push(c);
            }

            let base_len = self.buffer.len();
            for (c, child) in frame.node.children().rev() {
                self.stack.push(Frame {
                    node: child,
                    base_len,
                    edge: Some(*c),
                });
            }

            if frame.node.is_terminal() {
                return Some(self.buffer.clone());
            }
        }
        None
    }
}

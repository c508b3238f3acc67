// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`PrefixTree`].
//!
//! Lookups take a shared read lock and can run concurrently. Insertions take
//! the write lock. The lock is `parking_lot`'s, which does not poison, so no
//! operation here can fail.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{PrefixTree, PrefixTreeConfig};

/// A cloneable, thread-safe prefix tree.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixTree {
    inner: Arc<RwLock<PrefixTree>>,
}

impl SharedPrefixTree {
    /// Creates a new empty shared tree with default configuration.
    pub fn new() -> Self {
        Self::from_tree(PrefixTree::new())
    }

    /// Creates a new empty shared tree with the specified configuration.
    pub fn with_config(config: PrefixTreeConfig) -> Self {
        Self::from_tree(PrefixTree::with_config(config))
    }

    /// Wraps an existing tree.
    pub fn from_tree(tree: PrefixTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Adds a word under the write lock.
    ///
    /// Returns `true` if the word was new.
    pub fn add<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.write().add(word)
    }

    /// Adds every word from `words` under a single write lock.
    ///
    /// Returns how many of them were new.
    pub fn extend<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = self.inner.write();
        words.into_iter().filter(|word| tree.add(word)).count()
    }

    /// Checks whether `word` was added.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.read().contains(word)
    }

    /// Collects every word starting with `prefix`.
    pub fn words_for_prefix<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        self.inner.read().words_for_prefix(prefix)
    }

    /// Collects at most `limit` words starting with `prefix` (0 = no limit).
    pub fn suggestions<P: AsRef<str>>(&self, prefix: P, limit: usize) -> Vec<String> {
        self.inner.read().suggestions(prefix, limit)
    }

    /// Number of distinct words.
    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Whether no word has been added.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Clones the current contents into a standalone tree.
    pub fn snapshot(&self) -> PrefixTree {
        self.inner.read().clone()
    }
}

impl From<PrefixTree> for SharedPrefixTree {
    fn from(tree: PrefixTree) -> Self {
        Self::from_tree(tree)
    }
}

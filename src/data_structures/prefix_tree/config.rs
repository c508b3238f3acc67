// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the prefix tree and its word-list loader.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a [`PrefixTree`](super::PrefixTree).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixTreeConfig {
    /// Whether words are stored and matched exactly as given.
    /// When false, every word and prefix is lowercased first.
    pub case_sensitive: bool,
}

impl PrefixTreeConfig {
    /// Create a new default configuration (case sensitive).
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
        }
    }

    /// Set whether keys are case sensitive.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl Default for PrefixTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a newline-delimited word list is read into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListConfig {
    /// Path to the word list file
    pub path: Option<PathBuf>,

    /// Strip surrounding whitespace from each line
    pub trim: bool,

    /// Lines starting with this prefix are ignored
    pub comment_prefix: Option<String>,
}

impl WordListConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - path: None
    /// - trim: true
    /// - comment_prefix: "#"
    pub fn new() -> Self {
        Self {
            path: None,
            trim: true,
            comment_prefix: Some("#".to_string()),
        }
    }

    /// Set the word list path.
    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set whether lines are trimmed.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set the comment prefix, or disable comments with `None`.
    pub fn with_comment_prefix(mut self, prefix: Option<&str>) -> Self {
        self.comment_prefix = prefix.map(str::to_string);
        self
    }
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix tree.
//!
//! Tree operations themselves never fail; these errors come from filling a
//! tree from an external word list.

use std::path::PathBuf;

/// Errors that can occur while populating a prefix tree.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PrefixTreeError {
    /// The word list file does not exist.
    #[error("Word list not found: {0}")]
    WordListNotFound(PathBuf),

    /// Reading the word list failed part way through.
    #[error("Failed to read word list {path:?} at line {line}: {message}")]
    ReadFailed {
        /// The word list being read.
        path: PathBuf,
        /// The 1-based line where reading failed.
        line: usize,
        /// The underlying I/O error message.
        message: String,
    },
}

/// Result type for prefix tree operations
pub type PrefixTreeResult<T> = Result<T, PrefixTreeError>;

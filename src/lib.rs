// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Complete Library
//!
//! An in-memory prefix tree for autocomplete, plus the configuration, error
//! handling and word-list loading used by the `prefix_complete` binary.
//!
//! # Architecture
//!
//! - `data_structures::prefix_tree` holds the trie and everything that
//!   operates on it directly.
//! - `config` layers defaults, a config file and environment variables.
//! - `error` defines the error taxonomy and the process-wide error reporter.

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Prefix Complete.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

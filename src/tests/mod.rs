// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for Prefix Complete.
//!
//! Unit tests live next to the code they cover. This module holds the
//! cross-cutting suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the prefix tree
//! - Shared fixtures and proptest strategies

pub mod prefix_tree_tests;
pub mod test_utils;

pub use test_utils::{ascii_word_strategy, word_set_strategy, word_strategy, TestFixture};

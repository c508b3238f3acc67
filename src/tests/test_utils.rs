// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test utilities and fixtures for Prefix Complete.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum length for generated words.
const MAX_WORD_LENGTH: usize = 8;

/// Maximum number of words in a generated word set.
const MAX_WORD_COUNT: usize = 40;

/// Strategy for short words over a small alphabet.
///
/// A small alphabet makes shared prefixes (and duplicates) common, which is
/// where trie bugs live.
pub fn ascii_word_strategy() -> BoxedStrategy<String> {
    prop::string::string_regex(&format!("[a-e]{{0,{MAX_WORD_LENGTH}}}"))
        .expect("valid regex")
        .boxed()
}

/// Strategy for words of arbitrary Unicode scalar values.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::any(), 0..MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Strategy for a list of words drawn from `words`, duplicates allowed.
pub fn word_set_strategy(words: BoxedStrategy<String>) -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(words, 0..MAX_WORD_COUNT).boxed()
}

/// Test fixture for tests that need files or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}

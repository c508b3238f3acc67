// Copyright (c) 2025 Prefix Complete Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Completion configuration module.
//!
//! Validation rules for the prefix tree, the word list and the suggestion
//! list handed back to callers.

use super::{ConfigResult, Validate};
use crate::data_structures::prefix_tree::{PrefixTreeConfig, WordListConfig};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for `completion.max_suggestions`.
pub const MAX_SUGGESTIONS_LIMIT: usize = 10_000;

/// Suggestion list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Maximum number of suggestions returned per prefix (0 for no limit)
    pub max_suggestions: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
        }
    }
}

impl Validate for CompletionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions > MAX_SUGGESTIONS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "completion.max_suggestions".to_string(),
                message: format!("must be at most {MAX_SUGGESTIONS_LIMIT}"),
            });
        }
        Ok(())
    }
}

// Every combination of tree options is valid.
impl Validate for PrefixTreeConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl Validate for WordListConfig {
    fn validate(&self) -> ConfigResult<()> {
        if matches!(self.comment_prefix.as_deref(), Some("")) {
            return Err(ConfigError::ValidationError(
                "word_list.comment_prefix cannot be empty".to_string(),
            ));
        }

        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "word_list.path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

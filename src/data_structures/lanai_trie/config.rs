// Copyright (c) 2025 Lanai Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Trie.

use serde::{Deserialize, Serialize};

/// Default number of suggestions returned by `auto_complete`.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Default error budget used by `auto_correct`.
pub const DEFAULT_MAX_ERRORS: usize = 2;

/// Configuration options for the Lanai Trie.
///
/// These values only provide the defaults for the suggestion queries; the
/// explicit `*_with_limit` and `*_within` variants ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanaiTrieConfig {
    /// Maximum number of words returned by `auto_complete`
    pub suggestion_limit: usize,

    /// Maximum score a candidate may have to be returned by `auto_correct`
    pub max_errors: usize,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }

    /// Set how many completions `auto_complete` returns.
    pub fn with_suggestion_limit(mut self, suggestion_limit: usize) -> Self {
        self.suggestion_limit = suggestion_limit;
        self
    }

    /// Set the error budget of `auto_correct`.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Dictionary configuration module.
//!
//! This module defines where the initial word list comes from and how its
//! lines are interpreted.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Word list to load on startup, one word per line (None for an empty trie)
    pub path: Option<PathBuf>,

    /// Whether lines starting with `comment_prefix` are ignored
    pub skip_comments: bool,

    /// Marker for comment lines
    pub comment_prefix: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            skip_comments: true,
            comment_prefix: "#".to_string(),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Validate path
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dictionary path cannot be empty".to_string(),
                ));
            }
        }

        // Validate comment_prefix
        if self.skip_comments && self.comment_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "comment_prefix cannot be empty when skip_comments is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

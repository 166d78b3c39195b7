//! Trie configuration module.
//!
//! The `[trie]` section deserializes straight into [`LanaiTrieConfig`], the
//! defaults used by the suggestion queries.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::LanaiTrieConfig;
use crate::error::config::ConfigError;

impl Validate for LanaiTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.suggestion_limit == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.suggestion_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_suggestion_limit_is_rejected() {
        let config = LanaiTrieConfig::new().with_suggestion_limit(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange { ref key, .. }) if key == "trie.suggestion_limit"
        ));
    }

    #[test]
    fn test_zero_error_budget_is_allowed() {
        let config = LanaiTrieConfig::new().with_max_errors(0);
        assert!(config.validate().is_ok());
    }
}

//! Lanai Lexicon Library
//!
//! An in-memory dictionary built on a character-level prefix tree, for
//! applications that need fast prefix lookups such as autocomplete widgets
//! and spell-checkers.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`] holds the trie and its queries; every
//!   trie operation is total and infallible.
//! - [`dictionary`] fills tries from word lists.
//! - [`config`], [`error`] and [`logging`] provide the configuration loader,
//!   error types with reporting, and tracing setup around it.

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

pub use data_structures::lanai_trie::{LanaiTrie, LanaiTrieConfig, SortOrder};

/// Version information for Lanai Lexicon.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes reported errors to `tracing` and loads the default configuration
/// into the global slot.
pub fn init() -> error::LexiconResult<()> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    if let Err(e) = config::init_default_config() {
        let message = e.to_string();
        error::report_error(error::ErrorContext::new(
            error::LexiconError::Custom(message),
            "config",
        ));
        return Err(e.into());
    }

    Ok(())
}

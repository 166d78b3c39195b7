//! Data structures for Lanai Lexicon.
//!
//! This module contains the in-memory structures backing the dictionary.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Total operations: queries return empty results instead of errors
//! - Deterministic, ordered enumeration

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, SortOrder};

//! Test modules for Lanai Lexicon.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the trie using proptest
//! - Dictionary import from files
//! - Shared fixtures and strategies

pub mod dictionary_tests;
pub mod error_tests;

pub use test_utils::{vocabulary_strategy, word_strategy, TestFixture};

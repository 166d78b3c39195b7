//! Tests for dictionary import from files.

use super::TestFixture;
use crate::config::LexiconConfig;
use crate::dictionary::load_trie;
use crate::error::LexiconError;

/// Test that a configured word list is loaded with the configured query defaults
#[test]
fn test_load_trie_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "words.txt",
            "# sample vocabulary\napple\napples\napplication\napp\nabout\ndad\n",
        )
        .unwrap();

    let mut config = LexiconConfig::default();
    config.dictionary.path = Some(path);
    config.trie.suggestion_limit = 2;

    let trie = load_trie(&config).unwrap();

    assert_eq!(trie.len(), 6);
    assert!(!trie.contains("# sample vocabulary"));
    assert_eq!(trie.auto_complete("a"), vec!["about", "app"]);
}

/// Test that a missing word list surfaces as an IO error
#[test]
fn test_load_trie_missing_file() {
    let fixture = TestFixture::new().unwrap();

    let mut config = LexiconConfig::default();
    config.dictionary.path = Some(fixture.temp_dir.path().join("absent.txt"));

    let result = load_trie(&config);
    assert!(matches!(result, Err(LexiconError::Io(_))));
}

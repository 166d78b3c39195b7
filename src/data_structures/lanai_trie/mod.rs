// Copyright (c) 2025 Lanai Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! A character-level prefix tree used as an in-memory dictionary. It supports
//! insertion, membership tests, removal with branch pruning, alphabetical
//! enumeration, prefix completion and bounded spelling correction.
//!
//! # Example
//!
//! ```
//! use lanai_lexicon::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("apple");
//! trie.insert("app");
//! trie.insert("about");
//!
//! assert!(trie.contains("app"));
//! assert!(!trie.contains("ap"));
//! assert_eq!(trie.auto_complete("ap"), vec!["app", "apple"]);
//! assert_eq!(trie.auto_correct("apx"), vec!["app"]);
//! ```
//!
//! Any `char` may appear in a word. Words are compared and ordered by code
//! point; no case folding or normalisation is applied.

mod config;
mod node;
mod render;
mod suggest;

pub use config::{LanaiTrieConfig, DEFAULT_MAX_ERRORS, DEFAULT_SUGGESTION_LIMIT};
pub use node::TrieNode;
pub use suggest::correction_score;

use tracing::{debug, trace};

/// Order in which [`LanaiTrie::sort`] returns words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Alphabetical order
    #[default]
    Ascending,
    /// Reverse alphabetical order
    Descending,
}

/// Lanai Trie is a prefix tree storing whole words at their terminal nodes.
///
/// Key features:
/// * Children kept in ascending order, so enumeration needs no extra sort
/// * Removal prunes every node left without a word or children
/// * Prefix completion and lexical-prefix spelling correction
#[derive(Debug, Clone, Default)]
pub struct LanaiTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Number of stored words
    len: usize,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Defaults for the suggestion queries.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            len: 0,
            config,
        }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created. Inserting a word that is
    /// already stored leaves the trie unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.child_or_insert(c));

        let is_new = !node.is_terminal();
        node.value = Some(word.to_string());
        if is_new {
            self.len += 1;
        }

        trace!(word = %word, is_new, "Inserted word");
        is_new
    }

    /// Returns `true` iff `key` is a stored word.
    ///
    /// A key that is only a prefix of stored words is not contained.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        self.root
            .descend(key.chars())
            .and_then(|node| node.value.as_deref())
            .is_some_and(|value| value == key)
    }

    /// Removes a word from the trie and prunes the branch it leaves behind.
    ///
    /// Removing a key that is not stored is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the word was removed, `false` if it wasn't found.
    pub fn remove<K>(&mut self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let chars: Vec<char> = key.chars().collect();
        let removed = Self::remove_recursive(&mut self.root, key, &chars);
        if removed {
            self.len -= 1;
        }

        trace!(key = %key, removed, "Removed word");
        removed
    }

    /// Clears the word at the end of `rest` and unlinks every node on the way
    /// back up that is left without a word and without children.
    fn remove_recursive(node: &mut TrieNode, key: &str, rest: &[char]) -> bool {
        let Some((c, tail)) = rest.split_first() else {
            if node.value.as_deref() == Some(key) {
                node.value = None;
                return true;
            }
            return false;
        };

        let Some(child) = node.children.get_mut(c) else {
            return false;
        };

        let removed = Self::remove_recursive(child, key, tail);
        if removed && child.is_prunable() {
            node.children.remove(c);
        }
        removed
    }

    /// Returns every stored word in the requested order.
    pub fn sort(&self, order: SortOrder) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        self.root.collect_words(&mut words, usize::MAX);
        if order == SortOrder::Descending {
            words.reverse();
        }
        words
    }

    /// Returns every stored word in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.sort(SortOrder::Ascending)
    }

    /// Inserts every word of `other` into this trie. `other` is unchanged.
    pub fn merge(&mut self, other: &LanaiTrie) {
        let before = self.len;
        self.extend(other.words());
        debug!(
            imported = other.len(),
            added = self.len - before,
            "Merged trie"
        );
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
        self.len = 0;
    }
}

impl<S> Extend<S> for LanaiTrie
where
    S: AsRef<str>,
{
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S> FromIterator<S> for LanaiTrie
where
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut trie = LanaiTrie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = LanaiTrie::new();

        assert!(trie.is_empty());

        assert!(trie.insert("word"));
        assert!(trie.insert("water"));
        assert!(trie.insert("banana"));
        assert_eq!(trie.len(), 3);

        assert!(trie.contains("word"));
        assert!(trie.contains("water"));
        assert!(trie.contains("banana"));
        assert!(!trie.contains("bob"));
        assert!(!trie.contains("wat"));

        // Re-insertion is idempotent
        assert!(!trie.insert("word"));
        assert_eq!(trie.len(), 3);

        assert!(trie.remove("word"));
        assert!(!trie.contains("word"));
        assert!(!trie.remove("word"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_remove_prefix_keeps_longer_word() {
        let mut trie = LanaiTrie::new();
        trie.insert("ab");
        trie.insert("abs");

        assert!(trie.remove("ab"));
        assert!(!trie.contains("ab"));
        assert!(trie.contains("abs"));

        let b = trie.root().descend("ab".chars()).unwrap();
        assert!(!b.is_terminal());
        assert_eq!(b.children.len(), 1);
    }

    #[test]
    fn test_remove_prunes_to_nearest_word() {
        let mut trie = LanaiTrie::new();
        trie.insert("car");
        trie.insert("cartoon");

        assert!(trie.remove("cartoon"));
        let r = trie.root().descend("car".chars()).unwrap();
        assert!(r.children.is_empty());
        assert!(r.is_terminal());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut trie = LanaiTrie::new();
        trie.insert("abc");

        assert!(!trie.remove("ab"));
        assert!(!trie.remove("abcd"));
        assert!(!trie.remove("x"));
        assert!(trie.contains("abc"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_empty_word() {
        let mut trie = LanaiTrie::new();
        assert!(!trie.contains(""));

        assert!(trie.insert(""));
        assert!(trie.contains(""));
        assert_eq!(trie.words(), vec![""]);

        assert!(trie.remove(""));
        assert!(!trie.contains(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_sort() {
        let trie: LanaiTrie = ["banana", "cherry", "apple"].into_iter().collect();

        assert_eq!(trie.sort(SortOrder::Ascending), vec!["apple", "banana", "cherry"]);
        assert_eq!(trie.sort(SortOrder::Descending), vec!["cherry", "banana", "apple"]);
    }

    #[test]
    fn test_merge() {
        let mut trie1 = LanaiTrie::new();
        let mut trie2 = LanaiTrie::new();
        trie1.insert("amazing");
        trie2.insert("amazon");

        trie1.merge(&trie2);

        assert!(trie1.contains("amazon"));
        assert!(trie1.contains("amazing"));
        assert_eq!(trie1.len(), 2);
        assert_eq!(trie2.words(), vec!["amazon"]);
    }

    #[test]
    fn test_clear_keeps_config() {
        let config = LanaiTrieConfig::new().with_suggestion_limit(1);
        let mut trie = LanaiTrie::with_config(config);
        trie.insert("one");

        trie.clear();

        assert!(trie.is_empty());
        assert_eq!(trie.to_string(), "TrieTree");
        assert_eq!(trie.config().suggestion_limit, 1);
    }

    #[test]
    fn test_non_ascii_characters() {
        let mut trie = LanaiTrie::new();
        trie.insert("Ōhiʻa");
        trie.insert("ʻōhelo");
        trie.insert("Zebra");

        assert!(trie.contains("Ōhiʻa"));
        assert_eq!(trie.words(), vec!["Zebra", "Ōhiʻa", "ʻōhelo"]);
    }
}

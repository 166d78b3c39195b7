// Copyright (c) 2025 Lanai Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Completion and correction queries for the Lanai Trie.

use super::LanaiTrie;
use tracing::debug;

impl LanaiTrie {
    /// Returns up to `suggestion_limit` stored words starting with `prefix`.
    ///
    /// See [`LanaiTrie::auto_complete_with_limit`].
    pub fn auto_complete<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        self.auto_complete_with_limit(prefix, self.config.suggestion_limit)
    }

    /// Returns up to `limit` stored words starting with `prefix`, in
    /// ascending order.
    ///
    /// A stored word equal to `prefix` is its own completion. The result is
    /// empty when no stored word has the prefix.
    pub fn auto_complete_with_limit<P>(&self, prefix: P, limit: usize) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let mut completions = Vec::new();
        if let Some(node) = self.root.descend(prefix.as_ref().chars()) {
            node.collect_words(&mut completions, limit);
        }
        completions
    }

    /// Returns stored words within `max_errors` of `word`.
    ///
    /// See [`LanaiTrie::auto_correct_within`].
    pub fn auto_correct<W>(&self, word: W) -> Vec<String>
    where
        W: AsRef<str>,
    {
        self.auto_correct_within(word, self.config.max_errors)
    }

    /// Returns correction candidates for `word`, in ascending order.
    ///
    /// A stored `word` is returned on its own. Otherwise the candidate pool
    /// starts as every stored word and is narrowed to the words sharing the
    /// longest leading substring of `word` that any stored word shares.
    /// Pool members scoring at most `max_errors` under
    /// [`correction_score`] are returned.
    pub fn auto_correct_within<W>(&self, word: W, max_errors: usize) -> Vec<String>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if self.contains(word) {
            return vec![word.to_string()];
        }

        let mut pool = self.words();
        let mut prefix = String::with_capacity(word.len());
        for c in word.chars() {
            prefix.push(c);
            if !pool.iter().any(|w| w.starts_with(prefix.as_str())) {
                break;
            }
            pool.retain(|w| w.starts_with(prefix.as_str()));
        }

        debug!(word = %word, pool = pool.len(), "Narrowed correction pool");

        pool.into_iter()
            .filter(|candidate| correction_score(word, candidate) <= max_errors)
            .collect()
    }
}

/// Scores how far `candidate` is from `word`.
///
/// The score is the number of characters `candidate` is shorter than `word`,
/// plus one for every position of `candidate` that is past the end of `word`
/// or holds a different character. This is not a Levenshtein distance.
pub fn correction_score(word: &str, candidate: &str) -> usize {
    let target: Vec<char> = word.chars().collect();
    let mut length = 0;
    let mut mismatches = 0;
    for (i, c) in candidate.chars().enumerate() {
        length += 1;
        if target.get(i) != Some(&c) {
            mismatches += 1;
        }
    }
    target.len().saturating_sub(length) + mismatches
}

// Copyright (c) 2025 Lanai Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Each node owns its children directly, keyed by the character on the edge
//! from the parent. A `BTreeMap` keeps the children in ascending character
//! order, which is the order every traversal in this module relies on.

use std::collections::BTreeMap;

/// A node in the Lanai Trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Edge character from the parent, `None` for the root
    pub character: Option<char>,

    /// Children in ascending character order
    pub children: BTreeMap<char, TrieNode>,

    /// The full word, present only when this node terminates a stored entry
    pub value: Option<String>,
}

impl TrieNode {
    /// Creates the sentinel root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates an empty node for the edge labelled `character`.
    pub fn new(character: char) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            value: None,
        }
    }

    /// Whether this node terminates a stored word.
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// A node without a word and without children has no reason to exist.
    pub fn is_prunable(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Returns the child for `c`, creating it if missing.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| TrieNode::new(c))
    }

    /// Follows `path` from this node, returning the node it ends on.
    pub fn descend<I>(&self, path: I) -> Option<&TrieNode>
    where
        I: IntoIterator<Item = char>,
    {
        path.into_iter()
            .try_fold(self, |node, c| node.children.get(&c))
    }

    /// Appends every stored word under this node, in ascending order, to `out`.
    ///
    /// A node's own word precedes the words of its descendants. Collection
    /// stops once `out` holds `limit` words.
    pub fn collect_words(&self, out: &mut Vec<String>, limit: usize) {
        if out.len() >= limit {
            return;
        }
        if let Some(word) = &self.value {
            out.push(word.clone());
        }
        for child in self.children.values() {
            if out.len() >= limit {
                break;
            }
            child.collect_words(out, limit);
        }
    }
}

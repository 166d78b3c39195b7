// Copyright (c) 2025 Lanai Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tree drawing of a Lanai Trie.
//!
//! The output is compared literally by callers, so the header, connectors and
//! indentation units below are fixed:
//!
//! ```text
//! TrieTree
//!    |- a
//!    |  `- b : ab
//!    `- c : c
//! ```

use super::{LanaiTrie, TrieNode};
use std::fmt;

const HEADER: &str = "TrieTree";
const BRANCH: &str = "|- ";
const LAST_BRANCH: &str = "`- ";
const INDENT: &str = "|  ";
const LAST_INDENT: &str = "   ";

impl fmt::Display for LanaiTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::from(HEADER);
        out.push('\n');
        render_children(&self.root, LAST_INDENT, &mut out);
        f.write_str(out.trim_end())
    }
}

fn render_children(node: &TrieNode, indent: &str, out: &mut String) {
    let count = node.children.len();
    for (i, child) in node.children.values().enumerate() {
        let last = i + 1 == count;

        out.push_str(indent);
        out.push_str(if last { LAST_BRANCH } else { BRANCH });
        if let Some(c) = child.character {
            out.push(c);
        }
        if let Some(word) = &child.value {
            out.push_str(" : ");
            out.push_str(word);
        }
        out.push('\n');

        let nested = format!("{indent}{}", if last { LAST_INDENT } else { INDENT });
        render_children(child, &nested, out);
    }
}

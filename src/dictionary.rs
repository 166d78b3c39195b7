//! Word list import.
//!
//! Builds tries from plain-text word lists: one word per line, surrounding
//! whitespace trimmed, blank lines ignored and comment lines optionally
//! skipped.

use crate::config::dictionary::DictionaryConfig;
use crate::config::LexiconConfig;
use crate::data_structures::lanai_trie::LanaiTrie;
use crate::error::{report_error, ErrorContext, LexiconError, LexiconResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::{debug, info};

/// Inserts every word read from `reader` into `trie`.
///
/// # Returns
///
/// * `Ok(usize)` - The number of words that were not already stored.
/// * `Err(LexiconError::Io)` - If reading failed. Words read before the failure stay inserted.
pub fn read_words<R>(trie: &mut LanaiTrie, reader: R, config: &DictionaryConfig) -> LexiconResult<usize>
where
    R: BufRead,
{
    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if config.skip_comments && word.starts_with(config.comment_prefix.as_str()) {
            continue;
        }
        if trie.insert(word) {
            added += 1;
        }
    }

    debug!(added, total = trie.len(), "Read word list");
    Ok(added)
}

/// Builds a trie from the configuration.
///
/// The trie gets the configured query defaults and, when a dictionary path is
/// set, every word of that file. Failures are reported through the global
/// error reporter before being returned.
pub fn load_trie(config: &LexiconConfig) -> LexiconResult<LanaiTrie> {
    let mut trie = LanaiTrie::with_config(config.trie);

    let Some(path) = &config.dictionary.path else {
        return Ok(trie);
    };

    let result = File::open(path)
        .map_err(LexiconError::from)
        .and_then(|file| read_words(&mut trie, BufReader::new(file), &config.dictionary));

    match result {
        Ok(added) => {
            info!("Loaded {} words from {:?}", added, path);
            Ok(trie)
        }
        Err(e) => {
            report_error(
                ErrorContext::new(LexiconError::Custom(e.to_string()), "dictionary")
                    .with_details(format!("while loading {}", path.display())),
            );
            Err(e)
        }
    }
}

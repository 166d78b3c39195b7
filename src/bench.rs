//! Benchmarking support for Lanai Lexicon.
//!
//! Provides deterministic vocabularies so benchmark runs are comparable.

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generates `count` distinct lowercase words.
///
/// Word `i` is `i` written in base 26 with at least `min_len` letters, so
/// consecutive words share long prefixes the way real dictionaries do.
pub fn vocabulary(count: usize, min_len: usize) -> Vec<String> {
    (0..count).map(|i| encode(i, min_len)).collect()
}

fn encode(mut n: usize, min_len: usize) -> String {
    let mut letters = Vec::with_capacity(min_len);
    while n > 0 || letters.len() < min_len {
        letters.push(ALPHABET[n % ALPHABET.len()]);
        n /= ALPHABET.len();
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_distinct() {
        let words = vocabulary(1000, 3);
        let mut sorted = words.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 1000);
        assert_eq!(words[0], "aaa");
        assert_eq!(words[27], "abb");
    }
}

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::words::WORDS;

/// Number of words in the list; every word index fits in 11 bits.
pub const WORDLIST_SIZE: usize = 2048;

lazy_static! {
    // Reverse lookup table, built once on first use. The word array itself
    // is immutable static data, so reads need no synchronization.
    static ref WORD_INDEX: HashMap<&'static str, u16> = WORDS
        .iter()
        .enumerate()
        .map(|(index, &word)| (word, index as u16))
        .collect();
}

/// Returns the word at the given index, or `None` if the index is
/// outside 0..2047.
pub fn word_at(index: u16) -> Option<&'static str> {
    WORDS.get(index as usize).copied()
}

/// Returns the index of the given word, or `None` if it is not in the list.
///
/// Lookup is exact and case-sensitive; checksum semantics depend on the
/// precise spelling, so no normalization is applied here.
pub fn index_of(word: &str) -> Option<u16> {
    WORD_INDEX.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wordlist_size() {
        assert_eq!(WORDS.len(), WORDLIST_SIZE);
    }

    #[test]
    fn test_first_and_last_words() {
        assert_eq!(word_at(0), Some("abandon"));
        assert_eq!(word_at(2047), Some("zoo"));
        assert_eq!(word_at(2048), None);
    }

    #[test]
    fn test_index_of_roundtrip() {
        for index in [0u16, 1, 1023, 2046, 2047] {
            let word = word_at(index).unwrap();
            assert_eq!(index_of(word), Some(index));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(index_of("abandon"), Some(0));
        assert_eq!(index_of("Abandon"), None);
        assert_eq!(index_of("ABANDON"), None);
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(index_of("notaword"), None);
        assert_eq!(index_of(""), None);
    }

    #[test]
    fn test_words_are_sorted_and_unique() {
        for pair in WORDS.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
    }
}

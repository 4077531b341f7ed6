//! Word lists for hangman
//!
//! Provides the embedded default list and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_list_not_empty() {
        assert!(!DEFAULT_WORDS.is_empty());
    }

    #[test]
    fn default_entries_are_valid() {
        for &(word, hint) in DEFAULT_WORDS {
            assert!(
                WordEntry::new(word, hint).is_ok(),
                "Default word '{word}' is not a valid entry"
            );
            assert!(!hint.is_empty(), "Default word '{word}' has no hint");
        }
    }

    #[test]
    fn default_words_are_lowercase() {
        for &(word, _) in DEFAULT_WORDS {
            assert_eq!(word, word.to_lowercase(), "Word '{word}' is not lowercase");
        }
    }
}

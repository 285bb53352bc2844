//! Word lists for the game dictionary
//!
//! Provides the embedded fallback list, the file loader, and the immutable `WordList`
//! shared by every component.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use list::{MAX_DICTIONARY_WORD_LEN, WordList};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn default_words_are_lowercase_and_short() {
        for &word in DEFAULT_WORDS {
            assert!(
                word.chars().count() <= MAX_DICTIONARY_WORD_LEN,
                "Word '{word}' is longer than {MAX_DICTIONARY_WORD_LEN}"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_words_contain_a_start_word() {
        assert!(DEFAULT_WORDS.iter().any(|w| w.len() >= 4));
    }
}

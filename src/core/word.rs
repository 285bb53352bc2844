//! Game word representation
//!
//! A Word stores lowercase text together with its letter counts so dictionary scans
//! never recount the same word.

use super::LetterCounts;
use std::fmt;
use thiserror::Error;

/// A lowercase word with precomputed letter counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    len: usize,
    letters: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must not contain whitespace")]
    Whitespace,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - The text contains inner whitespace
    ///
    /// # Examples
    /// ```
    /// use word_chain::core::Word;
    ///
    /// let word = Word::new(" Listen ").unwrap();
    /// assert_eq!(word.text(), "listen");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::Whitespace);
        }

        let letters = LetterCounts::from_text(&text);
        let len = text.chars().count();

        Ok(Self { text, len, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false, a `Word` is never empty
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Letter counts of this word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterCounts {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("puzzle").unwrap();
        assert_eq!(word.text(), "puzzle");
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
        assert_eq!(word.letters().count('z'), 2);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("LETTER").unwrap();
        assert_eq!(word.text(), "letter");

        let word2 = Word::new("LeTtEr").unwrap();
        assert_eq!(word2.text(), "letter");
    }

    #[test]
    fn word_creation_trims() {
        let word = Word::new("  mind\n").unwrap();
        assert_eq!(word.text(), "mind");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("ice cream"), Err(WordError::Whitespace));
    }

    #[test]
    fn word_length_counts_characters() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("solve").unwrap();
        assert_eq!(format!("{word}"), "solve");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("game").unwrap();
        let word2 = Word::new("GAME").unwrap();
        let word3 = Word::new("mage").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
        assert!(word1.letters().is_anagram_of(word3.letters()));
    }
}

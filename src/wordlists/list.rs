//! Immutable game dictionary

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Longest word kept in the dictionary
pub const MAX_DICTIONARY_WORD_LEN: usize = 8;

/// The static dictionary
///
/// Loaded once, never mutated afterwards. Keeps the original file order for
/// iteration (hint ordering is stable with respect to it) and a hash set for
/// membership checks.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a dictionary from words, dropping duplicates and words that are too long
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if word.len() > MAX_DICTIONARY_WORD_LEN {
                continue;
            }
            if list.index.insert(word.text().to_string()) {
                list.words.push(word);
            }
        }
        list
    }

    /// Build a dictionary from string slices, skipping entries that are not valid words
    ///
    /// # Examples
    /// ```
    /// use word_chain::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(&["start", "Tar", "", "extremely"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.contains("tar"));
    /// assert!(!list.contains("extremely"));
    /// ```
    #[must_use]
    pub fn from_strs(words: &[&str]) -> Self {
        Self::new(words.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// Membership test on the exact (lowercase) text
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word
    #[must_use]
    pub fn max_len(&self) -> Option<usize> {
        self.words.iter().map(Word::len).max()
    }

    /// All words of exactly `len` characters, in dictionary order
    #[must_use]
    pub fn of_length(&self, len: usize) -> Vec<&Word> {
        self.words.iter().filter(|w| w.len() == len).collect()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_drops_duplicates() {
        let list = WordList::from_strs(&["mind", "game", "MIND", "play"]);
        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["mind", "game", "play"]);
    }

    #[test]
    fn drops_words_longer_than_eight() {
        let list = WordList::from_strs(&["sentence", "sentences"]);
        assert_eq!(list.len(), 1);
        assert!(list.contains("sentence"));
        assert!(!list.contains("sentences"));
    }

    #[test]
    fn max_len_and_of_length() {
        let list = WordList::from_strs(&["tar", "star", "start", "rats"]);
        assert_eq!(list.max_len(), Some(5));
        let fours: Vec<&str> = list.of_length(4).into_iter().map(Word::text).collect();
        assert_eq!(fours, vec!["star", "rats"]);
    }

    #[test]
    fn empty_list() {
        let list = WordList::default();
        assert!(list.is_empty());
        assert_eq!(list.max_len(), None);
        assert!(!list.contains("word"));
    }
}

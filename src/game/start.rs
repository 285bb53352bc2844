//! Start word selection

use crate::core::Word;
use crate::wordlists::{MAX_DICTIONARY_WORD_LEN, WordList};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Shortest acceptable start word
pub const MIN_START_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("Dictionary has no word of 4 to 8 letters")]
    NoStartWord,
}

/// Pick a random word of the longest available length
///
/// Prefers the longest words (at most eight letters) and steps down one length at a
/// time, never below four letters.
///
/// # Errors
///
/// Returns `StartError::NoStartWord` if the dictionary has no word of four letters or more.
///
/// # Examples
/// ```
/// use word_chain::game::pick_start_word;
/// use word_chain::wordlists::WordList;
///
/// let words = WordList::from_strs(&["tar", "star", "start"]);
/// let word = pick_start_word(&words, &mut rand::rng()).unwrap();
/// assert_eq!(word.text(), "start");
/// ```
pub fn pick_start_word<'a, R: Rng + ?Sized>(
    words: &'a WordList,
    rng: &mut R,
) -> Result<&'a Word, StartError> {
    let longest = words
        .max_len()
        .ok_or(StartError::NoStartWord)?
        .min(MAX_DICTIONARY_WORD_LEN);

    (MIN_START_LEN..=longest)
        .rev()
        .find_map(|len| words.of_length(len).choose(&mut *rng).copied())
        .ok_or(StartError::NoStartWord)
}

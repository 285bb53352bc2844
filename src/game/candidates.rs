//! Candidate move generation and terminal-state detection
//!
//! Lookahead only trusts the static dictionary. Words known solely to the external
//! oracle can still be played, but are never suggested or counted as remaining moves.

use super::GameHistory;
use crate::core::{LetterCounts, Rule, Word};
use crate::wordlists::WordList;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Dictionary words playable from a given word, split by rule
///
/// Both lists are sorted longest first; words of equal length keep dictionary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates<'a> {
    /// Words spelled only from the base word's letters
    pub original: Vec<&'a Word>,
    /// Remaining words sharing at least two letters with the base word
    pub modified: Vec<&'a Word>,
}

impl Candidates<'_> {
    /// True when no move is available under either rule
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty() && self.modified.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len() + self.modified.len()
    }
}

/// Find every dictionary word playable from `word`
///
/// Excludes `word` itself and anything already in `used`.
///
/// # Examples
/// ```
/// use word_chain::game::{GameHistory, find_candidates};
/// use word_chain::wordlists::WordList;
///
/// let words = WordList::from_strs(&["listen", "silent", "line", "stone", "box"]);
/// let found = find_candidates("listen", &words, &GameHistory::new());
///
/// let original: Vec<&str> = found.original.iter().map(|w| w.text()).collect();
/// assert_eq!(original, vec!["silent", "line"]);
/// assert_eq!(found.modified.len(), 1); // stone
/// ```
#[must_use]
pub fn find_candidates<'a>(word: &str, words: &'a WordList, used: &GameHistory) -> Candidates<'a> {
    if word.is_empty() {
        return Candidates::default();
    }

    let base = LetterCounts::from_text(word);

    let classified: Vec<(&Word, Rule)> = words
        .words()
        .par_iter()
        .filter(|candidate| is_eligible(candidate, word, used))
        .filter_map(|candidate| {
            Rule::classify(candidate.letters(), &base).map(|rule| (candidate, rule))
        })
        .collect();

    let (mut original, mut modified): (Vec<&Word>, Vec<&Word>) = (Vec::new(), Vec::new());
    for (candidate, rule) in classified {
        match rule {
            Rule::Original => original.push(candidate),
            Rule::Modified => modified.push(candidate),
        }
    }

    // Stable sort keeps dictionary order among equal lengths
    original.sort_by_key(|w| Reverse(w.len()));
    modified.sort_by_key(|w| Reverse(w.len()));

    Candidates { original, modified }
}

/// True if at least one dictionary word is still playable from `word`
#[must_use]
pub fn has_moves(word: &str, words: &WordList, used: &GameHistory) -> bool {
    if word.is_empty() {
        return false;
    }

    let base = LetterCounts::from_text(word);

    words.words().par_iter().any(|candidate| {
        is_eligible(candidate, word, used) && Rule::classify(candidate.letters(), &base).is_some()
    })
}

#[inline]
fn is_eligible(candidate: &Word, word: &str, used: &GameHistory) -> bool {
    candidate.text() != word && !used.contains(candidate.text())
}

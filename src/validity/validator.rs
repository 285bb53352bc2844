//! Word validity checks
//!
//! Resolution order, stopping at the first answer:
//! 1. Length outside 2..=15 is invalid
//! 2. Cached verdicts
//! 3. Static dictionary membership (cached as verified)
//! 4. External oracle (cached either way when it answers)
//!
//! Only plain letters are ever sent to the oracle; other words that reach step 4 are
//! invalid. If the oracle cannot answer, the dictionary decides and nothing is cached.

use super::cache::{Verdict, VerdictCache};
use super::oracle::{LookupOutcome, WordOracle};
use crate::wordlists::WordList;
use log::debug;

/// Shortest accepted word
pub const MIN_WORD_LEN: usize = 2;
/// Longest accepted word
pub const MAX_WORD_LEN: usize = 15;

/// Anything that can tell whether a word is playable
pub trait WordCheck: Sync {
    fn is_valid(&self, word: &str) -> bool;
}

/// Validity oracle combining the dictionary, a verdict cache and an external lookup
pub struct WordValidator<'a, O: WordOracle, C: VerdictCache> {
    words: &'a WordList,
    oracle: O,
    cache: C,
}

impl<'a, O: WordOracle, C: VerdictCache> WordValidator<'a, O, C> {
    pub const fn new(words: &'a WordList, oracle: O, cache: C) -> Self {
        Self {
            words,
            oracle,
            cache,
        }
    }

    /// The verdict cache (exposed for inspection)
    #[inline]
    pub const fn cache(&self) -> &C {
        &self.cache
    }

    /// Decide whether `word` (already lowercase) is a legitimate word
    ///
    /// The cache lock is never held while the oracle is consulted. Two concurrent
    /// lookups of the same unseen word may both reach the oracle; the later write wins.
    pub fn is_valid(&self, word: &str) -> bool {
        if !is_well_formed(word) {
            return false;
        }

        if let Some(verdict) = self.cache.get(word) {
            return verdict.is_valid();
        }

        if self.words.contains(word) {
            self.cache.insert(word, Verdict::Verified);
            return true;
        }

        if !word.chars().all(char::is_alphabetic) {
            return false;
        }

        match self.oracle.lookup(word) {
            LookupOutcome::Found => {
                self.cache.insert(word, Verdict::Verified);
                true
            }
            LookupOutcome::NotFound => {
                self.cache.insert(word, Verdict::Rejected);
                false
            }
            LookupOutcome::Unavailable(reason) => {
                debug!("Oracle unavailable for '{word}' ({reason}), using dictionary");
                self.words.contains(word)
            }
        }
    }
}

impl<O: WordOracle, C: VerdictCache> WordCheck for WordValidator<'_, O, C> {
    fn is_valid(&self, word: &str) -> bool {
        WordValidator::is_valid(self, word)
    }
}

/// Length check applied before any lookup
///
/// # Examples
/// ```
/// use word_chain::validity::is_well_formed;
///
/// assert!(is_well_formed("ox"));
/// assert!(is_well_formed("star's"));
/// assert!(!is_well_formed("a"));
/// assert!(!is_well_formed("abcdefghijklmnop"));
/// ```
#[must_use]
pub fn is_well_formed(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.chars().count())
}

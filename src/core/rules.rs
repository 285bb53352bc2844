//! Playability rules and move scoring
//!
//! A candidate is playable against a base word under one of two rules:
//! - Original rule: the candidate is spelled only from letters of the base word
//! - Modified rule: otherwise, the two words share at least two letter instances
//!
//! Submitted moves additionally distinguish anagrams, which score a bonus.

use super::LetterCounts;
use std::fmt;

/// Minimum number of shared letter instances for the modified rule
pub const MIN_SHARED_LETTERS: u32 = 2;

/// Rule a dictionary candidate satisfies against a base word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Built only from the base word's letters
    Original,
    /// Not a subset, but shares at least `MIN_SHARED_LETTERS` letters
    Modified,
}

impl Rule {
    /// Classify `candidate` against `base`
    ///
    /// The original rule takes precedence; a word satisfying it is never reported
    /// as satisfying the modified rule.
    ///
    /// # Examples
    /// ```
    /// use word_chain::core::{LetterCounts, Rule};
    ///
    /// let base = LetterCounts::from_text("listen");
    /// assert_eq!(Rule::classify(&LetterCounts::from_text("line"), &base), Some(Rule::Original));
    /// assert_eq!(Rule::classify(&LetterCounts::from_text("tile"), &base), Some(Rule::Original));
    /// assert_eq!(Rule::classify(&LetterCounts::from_text("stone"), &base), Some(Rule::Modified));
    /// assert_eq!(Rule::classify(&LetterCounts::from_text("box"), &base), None);
    /// ```
    #[must_use]
    pub fn classify(candidate: &LetterCounts, base: &LetterCounts) -> Option<Self> {
        if candidate.is_subset_of(base) {
            Some(Self::Original)
        } else if candidate.shared_with(base) >= MIN_SHARED_LETTERS {
            Some(Self::Modified)
        } else {
            None
        }
    }
}

/// Classification of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Same letters as the current word, rearranged
    Anagram,
    /// Spelled only from the current word's letters
    Subset,
    /// Shares at least two letters with the current word
    SharedLetters,
}

impl MoveKind {
    /// Classify a submitted word against the current word
    ///
    /// Anagrams are checked first, then the subset rule, then the shared-letter rule.
    #[must_use]
    pub fn classify(candidate: &LetterCounts, current: &LetterCounts) -> Option<Self> {
        if candidate.is_anagram_of(current) {
            return Some(Self::Anagram);
        }

        match Rule::classify(candidate, current)? {
            Rule::Original => Some(Self::Subset),
            Rule::Modified => Some(Self::SharedLetters),
        }
    }

    /// Points awarded per letter
    #[inline]
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::Anagram => 15,
            Self::Subset => 10,
            Self::SharedLetters => 5,
        }
    }

    /// Points for a word of `len` letters, halved (rounding down) when taken from a hint
    ///
    /// # Examples
    /// ```
    /// use word_chain::core::MoveKind;
    ///
    /// assert_eq!(MoveKind::Anagram.points(6, false), 90);
    /// assert_eq!(MoveKind::Anagram.points(6, true), 45);
    /// assert_eq!(MoveKind::SharedLetters.points(3, true), 7);
    /// ```
    #[must_use]
    pub const fn points(self, len: usize, from_hint: bool) -> u32 {
        let base = len as u32 * self.multiplier();
        if from_hint { base / 2 } else { base }
    }

    /// Wire name used in responses
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Anagram => "anagram",
            Self::Subset => "subset",
            Self::SharedLetters => "shared_letters",
        }
    }

    /// Player-facing acceptance message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Anagram => "Valid anagram! Bonus points!",
            Self::Subset => "Valid word!",
            Self::SharedLetters => "Valid word with modified rules!",
        }
    }

    /// Whether the move relied on the modified (shared-letter) rule
    #[inline]
    #[must_use]
    pub const fn is_modified_rule(self) -> bool {
        matches!(self, Self::SharedLetters)
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

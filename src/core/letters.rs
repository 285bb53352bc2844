//! Letter multiset comparison
//!
//! A `LetterCounts` maps every character of a word to the number of times it occurs.
//! All playability rules of the game are expressed as comparisons between two of them.

use rustc_hash::FxHashMap;

/// Letter frequency map of a word
///
/// Two words with equal counts are anagrams of each other. Absent letters count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Count every character of `text`
    ///
    /// # Examples
    /// ```
    /// use word_chain::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_text("start");
    /// assert_eq!(counts.count('t'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in text.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter` (0 when absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True if every letter here is available in `base` with sufficient multiplicity
    #[must_use]
    pub fn is_subset_of(&self, base: &Self) -> bool {
        self.counts
            .iter()
            .all(|(&letter, &count)| count <= base.count(letter))
    }

    /// Number of letter instances the two multisets have in common
    #[must_use]
    pub fn shared_with(&self, other: &Self) -> u32 {
        self.counts
            .iter()
            .map(|(&letter, &count)| count.min(other.count(letter)))
            .sum()
    }

    /// True if both multisets hold exactly the same letters with the same counts
    #[inline]
    #[must_use]
    pub fn is_anagram_of(&self, other: &Self) -> bool {
        self == other
    }
}

/// True if `candidate` can be spelled using only the letters of `base`
///
/// # Examples
/// ```
/// use word_chain::core::is_subset;
///
/// assert!(is_subset("tar", "start"));
/// assert!(!is_subset("tart", "star"));
/// ```
#[must_use]
pub fn is_subset(candidate: &str, base: &str) -> bool {
    LetterCounts::from_text(candidate).is_subset_of(&LetterCounts::from_text(base))
}

/// Sum over letters of the smaller occurrence count in either word
#[must_use]
pub fn shared_count(a: &str, b: &str) -> u32 {
    LetterCounts::from_text(a).shared_with(&LetterCounts::from_text(b))
}

/// True if the two words use identical letters with identical multiplicity
#[must_use]
pub fn is_anagram(a: &str, b: &str) -> bool {
    LetterCounts::from_text(a).is_anagram_of(&LetterCounts::from_text(b))
}

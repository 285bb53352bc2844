//! Hint selection
//!
//! Discloses a few of the best next moves without revealing all of them.

use super::{GameHistory, find_candidates};
use crate::wordlists::WordList;

/// Hints taken from each rule before rebalancing
pub const HINTS_PER_RULE: usize = 3;
/// Maximum number of hints disclosed at once
pub const HINT_BUDGET: usize = 6;

/// Hints for the current word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    /// Subset-rule words, longest first
    pub original: Vec<String>,
    /// Shared-letter-rule words, longest first
    pub modified: Vec<String>,
    pub game_over: bool,
}

impl Hints {
    #[must_use]
    pub fn len(&self) -> usize {
        self.original.len() + self.modified.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `word` was among the disclosed hints
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.original.iter().chain(&self.modified).any(|w| w == word)
    }
}

/// Picks hints from the dictionary
pub struct HintSelector<'a> {
    words: &'a WordList,
}

impl<'a> HintSelector<'a> {
    #[must_use]
    pub const fn new(words: &'a WordList) -> Self {
        Self { words }
    }

    /// Up to three hints per rule, topped up to six from the larger pool when the
    /// other one runs short
    ///
    /// `game_over` is reported only when `used` is non-empty.
    ///
    /// # Examples
    /// ```
    /// use word_chain::game::{GameHistory, HintSelector};
    /// use word_chain::wordlists::WordList;
    ///
    /// let words = WordList::from_strs(&["listen", "silent", "line", "stone"]);
    /// let hints = HintSelector::new(&words).hints("listen", &GameHistory::new());
    ///
    /// assert_eq!(hints.original, vec!["silent", "line"]);
    /// assert_eq!(hints.modified, vec!["stone"]);
    /// assert!(!hints.game_over);
    /// ```
    #[must_use]
    pub fn hints(&self, word: &str, used: &GameHistory) -> Hints {
        let word = word.trim().to_lowercase();
        let candidates = find_candidates(&word, self.words, used);

        let (original_take, modified_take) =
            hint_split(candidates.original.len(), candidates.modified.len());

        let game_over = !used.is_empty() && candidates.is_empty();

        Hints {
            original: candidates.original[..original_take]
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            modified: candidates.modified[..modified_take]
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            game_over,
        }
    }
}

/// How many hints to take from each pool
///
/// Each pool contributes up to `HINTS_PER_RULE`. When one pool is short and the
/// other has more to give, the larger pool fills the remaining budget.
#[must_use]
pub fn hint_split(original: usize, modified: usize) -> (usize, usize) {
    let mut original_take = original.min(HINTS_PER_RULE);
    let mut modified_take = modified.min(HINTS_PER_RULE);

    if original < HINTS_PER_RULE && modified > HINTS_PER_RULE {
        modified_take = modified.min(HINT_BUDGET - original_take);
    } else if modified < HINTS_PER_RULE && original > HINTS_PER_RULE {
        original_take = original.min(HINT_BUDGET - modified_take);
    }

    (original_take, modified_take)
}

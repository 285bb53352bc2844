//! Words already played in a game

use rustc_hash::FxHashSet;

/// Previously used words, in play order
///
/// Order only matters for display; exclusion logic uses set membership. The history
/// is owned by the client and sent along with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameHistory {
    order: Vec<String>,
    seen: FxHashSet<String>,
}

impl GameHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from raw words, lowercasing them
    ///
    /// # Examples
    /// ```
    /// use word_chain::game::GameHistory;
    ///
    /// let history = GameHistory::from_words(["Start", "tar", "start"]);
    /// assert_eq!(history.len(), 2);
    /// assert!(history.contains("start"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new();
        for word in words {
            history.push(word.as_ref());
        }
        history
    }

    /// Append a word; repeated words are ignored
    pub fn push(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        if self.seen.insert(word.clone()) {
            self.order.push(word);
        }
    }

    /// A copy of this history with one more word
    #[must_use]
    pub fn with(&self, word: &str) -> Self {
        let mut extended = self.clone();
        extended.push(word);
        extended
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

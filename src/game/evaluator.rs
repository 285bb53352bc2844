//! Move evaluation
//!
//! Validates a submitted word, classifies it against the current word, scores it and
//! checks whether the game can continue afterwards.

use super::{GameHistory, has_moves};
use crate::core::{LetterCounts, MoveKind};
use crate::validity::WordCheck;
use crate::wordlists::WordList;
use log::debug;
use std::fmt;

/// Suffix appended to acceptance messages for hint-assisted moves
pub const HINT_PENALTY_NOTE: &str = " (Half points for using hint)";

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Failed the validity check
    InvalidWord,
    /// Neither a subset of the current word nor sharing enough letters with it
    TooFewSharedLetters,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord => f.write_str("Not a valid word"),
            Self::TooFewSharedLetters => {
                f.write_str("The new word must use at least 2 letters from the current word")
            }
        }
    }
}

/// Outcome of evaluating one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub accepted: bool,
    pub points: u32,
    /// Set for accepted moves
    pub kind: Option<MoveKind>,
    /// Set for rejected moves
    pub reason: Option<RejectReason>,
    /// No dictionary move remains from the new word
    pub game_over: bool,
    pub message: String,
}

impl MoveResult {
    fn accepted(kind: MoveKind, points: u32, from_hint: bool, game_over: bool) -> Self {
        let note = if from_hint { HINT_PENALTY_NOTE } else { "" };
        Self {
            accepted: true,
            points,
            kind: Some(kind),
            reason: None,
            game_over,
            message: format!("{}{note}", kind.message()),
        }
    }

    fn rejected(reason: RejectReason) -> Self {
        Self {
            accepted: false,
            points: 0,
            kind: None,
            reason: Some(reason),
            game_over: false,
            message: reason.to_string(),
        }
    }
}

/// Scores submitted words against the current word
pub struct MoveEvaluator<'a, V: WordCheck + ?Sized> {
    words: &'a WordList,
    checker: &'a V,
}

impl<'a, V: WordCheck + ?Sized> MoveEvaluator<'a, V> {
    pub const fn new(words: &'a WordList, checker: &'a V) -> Self {
        Self { words, checker }
    }

    /// Evaluate `new_word` played on `current_word`
    ///
    /// Both words are lowercased first. Decision order: validity, anagram, subset,
    /// shared letters. Hint-assisted moves earn half points, rounded down.
    ///
    /// `game_over` is only computed when `used` is non-empty; on the first move it is
    /// always false, even if the new word has no follow-up.
    #[must_use]
    pub fn evaluate(
        &self,
        current_word: &str,
        new_word: &str,
        used: &GameHistory,
        from_hint: bool,
    ) -> MoveResult {
        let current = current_word.trim().to_lowercase();
        let candidate = new_word.trim().to_lowercase();

        if !self.checker.is_valid(&candidate) {
            debug!("Rejected '{candidate}': not a valid word");
            return MoveResult::rejected(RejectReason::InvalidWord);
        }

        let Some(kind) = MoveKind::classify(
            &LetterCounts::from_text(&candidate),
            &LetterCounts::from_text(&current),
        ) else {
            debug!("Rejected '{candidate}' on '{current}': too few shared letters");
            return MoveResult::rejected(RejectReason::TooFewSharedLetters);
        };

        let points = kind.points(candidate.chars().count(), from_hint);

        let game_over = if used.is_empty() {
            false
        } else {
            !has_moves(&candidate, self.words, &used.with(&current))
        };

        debug!("Accepted '{candidate}' on '{current}' as {kind} for {points} points");
        MoveResult::accepted(kind, points, from_hint, game_over)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts exactly the dictionary, no external lookups
    struct DictionaryOnly<'a>(&'a WordList);

    impl WordCheck for DictionaryOnly<'_> {
        fn is_valid(&self, word: &str) -> bool {
            self.0.contains(word)
        }
    }

    fn dictionary() -> WordList {
        WordList::from_strs(&[
            "listen", "silent", "line", "start", "tar", "rats", "cat", "dog", "stone", "tinsel",
        ])
    }

    fn evaluate(current: &str, new: &str, used: &[&str], from_hint: bool) -> MoveResult {
        let words = dictionary();
        let checker = DictionaryOnly(&words);
        let evaluator = MoveEvaluator::new(&words, &checker);
        evaluator.evaluate(current, new, &GameHistory::from_words(used), from_hint)
    }

    #[test]
    fn anagram_scores_fifteen_per_letter() {
        let result = evaluate("listen", "silent", &[], false);
        assert!(result.accepted);
        assert_eq!(result.kind, Some(MoveKind::Anagram));
        assert_eq!(result.points, 90);
        assert_eq!(result.message, "Valid anagram! Bonus points!");
    }

    #[test]
    fn anagram_from_hint_scores_half() {
        let result = evaluate("listen", "silent", &[], true);
        assert_eq!(result.points, 45);
        assert_eq!(
            result.message,
            "Valid anagram! Bonus points! (Half points for using hint)"
        );
    }

    #[test]
    fn subset_scores_ten_per_letter() {
        let result = evaluate("listen", "line", &[], false);
        assert!(result.accepted);
        assert_eq!(result.kind, Some(MoveKind::Subset));
        assert_eq!(result.points, 40);

        let result = evaluate("start", "tar", &[], false);
        assert_eq!(result.kind, Some(MoveKind::Subset));
        assert_eq!(result.points, 30);
    }

    #[test]
    fn shared_letters_score_five_per_letter() {
        let result = evaluate("listen", "stone", &[], false);
        assert!(result.accepted);
        assert_eq!(result.kind, Some(MoveKind::SharedLetters));
        assert_eq!(result.points, 25);
        assert_eq!(result.message, "Valid word with modified rules!");

        let hinted = evaluate("listen", "stone", &[], true);
        assert_eq!(hinted.points, 12);
    }

    #[test]
    fn unrelated_word_is_rejected() {
        let result = evaluate("cat", "dog", &[], false);
        assert!(!result.accepted);
        assert_eq!(result.points, 0);
        assert_eq!(result.reason, Some(RejectReason::TooFewSharedLetters));
        assert_eq!(
            result.message,
            "The new word must use at least 2 letters from the current word"
        );
        assert!(!result.game_over);
    }

    #[test]
    fn invalid_word_is_rejected_first() {
        let result = evaluate("listen", "enlist", &[], false);
        assert!(!result.accepted);
        assert_eq!(result.reason, Some(RejectReason::InvalidWord));
        assert_eq!(result.message, "Not a valid word");
    }

    #[test]
    fn input_is_lowercased() {
        let result = evaluate("LISTEN", "Silent", &[], false);
        assert_eq!(result.kind, Some(MoveKind::Anagram));
    }

    #[test]
    fn first_move_never_ends_the_game() {
        // "dog" has no follow-up in this dictionary, but the history is empty
        let result = evaluate("good", "dog", &[], false);
        assert!(result.accepted);
        assert!(!result.game_over);
    }

    #[test]
    fn game_over_when_no_moves_remain() {
        let result = evaluate("good", "dog", &["good"], false);
        assert!(result.accepted);
        assert!(result.game_over);
    }

    #[test]
    fn game_continues_when_moves_remain() {
        let result = evaluate("listen", "silent", &["start"], false);
        assert!(result.accepted);
        assert!(!result.game_over);
    }

    #[test]
    fn current_word_is_excluded_from_lookahead() {
        let words = WordList::from_strs(&["ab", "ba"]);
        let checker = DictionaryOnly(&words);
        let evaluator = MoveEvaluator::new(&words, &checker);

        // From "ba" the only move would be back to "ab", which is the current word
        let result = evaluator.evaluate("ab", "ba", &GameHistory::from_words(["xy"]), false);
        assert!(result.accepted);
        assert!(result.game_over);
    }
}

//! Formatting utilities for terminal output

use crate::core::MoveKind;

/// Short uppercase label for a move classification
#[must_use]
pub const fn kind_label(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Anagram => "ANAGRAM",
        MoveKind::Subset => "SUBSET",
        MoveKind::SharedLetters => "SHARED",
    }
}

/// Comma-separated word list, or a placeholder when empty
#[must_use]
pub fn word_list(words: &[String]) -> String {
    if words.is_empty() {
        "(none)".to_string()
    } else {
        words.join(", ")
    }
}

/// Signed point delta as shown after a move
#[must_use]
pub fn points_delta(points: u32) -> String {
    format!("+{points} {}", if points == 1 { "point" } else { "points" })
}

/// Spaced-out uppercase letters of a word, e.g. `L I S T E N`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(kind_label(MoveKind::Anagram), "ANAGRAM");
        assert_eq!(kind_label(MoveKind::SharedLetters), "SHARED");
    }

    #[test]
    fn word_list_empty_and_filled() {
        assert_eq!(word_list(&[]), "(none)");
        assert_eq!(
            word_list(&["tar".to_string(), "rat".to_string()]),
            "tar, rat"
        );
    }

    #[test]
    fn points_delta_pluralizes() {
        assert_eq!(points_delta(1), "+1 point");
        assert_eq!(points_delta(40), "+40 points");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("listen"), "L I S T E N");
        assert_eq!(spaced_letters(""), "");
    }
}

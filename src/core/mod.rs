//! Core domain types for the word-chain game
//!
//! This module contains the letter-multiset comparisons and the move rules built on them.
//! Everything here is pure and free of I/O.

mod letters;
mod rules;
mod word;

pub use letters::{LetterCounts, is_anagram, is_subset, shared_count};
pub use rules::{MIN_SHARED_LETTERS, MoveKind, Rule};
pub use word::{Word, WordError};

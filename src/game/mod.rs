//! Game rules engine
//!
//! Move evaluation, lookahead over the dictionary, hints and start word selection.

mod candidates;
pub mod evaluator;
pub mod hints;
mod history;
mod start;

pub use candidates::{Candidates, find_candidates, has_moves};
pub use evaluator::{MoveEvaluator, MoveResult, RejectReason};
pub use hints::{HintSelector, Hints};
pub use history::GameHistory;
pub use start::{MIN_START_LEN, StartError, pick_start_word};

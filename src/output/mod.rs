//! Terminal output formatting
//!
//! Display utilities for CLI results and the interactive game.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_hints, print_move_result, print_response, print_turn};

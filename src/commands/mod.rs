//! Command implementations

pub mod play;

pub use play::{Session, TurnOutcome, run_play};

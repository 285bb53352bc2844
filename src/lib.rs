//! Word Chain
//!
//! A word-chain game server: players turn the current word into a new word built from
//! its letters (or sharing at least two of them), earn points and may ask for hints.
//!
//! # Quick Start
//!
//! ```rust
//! use word_chain::game::{GameHistory, MoveEvaluator};
//! use word_chain::validity::{BoundedCache, OfflineOracle, WordValidator};
//! use word_chain::wordlists::WordList;
//!
//! let words = WordList::from_strs(&["listen", "silent", "line"]);
//! let validator = WordValidator::new(&words, OfflineOracle, BoundedCache::new(100));
//! let evaluator = MoveEvaluator::new(&words, &validator);
//!
//! let result = evaluator.evaluate("listen", "silent", &GameHistory::new(), false);
//! assert!(result.accepted);
//! assert_eq!(result.points, 90);
//! ```

// Core domain types
pub mod core;

// Runtime configuration
pub mod config;

// Word lists
pub mod wordlists;

// Word validity (dictionary, cache, external lookups)
pub mod validity;

// Game rules
pub mod game;

// Request handling and transports
pub mod server;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

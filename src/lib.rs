//! Wordle Ranker
//!
//! Plays Wordle automatically: guesses the best remaining candidate by
//! duplicate-letter sparsity and letter-frequency ranking, then narrows the
//! candidate pool with what the guess revealed.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranker::config::GameConfig;
//! use wordle_ranker::solver::Game;
//!
//! let dictionary: Vec<String> = ["alert", "alter", "later", "learn", "rates"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! let mut transcript: Vec<String> = Vec::new();
//! let summary = Game::new(&GameConfig::default(), &dictionary, "later")
//!     .unwrap()
//!     .play(&mut transcript);
//!
//! assert!(summary.solved());
//! assert_eq!(transcript[1], "Guess 1:     'alert'");
//! ```

// Run configuration
pub mod config;

// Core domain types
pub mod core;

// Constraint narrowing and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

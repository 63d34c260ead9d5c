//! Constraint narrowing and guess selection
//!
//! Each round the game selects a guess from the candidate pool, learns from it,
//! and filters the pool down to the words that are still possible.

mod constraints;
mod engine;
mod filter;
mod selector;

pub use constraints::{Constraints, excluded_letters, guessed_letters};
pub use engine::{
    Game, GameError, GameState, GameSummary, Turn, scored_dictionary, scored_pool,
};
pub use filter::{is_word_possible, possible_words};
pub use selector::select_guess;

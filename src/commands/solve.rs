//! Word solving command
//!
//! Plays a game against a target chosen by the user.

use crate::config::GameConfig;
use crate::output::Reporter;
use crate::solver::{Game, GameError, GameSummary};
use log::warn;

/// Solve a specific word with the dictionary as the candidate pool
///
/// A target missing from the dictionary is played anyway; such games
/// normally end with the pool exhausted.
///
/// # Errors
///
/// Returns an error if:
/// - The dictionary has no word of the configured length
/// - The target is not a word of the configured length
pub fn solve_word<P: Reporter + ?Sized>(
    config: &GameConfig,
    dictionary: &[String],
    target: &str,
    reporter: &mut P,
) -> Result<GameSummary, GameError> {
    let game = Game::new(config, dictionary, target)?;

    if !dictionary.iter().any(|word| word == game.target()) {
        warn!(
            "'{}' is not in the dictionary; it can never be guessed",
            game.target()
        );
    }

    Ok(game.play(reporter))
}

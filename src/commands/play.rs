//! Random game command
//!
//! Picks a hidden target from the dictionary and plays it out.

use crate::config::GameConfig;
use crate::output::Reporter;
use crate::solver::{Game, GameError, GameSummary};
use crate::wordlists::random_word;
use rand::Rng;

/// Play one game against a randomly chosen dictionary word
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if the dictionary has no word of the
/// configured length.
pub fn play_random<R, P>(
    config: &GameConfig,
    dictionary: &[String],
    rng: &mut R,
    reporter: &mut P,
) -> Result<GameSummary, GameError>
where
    R: Rng + ?Sized,
    P: Reporter + ?Sized,
{
    let target = random_word(dictionary, rng).ok_or(GameError::EmptyDictionary {
        length: config.word_length,
    })?;

    Ok(Game::new(config, dictionary, target)?.play(reporter))
}

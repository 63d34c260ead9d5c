//! Guess selection by duplicate sparsity, then letter-frequency ranking

use crate::core::Word;
use log::debug;
use std::cmp::Reverse;

/// Pick the most informative candidate from the pool
///
/// Words with fewer repeated letters are preferred: the allowed duplicate
/// count starts at zero and widens one step at a time until some word
/// qualifies. Among qualifying words the highest ranking wins. Which of
/// several equally ranked words is returned is unspecified.
///
/// Returns `None` when the pool is empty.
///
/// # Examples
/// ```
/// use wordle_ranker::core::{LetterFrequency, Word};
/// use wordle_ranker::solver::select_guess;
///
/// let texts = ["speed", "crane", "geese"];
/// let frequency = LetterFrequency::from_words(texts);
/// let pool: Vec<Word> = texts.iter().map(|t| Word::scored(*t, &frequency)).collect();
///
/// // "geese" ranks highest but repeats letters; "crane" has none
/// assert_eq!(select_guess(&pool).unwrap().text(), "crane");
/// assert!(select_guess(&[]).is_none());
/// ```
#[must_use]
pub fn select_guess(pool: &[Word]) -> Option<&Word> {
    // A word of length L repeats at most L - 1 letters
    let longest = pool.iter().map(Word::len).max()?;

    for allowed in 0..=longest as u32 {
        let mut eligible: Vec<&Word> = pool.iter().filter(|w| w.duplicates() <= allowed).collect();
        if eligible.is_empty() {
            continue;
        }

        debug!(
            "{} of {} candidates have at most {allowed} duplicate letters",
            eligible.len(),
            pool.len()
        );
        eligible.sort_by_key(|w| Reverse(w.ranking()));
        return eligible.first().copied();
    }

    None
}

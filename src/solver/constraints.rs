//! Accumulated knowledge about the hidden target
//!
//! Knowledge only ever grows: letters and positions are added after each
//! guess and never removed. Positions are 0-based indices into the word.

use crate::core::Word;
use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Constraints learned from the guesses played so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    known_letters: FxHashSet<u8>,
    known_positions: FxHashMap<usize, u8>,
    excluded_positions: FxHashMap<usize, FxHashSet<u8>>,
}

impl Constraints {
    /// Empty constraints, as at the start of a game
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters confirmed present somewhere in the target
    #[must_use]
    pub const fn known_letters(&self) -> &FxHashSet<u8> {
        &self.known_letters
    }

    /// Positions whose target letter has been confirmed
    #[must_use]
    pub const fn known_positions(&self) -> &FxHashMap<usize, u8> {
        &self.known_positions
    }

    /// Letters confirmed absent at each position
    #[must_use]
    pub const fn excluded_positions(&self) -> &FxHashMap<usize, FxHashSet<u8>> {
        &self.excluded_positions
    }

    /// True if nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known_letters.is_empty()
            && self.known_positions.is_empty()
            && self.excluded_positions.is_empty()
    }

    /// Apply all three update rules for one played guess
    pub fn update(&mut self, guess: &Word, target: &str) {
        self.update_known_letters(guess, target);
        self.update_known_positions(guess, target);
        self.update_excluded_positions(guess, target);
    }

    /// Record every target letter that also appears anywhere in the guess
    pub fn update_known_letters(&mut self, guess: &Word, target: &str) {
        if !same_length(guess, target) {
            return;
        }

        for letter in target.bytes() {
            if guess.has_letter(letter) {
                self.known_letters.insert(letter);
            }
        }
    }

    /// Record exact matches; a known position is never overwritten
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{LetterFrequency, Word};
    /// use wordle_ranker::solver::Constraints;
    ///
    /// let guess = Word::scored("alert", &LetterFrequency::default());
    /// let mut constraints = Constraints::new();
    /// constraints.update_known_positions(&guess, "alter");
    ///
    /// assert_eq!(constraints.known_positions().get(&0), Some(&b'a'));
    /// assert_eq!(constraints.known_positions().get(&1), Some(&b'l'));
    /// assert_eq!(constraints.known_positions().get(&2), None);
    /// ```
    pub fn update_known_positions(&mut self, guess: &Word, target: &str) {
        if !same_length(guess, target) {
            return;
        }

        for (i, (&guessed, expected)) in guess.letters().iter().zip(target.bytes()).enumerate() {
            if guessed == expected {
                self.known_positions.entry(i).or_insert(expected);
            }
        }
    }

    /// Record each mismatched guess letter as excluded at its position
    pub fn update_excluded_positions(&mut self, guess: &Word, target: &str) {
        if !same_length(guess, target) {
            return;
        }

        for (i, (&guessed, expected)) in guess.letters().iter().zip(target.bytes()).enumerate() {
            if guessed != expected {
                self.excluded_positions.entry(i).or_default().insert(guessed);
            }
        }
    }
}

/// Every letter that appears in any guess of the history
///
/// # Examples
/// ```
/// use wordle_ranker::core::{LetterFrequency, Word};
/// use wordle_ranker::solver::guessed_letters;
///
/// let frequency = LetterFrequency::default();
/// let history = [Word::scored("alert", &frequency), Word::scored("stone", &frequency)];
/// let letters = guessed_letters(&history);
///
/// assert_eq!(letters.len(), 8);
/// assert!(letters.contains(&b's'));
/// ```
#[must_use]
pub fn guessed_letters<'a>(history: impl IntoIterator<Item = &'a Word>) -> FxHashSet<u8> {
    history
        .into_iter()
        .flat_map(|word| word.letters().iter().copied())
        .collect()
}

/// Guessed letters that are not known letters, i.e. absent from the target
#[must_use]
pub fn excluded_letters<S1, S2>(guessed: &HashSet<u8, S1>, known: &HashSet<u8, S2>) -> FxHashSet<u8>
where
    S1: BuildHasher,
    S2: BuildHasher,
{
    guessed
        .iter()
        .filter(|letter| !known.contains(*letter))
        .copied()
        .collect()
}

fn same_length(guess: &Word, target: &str) -> bool {
    if guess.len() == target.len() {
        return true;
    }
    trace!(
        "ignoring update: guess '{guess}' has {} letters, target has {}",
        guess.len(),
        target.len()
    );
    false
}

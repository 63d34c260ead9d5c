//! Candidate filtering against accumulated constraints

use super::constraints::{Constraints, excluded_letters};
use crate::core::Word;
use log::trace;
use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Check whether `word` is still consistent with everything learned so far
///
/// A word is eliminated if it:
/// 1. misses a known position (including being too short to have it)
/// 2. has a letter at a position where that letter is excluded
/// 3. lacks a known letter
/// 4. contains a guessed letter that is not a known letter
///
/// # Examples
/// ```
/// use wordle_ranker::core::{LetterFrequency, Word};
/// use wordle_ranker::solver::{Constraints, guessed_letters, is_word_possible};
///
/// let frequency = LetterFrequency::default();
/// let guess = Word::scored("stone", &frequency);
/// let mut constraints = Constraints::new();
/// constraints.update(&guess, "later");
/// let guessed = guessed_letters(&[guess]);
///
/// assert!(is_word_possible(&Word::scored("later", &frequency), &guessed, &constraints));
/// // contains 's', which has been guessed and is not in the target
/// assert!(!is_word_possible(&Word::scored("rates", &frequency), &guessed, &constraints));
/// ```
#[must_use]
pub fn is_word_possible<S: BuildHasher>(
    word: &Word,
    guessed_letters: &HashSet<u8, S>,
    constraints: &Constraints,
) -> bool {
    let excluded = excluded_letters(guessed_letters, constraints.known_letters());
    matches_constraints(word, &excluded, constraints)
}

/// Keep the words of `pool` that are still possible, preserving order
#[must_use]
pub fn possible_words<S: BuildHasher>(
    pool: &[Word],
    guessed_letters: &HashSet<u8, S>,
    constraints: &Constraints,
) -> Vec<Word> {
    let excluded = excluded_letters(guessed_letters, constraints.known_letters());

    pool.iter()
        .filter(|word| matches_constraints(word, &excluded, constraints))
        .cloned()
        .collect()
}

fn matches_constraints(word: &Word, excluded: &FxHashSet<u8>, constraints: &Constraints) -> bool {
    let letters = word.letters();

    for (&i, &letter) in constraints.known_positions() {
        if letters.get(i) != Some(&letter) {
            trace!("{word}: position {i} is not '{}'", letter as char);
            return false;
        }
    }

    let excluded_positions = constraints.excluded_positions();
    for (i, letter) in letters.iter().enumerate() {
        if excluded_positions
            .get(&i)
            .is_some_and(|banned| banned.contains(letter))
        {
            trace!("{word}: '{}' excluded at position {i}", *letter as char);
            return false;
        }
    }

    if let Some(&missing) = constraints
        .known_letters()
        .iter()
        .find(|&&letter| !word.has_letter(letter))
    {
        trace!("{word}: lacks known letter '{}'", missing as char);
        return false;
    }

    if let Some(&absent) = letters.iter().find(|&&letter| excluded.contains(&letter)) {
        trace!("{word}: contains excluded letter '{}'", absent as char);
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFrequency;
    use crate::solver::guessed_letters;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::scored(text, &LetterFrequency::default())
    }

    fn pool(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    /// Constraints and guessed letters after playing `guesses` against `target`
    fn after(guesses: &[&str], target: &str) -> (Constraints, FxHashSet<u8>) {
        let history = pool(guesses);
        let mut constraints = Constraints::new();
        for guess in &history {
            constraints.update(guess, target);
        }
        (constraints, guessed_letters(&history))
    }

    #[test]
    fn everything_possible_without_knowledge() {
        let constraints = Constraints::new();
        let guessed = FxHashSet::default();
        for text in ["alert", "zzzzz", "ab"] {
            assert!(is_word_possible(&word(text), &guessed, &constraints));
        }
    }

    #[test]
    fn known_position_mismatch_eliminates() {
        let (constraints, guessed) = after(&["alter"], "later");
        // t, e, r fixed at 2, 3, 4
        assert!(is_word_possible(&word("later"), &guessed, &constraints));
        assert!(!is_word_possible(&word("alert"), &guessed, &constraints));
    }

    #[test]
    fn short_word_misses_known_position() {
        let (constraints, guessed) = after(&["crane"], "brine");
        assert!(!is_word_possible(&word("br"), &guessed, &constraints));
    }

    #[test]
    fn excluded_position_eliminates() {
        let (constraints, guessed) = after(&["alert"], "later");
        // every letter is known, but each is banned from its guessed position
        assert!(!is_word_possible(&word("alter"), &guessed, &constraints));
        assert!(is_word_possible(&word("later"), &guessed, &constraints));
    }

    #[test]
    fn missing_known_letter_eliminates() {
        let (constraints, guessed) = after(&["stone"], "later");
        // t and e are known letters
        assert!(!is_word_possible(&word("bulky"), &guessed, &constraints));
    }

    #[test]
    fn excluded_letter_eliminates() {
        let (constraints, guessed) = after(&["stone"], "later");
        assert!(!is_word_possible(&word("rates"), &guessed, &constraints));
        assert!(!is_word_possible(&word("alone"), &guessed, &constraints));
        assert!(is_word_possible(&word("later"), &guessed, &constraints));
    }

    #[test]
    fn possible_words_preserves_order() {
        let words = pool(&["alert", "alter", "later", "learn", "rates"]);
        let (constraints, guessed) = after(&["alert"], "later");

        let remaining = possible_words(&words, &guessed, &constraints);
        // alert and alter hit excluded positions, learn has r at 3, rates lacks l
        assert_eq!(texts(&remaining), vec!["later"]);
    }

    #[test]
    fn possible_words_keeps_order_of_survivors() {
        let words = pool(&["tamer", "later", "taker", "eater", "hater"]);
        let (constraints, guessed) = after(&["liter"], "later");

        let remaining = possible_words(&words, &guessed, &constraints);
        assert_eq!(texts(&remaining), vec!["later"]);

        let (constraints, guessed) = after(&["crown"], "later");
        let remaining = possible_words(&words, &guessed, &constraints);
        assert_eq!(texts(&remaining), vec!["tamer", "later", "taker", "eater", "hater"]);
    }

    #[test]
    fn guessed_letters_from_any_hasher() {
        let (constraints, _) = after(&["stone"], "later");
        let guessed: HashSet<u8> = b"stone".iter().copied().collect();

        assert!(is_word_possible(&word("later"), &guessed, &constraints));
        let remaining = possible_words(&pool(&["rates", "later"]), &guessed, &constraints);
        assert_eq!(texts(&remaining), vec!["later"]);
    }

    #[test]
    fn possible_words_empty_pool() {
        let (constraints, guessed) = after(&["alert"], "later");
        assert!(possible_words(&[], &guessed, &constraints).is_empty());
    }

    proptest! {
        #[test]
        fn filter_is_monotonic(
            candidate in "[a-f]{4}",
            target in "[a-f]{4}",
            first in proptest::collection::vec("[a-f]{4}", 1..4),
            more in proptest::collection::vec("[a-f]{4}", 1..4),
        ) {
            let candidate = word(&candidate);
            let mut history = pool(&first.iter().map(String::as_str).collect::<Vec<_>>());
            let mut constraints = Constraints::new();
            for guess in &history {
                constraints.update(guess, &target);
            }

            if !is_word_possible(&candidate, &guessed_letters(&history), &constraints) {
                for text in &more {
                    let guess = word(text);
                    constraints.update(&guess, &target);
                    history.push(guess);
                }
                prop_assert!(!is_word_possible(&candidate, &guessed_letters(&history), &constraints));
            }
        }

        #[test]
        fn target_is_never_eliminated(
            target in "[a-f]{5}",
            guesses in proptest::collection::vec("[a-f]{5}", 1..6),
        ) {
            let history = pool(&guesses.iter().map(String::as_str).collect::<Vec<_>>());
            let mut constraints = Constraints::new();
            for guess in &history {
                constraints.update(guess, &target);
            }
            prop_assert!(is_word_possible(&word(&target), &guessed_letters(&history), &constraints));
        }

        #[test]
        fn pool_never_grows(
            words in proptest::collection::vec("[a-f]{4}", 0..20),
            target in "[a-f]{4}",
            guesses in proptest::collection::vec("[a-f]{4}", 1..5),
        ) {
            let mut current = pool(&words.iter().map(String::as_str).collect::<Vec<_>>());
            let mut history = Vec::new();
            let mut constraints = Constraints::new();
            for text in &guesses {
                let guess = word(text);
                constraints.update(&guess, &target);
                history.push(guess);

                let next = possible_words(&current, &guessed_letters(&history), &constraints);
                prop_assert!(next.len() <= current.len());
                current = next;
            }
        }
    }
}

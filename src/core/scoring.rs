//! Per-word scores used to order guesses

use super::LetterFrequency;
use rustc_hash::FxHashMap;

/// Count letter occurrences that repeat an earlier letter in the same word
///
/// A letter appearing three times contributes two.
///
/// # Examples
/// ```
/// use wordle_ranker::core::duplicate_count;
///
/// assert_eq!(duplicate_count("crane"), 0);
/// assert_eq!(duplicate_count("speed"), 1);
/// assert_eq!(duplicate_count("eerie"), 2);
/// ```
#[must_use]
pub fn duplicate_count(word: &str) -> u32 {
    let mut seen: FxHashMap<u8, u32> = FxHashMap::default();
    let mut count = 0;

    for &letter in word.as_bytes() {
        let occurrences = seen.entry(letter).or_insert(0);
        *occurrences += 1;
        if *occurrences > 1 {
            count += 1;
        }
    }

    count
}

/// Sum the dictionary frequency of every letter in the word
///
/// Repeated letters are counted each time they occur.
#[must_use]
pub fn ranking_score(word: &str, frequency: &LetterFrequency) -> u32 {
    word.bytes().map(|letter| frequency.count(letter)).sum()
}

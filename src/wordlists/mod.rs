//! Word lists and target selection
//!
//! Provides the embedded default dictionary, file loading, and the random
//! target picker.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick one word uniformly at random, `None` if the list is empty
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_ranker::wordlists::random_word;
///
/// let words = vec!["crane".to_string(), "slate".to_string()];
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let target = random_word(&words, &mut rng).unwrap();
/// assert!(words.contains(target));
/// assert!(random_word(&[], &mut rng).is_none());
/// ```
pub fn random_word<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Option<&'a String> {
    words.choose(rng)
}

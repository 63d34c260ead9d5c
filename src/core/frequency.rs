//! Dictionary-wide letter frequency table

use rustc_hash::FxHashMap;

/// Occurrence count of every letter across a word list
///
/// A letter appearing twice in one word counts twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: FxHashMap<u8, u32>,
}

impl LetterFrequency {
    /// Count letters across all words
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::LetterFrequency;
    ///
    /// let frequency = LetterFrequency::from_words(["speed", "crane"]);
    /// assert_eq!(frequency.count(b'e'), 3);
    /// assert_eq!(frequency.count(b'c'), 1);
    /// assert_eq!(frequency.count(b'z'), 0);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<u8, u32> = FxHashMap::default();
        for word in words {
            for &letter in word.as_ref().as_bytes() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }

        Self { counts }
    }

    /// Occurrences of `letter`, zero if it never appears
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Letters ordered from most to least common, ties broken alphabetically
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, u32)> {
        let mut entries: Vec<(u8, u32)> = self.counts.iter().map(|(&l, &c)| (l, c)).collect();
        entries.sort_by(|(l1, c1), (l2, c2)| c2.cmp(c1).then(l1.cmp(l2)));
        entries
    }
}

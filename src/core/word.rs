//! Candidate word representation
//!
//! A `Word` stores the letters of a dictionary entry together with the two
//! scores the guess selector needs. Both scores are computed once, when the
//! word enters the candidate pool.

use super::{LetterFrequency, duplicate_count, ranking_score};
use std::fmt;
use thiserror::Error;

/// A scored candidate word
///
/// The `Default` value (empty text, zero duplicates, zero ranking) is the
/// "no guess" value and never appears in a candidate pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    duplicates: u32,
    ranking: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Normalize and validate a raw word for a game of the given word length
///
/// The text is trimmed and lowercased before checking.
///
/// # Errors
/// Returns `WordError` if:
/// - Length is not exactly `length`
/// - Contains non-ASCII characters
/// - Contains non-alphabetic characters
///
/// # Examples
/// ```
/// use wordle_ranker::core::validate;
///
/// assert_eq!(validate(" Later ", 5).unwrap(), "later");
/// assert!(validate("lat3r", 5).is_err());
/// assert!(validate("late", 5).is_err());
/// ```
pub fn validate(text: &str, length: usize) -> Result<String, WordError> {
    let text = text.trim().to_lowercase();

    if !text.is_ascii() {
        return Err(WordError::NonAscii);
    }

    if text.len() != length {
        return Err(WordError::InvalidLength {
            expected: length,
            actual: text.len(),
        });
    }

    if !text.bytes().all(|c| c.is_ascii_lowercase()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(text)
}

impl Word {
    /// Score a word against the dictionary's letter frequencies
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{LetterFrequency, Word};
    ///
    /// let frequency = LetterFrequency::from_words(["speed", "crane"]);
    /// let word = Word::scored("speed", &frequency);
    ///
    /// assert_eq!(word.duplicates(), 1);
    /// // s(1) + p(1) + e(3) + e(3) + d(1)
    /// assert_eq!(word.ranking(), 9);
    /// ```
    #[must_use]
    pub fn scored(text: impl Into<String>, frequency: &LetterFrequency) -> Self {
        let text = text.into();
        let duplicates = duplicate_count(&text);
        let ranking = ranking_score(&text, frequency);

        Self {
            text,
            duplicates,
            ranking,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True for the "no guess" value
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// How many letter occurrences repeat an earlier letter
    #[inline]
    #[must_use]
    pub const fn duplicates(&self) -> u32 {
        self.duplicates
    }

    /// Sum of dictionary-wide frequencies of every letter in the word
    #[inline]
    #[must_use]
    pub const fn ranking(&self) -> u32 {
        self.ranking
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

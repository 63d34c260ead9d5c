//! Word analysis command
//!
//! Shows how the guess selector sees a single word.

use crate::config::GameConfig;
use crate::core::{Word, validate};
use crate::solver::{GameError, scored_dictionary};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub duplicates: u32,
    pub ranking: u32,
    /// 1-based position in the selector's preference order
    pub rank: usize,
    pub total_words: usize,
    pub in_dictionary: bool,
    /// Dictionary letters from most to least common
    pub letter_frequency: Vec<(u8, u32)>,
}

/// Score a word against the dictionary and place it in the selector's order
///
/// Fewer duplicate letters come first; among equals, higher ranking comes
/// first. Words that tie with this one do not push it down.
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a word of the configured length
/// - The dictionary has no word of the configured length
pub fn analyze_word(
    word: &str,
    config: &GameConfig,
    dictionary: &[String],
) -> Result<AnalysisResult, GameError> {
    let text = validate(word, config.word_length)?;
    let (pool, frequency) = scored_dictionary(config, dictionary)?;
    let scored = Word::scored(text, &frequency);

    let ahead = pool
        .iter()
        .filter(|w| {
            w.duplicates() < scored.duplicates()
                || (w.duplicates() == scored.duplicates() && w.ranking() > scored.ranking())
        })
        .count();

    Ok(AnalysisResult {
        in_dictionary: pool.iter().any(|w| w.text() == scored.text()),
        word: scored.text().to_string(),
        duplicates: scored.duplicates(),
        ranking: scored.ranking(),
        rank: ahead + 1,
        total_words: pool.len(),
        letter_frequency: frequency.ranked(),
    })
}

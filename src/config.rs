//! Run configuration
//!
//! Settings that the reference game hard-coded are passed explicitly instead.

use std::path::PathBuf;

/// Default word length for a game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Settings the game loop needs at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self { word_length }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH)
    }
}

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// Word list compiled into the binary
    #[default]
    Embedded,
    /// Newline-separated word list on disk
    File(PathBuf),
}

/// Everything a command needs to set up a run
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub dictionary: DictionarySource,
    pub game: GameConfig,
    pub seed: Option<u64>,
}

impl RunConfig {
    #[must_use]
    pub fn new(dictionary: Option<PathBuf>, word_length: usize, seed: Option<u64>) -> Self {
        Self {
            dictionary: dictionary.map_or(DictionarySource::Embedded, DictionarySource::File),
            game: GameConfig::new(word_length),
            seed,
        }
    }
}

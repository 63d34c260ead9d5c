//! Game loop
//!
//! Drives one game from the full dictionary to a terminal state:
//! select a guess, learn from it against the target, filter the pool.

use super::{Constraints, excluded_letters, guessed_letters, possible_words, select_guess};
use crate::config::GameConfig;
use crate::core::{LetterFrequency, Word, WordError, validate};
use crate::output::Reporter;
use log::debug;
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// The last guess was the target
    Solved,
    /// The candidate pool ran empty before the target was guessed
    Exhausted,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Error type for games that cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("No words found with length {length}")]
    EmptyDictionary { length: usize },

    #[error("invalid target word: {0}")]
    InvalidTarget(#[from] WordError),
}

/// One played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Letters known to be in the target after this guess, sorted
    pub known_letters: Vec<u8>,
    /// Guessed letters known to be absent from the target, sorted
    pub absent_letters: Vec<u8>,
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub target: String,
    pub state: GameState,
    pub turns: Vec<Turn>,
}

impl GameSummary {
    #[must_use]
    pub fn solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Number of guesses played
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.turns.len()
    }
}

/// Score every dictionary word of the configured length
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if no word has the configured length.
pub fn scored_pool(config: &GameConfig, dictionary: &[String]) -> Result<Vec<Word>, GameError> {
    scored_dictionary(config, dictionary).map(|(pool, _)| pool)
}

/// Score every dictionary word of the configured length, keeping the
/// letter frequency table the scores were computed from
///
/// Frequencies are counted over exactly the words that enter the pool.
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if no word has the configured length.
pub fn scored_dictionary(
    config: &GameConfig,
    dictionary: &[String],
) -> Result<(Vec<Word>, LetterFrequency), GameError> {
    let length = config.word_length;
    let words: Vec<&str> = dictionary
        .iter()
        .map(String::as_str)
        .filter(|w| w.len() == length)
        .collect();

    if words.is_empty() {
        return Err(GameError::EmptyDictionary { length });
    }

    let frequency = LetterFrequency::from_words(&words);
    let pool = words.iter().map(|w| Word::scored(*w, &frequency)).collect();
    Ok((pool, frequency))
}

/// A single automated game against a known target
#[derive(Debug, Clone)]
pub struct Game {
    target: String,
    pool: Vec<Word>,
    constraints: Constraints,
    turns: Vec<Turn>,
    state: GameState,
}

impl Game {
    /// Build the scored candidate pool and start a game
    ///
    /// Dictionary entries whose length differs from the configured word
    /// length are left out of the pool.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no dictionary word has the
    /// configured length, or `GameError::InvalidTarget` if the target is not
    /// a word of that length.
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::config::GameConfig;
    /// use wordle_ranker::solver::{Game, GameState};
    ///
    /// let dictionary: Vec<String> = ["alert", "alter", "later", "learn", "rates"]
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    ///
    /// let mut game = Game::new(&GameConfig::default(), &dictionary, "later").unwrap();
    /// while !game.step().is_terminal() {}
    ///
    /// assert_eq!(game.state(), GameState::Solved);
    /// assert_eq!(game.turns().last().unwrap().guess.text(), "later");
    /// ```
    pub fn new(config: &GameConfig, dictionary: &[String], target: &str) -> Result<Self, GameError> {
        let pool = scored_pool(config, dictionary)?;
        Self::with_pool(config, pool, target)
    }

    /// Start a game from an already scored pool
    ///
    /// Lets many games share one scoring pass over the dictionary.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Game::new`].
    pub fn with_pool(config: &GameConfig, pool: Vec<Word>, target: &str) -> Result<Self, GameError> {
        let length = config.word_length;
        if pool.is_empty() {
            return Err(GameError::EmptyDictionary { length });
        }

        let target = validate(target, length)?;
        debug!("starting game for '{target}' with {} candidates", pool.len());

        Ok(Self {
            target,
            pool,
            constraints: Constraints::new(),
            turns: Vec::new(),
            state: GameState::Running,
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Candidates still consistent with everything learned
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Guesses played so far, in order
    pub fn history(&self) -> impl Iterator<Item = &Word> {
        self.turns.iter().map(|turn| &turn.guess)
    }

    /// Play one round
    ///
    /// Stepping a finished game changes nothing and returns its final state.
    pub fn step(&mut self) -> GameState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some(guess) = select_guess(&self.pool).cloned() else {
            debug!("no candidates left for '{}'", self.target);
            self.state = GameState::Exhausted;
            return self.state;
        };

        let candidates_before = self.pool.len();
        let guessed = guessed_letters(self.history().chain(std::iter::once(&guess)));
        self.constraints.update(&guess, &self.target);
        self.pool = possible_words(&self.pool, &guessed, &self.constraints);

        debug!(
            "guess {} '{guess}': {candidates_before} -> {} candidates",
            self.turns.len() + 1,
            self.pool.len()
        );

        if guess.text() == self.target {
            self.state = GameState::Solved;
        }

        let known = self.constraints.known_letters();
        let mut known_letters: Vec<u8> = known.iter().copied().collect();
        known_letters.sort_unstable();
        let mut absent_letters: Vec<u8> = excluded_letters(&guessed, known).into_iter().collect();
        absent_letters.sort_unstable();

        self.turns.push(Turn {
            guess,
            candidates_before,
            candidates_after: self.pool.len(),
            known_letters,
            absent_letters,
        });

        self.state
    }

    /// Play to the end, reporting the target, every guess, and the outcome
    pub fn play<R: Reporter + ?Sized>(mut self, reporter: &mut R) -> GameSummary {
        reporter.target(&self.target);

        while !self.state.is_terminal() {
            if self.step() == GameState::Exhausted {
                reporter.exhausted();
            } else if let Some(turn) = self.turns.last() {
                reporter.guess(self.turns.len(), turn);
            }
        }

        if self.state == GameState::Solved {
            reporter.solved(&self.target, self.turns.len());
        }

        GameSummary {
            target: self.target,
            state: self.state,
            turns: self.turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Silent;

    fn dictionary(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn five_words() -> Vec<String> {
        dictionary(&["alert", "alter", "later", "learn", "rates"])
    }

    #[test]
    fn new_game_starts_running_with_full_pool() {
        let game = Game::new(&GameConfig::default(), &five_words(), "later").unwrap();
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.pool().len(), 5);
        assert!(game.constraints().is_empty());
        assert!(game.turns().is_empty());
        assert_eq!(game.target(), "later");
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let result = Game::new(&GameConfig::default(), &[], "later");
        assert_eq!(
            result.unwrap_err(),
            GameError::EmptyDictionary { length: 5 }
        );
    }

    #[test]
    fn dictionary_without_matching_length_is_empty() {
        let result = Game::new(&GameConfig::new(6), &five_words(), "planet");
        assert_eq!(
            result.unwrap_err(),
            GameError::EmptyDictionary { length: 6 }
        );
    }

    #[test]
    fn wrong_length_target_is_rejected() {
        let result = Game::new(&GameConfig::default(), &five_words(), "late");
        assert!(matches!(result, Err(GameError::InvalidTarget(_))));
    }

    #[test]
    fn pool_ignores_words_of_other_lengths() {
        let words = dictionary(&["alert", "at", "alerts", "later"]);
        let game = Game::new(&GameConfig::default(), &words, "later").unwrap();
        let texts: Vec<&str> = game.pool().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["alert", "later"]);
    }

    #[test]
    fn games_can_share_a_scored_pool() {
        let config = GameConfig::default();
        let pool = scored_pool(&config, &five_words()).unwrap();
        assert_eq!(pool.len(), 5);

        for target in ["alert", "learn", "rates"] {
            let summary = Game::with_pool(&config, pool.clone(), target)
                .unwrap()
                .play(&mut Silent);
            assert!(summary.solved());
        }
    }

    #[test]
    fn scored_dictionary_keeps_its_frequency_table() {
        let words = dictionary(&["alert", "at", "later"]);
        let (pool, frequency) = scored_dictionary(&GameConfig::default(), &words).unwrap();

        // "at" is not in the pool, so it is not counted either
        assert_eq!(frequency, LetterFrequency::from_words(["alert", "later"]));
        assert_eq!(frequency.count(b'a'), 2);
        assert!(pool.iter().all(|w| w.ranking() == 10));
    }

    #[test]
    fn with_pool_rejects_empty_pool() {
        let result = Game::with_pool(&GameConfig::default(), Vec::new(), "later");
        assert_eq!(
            result.unwrap_err(),
            GameError::EmptyDictionary { length: 5 }
        );
    }

    #[test]
    fn five_word_dictionary_solves_in_two() {
        let mut game = Game::new(&GameConfig::default(), &five_words(), "later").unwrap();

        assert_eq!(game.step(), GameState::Running);
        assert_eq!(game.turns()[0].guess.text(), "alert");
        assert_eq!(game.turns()[0].candidates_before, 5);
        assert_eq!(game.turns()[0].candidates_after, 1);

        assert_eq!(game.step(), GameState::Solved);
        assert_eq!(game.turns()[1].guess.text(), "later");
    }

    #[test]
    fn turns_record_known_and_absent_letters() {
        // stone and later tie on ranking; stone comes first
        let words = dictionary(&["stone", "later"]);
        let mut game = Game::new(&GameConfig::default(), &words, "later").unwrap();
        game.step();

        let turn = &game.turns()[0];
        assert_eq!(turn.guess.text(), "stone");
        assert_eq!(turn.known_letters, b"et".to_vec());
        assert_eq!(turn.absent_letters, b"nos".to_vec());
    }

    #[test]
    fn first_guess_solves_immediately() {
        let mut game = Game::new(&GameConfig::default(), &five_words(), "alert").unwrap();
        assert_eq!(game.step(), GameState::Solved);
        assert_eq!(game.turns().len(), 1);
    }

    #[test]
    fn stepping_a_finished_game_is_a_no_op() {
        let mut game = Game::new(&GameConfig::default(), &five_words(), "alert").unwrap();
        game.step();
        let turns = game.turns().len();
        assert_eq!(game.step(), GameState::Solved);
        assert_eq!(game.turns().len(), turns);
    }

    #[test]
    fn target_outside_dictionary_exhausts() {
        let words = dictionary(&["alert", "alter", "learn"]);
        let mut game = Game::new(&GameConfig::default(), &words, "zzzzz").unwrap();

        // alert shares nothing with zzzzz, so every remaining word is eliminated
        assert_eq!(game.step(), GameState::Running);
        assert!(game.pool().is_empty());
        assert_eq!(game.step(), GameState::Exhausted);
        assert_eq!(game.turns().len(), 1);
    }

    #[test]
    fn history_follows_turns() {
        let mut game = Game::new(&GameConfig::default(), &five_words(), "later").unwrap();
        while !game.step().is_terminal() {}
        let history: Vec<&str> = game.history().map(Word::text).collect();
        assert_eq!(history, vec!["alert", "later"]);
    }

    #[test]
    fn pool_never_grows_during_play() {
        let words = dictionary(&[
            "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast",
            "beast", "least", "feast",
        ]);
        for target in &words {
            let summary = Game::new(&GameConfig::default(), &words, target)
                .unwrap()
                .play(&mut Vec::<String>::new());
            assert!(summary.solved(), "failed to solve '{target}'");
            for turn in &summary.turns {
                assert!(turn.candidates_after <= turn.candidates_before);
            }
            for pair in summary.turns.windows(2) {
                assert!(pair[1].candidates_before <= pair[0].candidates_before);
            }
        }
    }

    #[test]
    fn play_reports_every_line() {
        let mut lines: Vec<String> = Vec::new();
        let summary = Game::new(&GameConfig::default(), &five_words(), "later")
            .unwrap()
            .play(&mut lines);

        assert!(summary.solved());
        assert_eq!(summary.attempts(), 2);
        assert_eq!(
            lines,
            vec![
                "Target word: 'later'",
                "Guess 1:     'alert'",
                "Guess 2:     'later'",
                "Found 'later' in 2 guesses.",
            ]
        );
    }

    #[test]
    fn play_reports_exhaustion() {
        let mut lines: Vec<String> = Vec::new();
        let summary = Game::new(&GameConfig::default(), &dictionary(&["alert"]), "zzzzz")
            .unwrap()
            .play(&mut lines);

        assert_eq!(summary.state, GameState::Exhausted);
        assert!(!summary.solved());
        assert_eq!(
            lines,
            vec![
                "Target word: 'zzzzz'",
                "Guess 1:     'alert'",
                "Could not find the word because there are no possible words left.",
            ]
        );
    }
}

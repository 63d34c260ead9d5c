//! Benchmark command
//!
//! Plays the game against many targets and summarizes how it performed.

use crate::config::GameConfig;
use crate::output::Silent;
use crate::solver::{Game, GameError, scored_pool};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the hardest targets to keep
const WORST_COUNT: usize = 5;

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved targets
    pub distribution: BTreeMap<usize, usize>,
    /// Targets that took the most guesses, hardest first
    pub worst_words: Vec<(String, usize)>,
    pub exhausted_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play every target against the dictionary
///
/// The dictionary is scored once and shared by all games. Averages and the
/// distribution count solved games only.
///
/// # Errors
///
/// Returns an error if the dictionary has no word of the configured length,
/// or if a target is not a word of that length.
pub fn run_benchmark(
    config: &GameConfig,
    dictionary: &[String],
    targets: &[String],
    progress: &ProgressBar,
) -> Result<BenchmarkResult, GameError> {
    let pool = scored_pool(config, dictionary)?;

    progress.set_length(targets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut results: Vec<(String, usize)> = Vec::new();
    let mut exhausted_words = Vec::new();

    for target in targets {
        let summary = Game::with_pool(config, pool.clone(), target)?.play(&mut Silent);

        if summary.solved() {
            let attempts = summary.attempts();
            *distribution.entry(attempts).or_insert(0) += 1;
            results.push((summary.target, attempts));
        } else {
            exhausted_words.push(summary.target);
        }

        progress.inc(1);
        progress.set_message(format!("solved {}/{}", results.len(), targets.len()));
    }

    progress.finish_with_message("done");
    let duration = start.elapsed();

    let total_guesses: usize = results.iter().map(|(_, guesses)| guesses).sum();
    let average_guesses = if results.is_empty() {
        0.0
    } else {
        total_guesses as f64 / results.len() as f64
    };

    let min_guesses = results.iter().map(|(_, g)| *g).min().unwrap_or(0);
    let max_guesses = results.iter().map(|(_, g)| *g).max().unwrap_or(0);

    let mut worst_words = results.clone();
    worst_words.sort_by(|(w1, g1), (w2, g2)| g2.cmp(g1).then(w1.cmp(w2)));
    worst_words.truncate(WORST_COUNT);

    let secs = duration.as_secs_f64();
    let words_per_second = if secs > 0.0 {
        targets.len() as f64 / secs
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_words: targets.len(),
        solved: results.len(),
        exhausted: exhausted_words.len(),
        average_guesses,
        min_guesses,
        max_guesses,
        distribution,
        worst_words,
        exhausted_words,
        duration,
        words_per_second,
    })
}

//! Line-oriented sinks for game progress

use super::formatters::{
    EXHAUSTED_MESSAGE, feedback_marks, guess_line, knowledge_line, solved_line, target_line,
};
use crate::solver::Turn;
use colored::Colorize;

/// Receives the events of a game as it is played
pub trait Reporter {
    /// The hidden target, reported before the first guess
    fn target(&mut self, target: &str);

    /// A guess was played; `attempt` is 1-based
    fn guess(&mut self, attempt: usize, turn: &Turn);

    fn solved(&mut self, target: &str, attempts: usize);

    fn exhausted(&mut self);
}

/// Collects plain report lines
impl Reporter for Vec<String> {
    fn target(&mut self, target: &str) {
        self.push(target_line(target));
    }

    fn guess(&mut self, attempt: usize, turn: &Turn) {
        self.push(guess_line(attempt, turn.guess.text()));
    }

    fn solved(&mut self, target: &str, attempts: usize) {
        self.push(solved_line(target, attempts));
    }

    fn exhausted(&mut self) {
        self.push(EXHAUSTED_MESSAGE.to_string());
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Reporter for Silent {
    fn target(&mut self, _target: &str) {}

    fn guess(&mut self, _attempt: usize, _turn: &Turn) {}

    fn solved(&mut self, _target: &str, _attempts: usize) {}

    fn exhausted(&mut self) {}
}

/// Prints colored report lines to stdout
///
/// In verbose mode every guess is followed by its feedback marks, the
/// pool sizes before and after filtering, and the letters learned so far.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReporter {
    verbose: bool,
    target: String,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            target: String::new(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn target(&mut self, target: &str) {
        self.target = target.to_string();
        println!("{}", target_line(target).bright_black());
    }

    fn guess(&mut self, attempt: usize, turn: &Turn) {
        let line = guess_line(attempt, turn.guess.text());
        if self.verbose {
            println!(
                "{} {}",
                line,
                feedback_marks(turn.guess.text(), &self.target)
            );
            println!(
                "           Candidates: {} → {}",
                turn.candidates_before, turn.candidates_after
            );
            println!(
                "           {}",
                knowledge_line(&turn.known_letters, &turn.absent_letters).bright_black()
            );
        } else {
            println!("{line}");
        }
    }

    fn solved(&mut self, target: &str, attempts: usize) {
        println!("\n{}", format!("✅ {}", solved_line(target, attempts)).green().bold());
    }

    fn exhausted(&mut self) {
        println!("\n{}", format!("❌ {EXHAUSTED_MESSAGE}").red().bold());
    }
}

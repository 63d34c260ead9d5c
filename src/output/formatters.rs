//! Formatting utilities for terminal output

/// Final line when the pool runs out before the target is found
pub const EXHAUSTED_MESSAGE: &str =
    "Could not find the word because there are no possible words left.";

#[must_use]
pub fn target_line(target: &str) -> String {
    format!("Target word: '{target}'")
}

#[must_use]
pub fn guess_line(attempt: usize, guess: &str) -> String {
    format!("Guess {attempt}:     '{guess}'")
}

#[must_use]
pub fn solved_line(target: &str, attempts: usize) -> String {
    format!("Found '{target}' in {attempts} guesses.")
}

/// Mark each guess letter the way the constraints read it
///
/// Green for an exact match, yellow for a letter present elsewhere in the
/// target, white otherwise. Repeated letters are not rationed.
#[must_use]
pub fn feedback_marks(guess: &str, target: &str) -> String {
    let target_bytes = target.as_bytes();

    guess
        .bytes()
        .enumerate()
        .map(|(i, letter)| {
            if target_bytes.get(i) == Some(&letter) {
                '🟩'
            } else if target_bytes.contains(&letter) {
                '🟨'
            } else {
                '⬜'
            }
        })
        .collect()
}

/// Render sorted letters as `a b c`
#[must_use]
pub fn letter_list<'a>(letters: impl IntoIterator<Item = &'a u8>) -> String {
    let mut letters: Vec<u8> = letters.into_iter().copied().collect();
    letters.sort_unstable();
    letters
        .iter()
        .map(|&l| (l as char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summarize which letters are known present and known absent
#[must_use]
pub fn knowledge_line(known: &[u8], absent: &[u8]) -> String {
    format!("Known: {} | Absent: {}", letter_list(known), letter_list(absent))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

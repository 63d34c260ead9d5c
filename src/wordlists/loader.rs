//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or the embedded list,
//! keeping only words of the configured length.

use crate::config::DictionarySource;
use crate::core::validate;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;

/// Load words of exactly `length` letters from a file
///
/// Lines are trimmed and lowercased. Empty lines and entries that are not
/// `length` ASCII letters are skipped. Order and duplicates are preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_ranker::wordlists::loader::load_from_file;
///
/// let words = load_from_file("res/words_alpha.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines(), length);

    info!(
        "loaded {} words of length {length} from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Filter an embedded or in-memory list to words of `length` letters
///
/// # Examples
/// ```
/// use wordle_ranker::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "Slate"], 5);
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<String> {
    words_from_lines(slice.iter().copied(), length)
}

/// Load the dictionary named by `source`
///
/// # Errors
///
/// Returns an I/O error if a dictionary file cannot be read.
pub fn load_dictionary(source: &DictionarySource, length: usize) -> io::Result<Vec<String>> {
    match source {
        DictionarySource::Embedded => {
            let words = words_from_slice(super::DICTIONARY, length);
            info!("using {} embedded words of length {length}", words.len());
            Ok(words)
        }
        DictionarySource::File(path) => load_from_file(path, length),
    }
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<String> {
    lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match validate(line, length) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("skipping '{}': {e}", line.trim());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_keeps_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "", "sl4te", "SLATE"];
        let words = words_from_slice(input, 5);
        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_other_length() {
        let words = words_from_slice(&["crane", "planet", "tables"], 6);
        assert_eq!(words, vec!["planet", "tables"]);
    }

    #[test]
    fn words_from_slice_keeps_duplicates_in_order() {
        let words = words_from_slice(&["slate", "crane", "slate"], 5);
        assert_eq!(words, vec!["slate", "crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[], 5).is_empty());
    }

    #[test]
    fn load_from_file_filters_lines() {
        let path = std::env::temp_dir().join(format!(
            "wordle_ranker_loader_{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "alert\r\nat\n  Later  \n\nalerts\nrates").unwrap();
        drop(file);

        let words = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["alert", "later", "rates"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("wordle_ranker_missing_dictionary.txt");
        assert!(load_from_file(path, 5).is_err());
    }

    #[test]
    fn load_embedded_dictionary() {
        let words = load_dictionary(&DictionarySource::Embedded, 5).unwrap();
        assert!(!words.is_empty());
        assert!(words.iter().all(|w| w.len() == 5));
    }
}

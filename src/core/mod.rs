//! Core domain types for the ranking player
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and computed once per word.

mod frequency;
mod scoring;
mod word;

pub use frequency::LetterFrequency;
pub use scoring::{duplicate_count, ranking_score};
pub use word::{Word, WordError, validate};

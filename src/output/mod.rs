//! Terminal output formatting
//!
//! The game reports through the `Reporter` sink; command results are
//! pretty-printed by the display functions.

pub mod display;
pub mod formatters;
mod reporter;

pub use display::{print_analysis_result, print_benchmark_result};
pub use reporter::{ConsoleReporter, Reporter, Silent};

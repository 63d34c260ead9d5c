//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::play_random;
pub use solve::solve_word;

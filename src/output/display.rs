//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, BenchmarkResult};
use colored::Colorize;

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let membership = if result.in_dictionary {
        "in dictionary".green()
    } else {
        "not in dictionary".red()
    };

    println!("\n📊 Against {} dictionary words ({membership}):", result.total_words);
    println!("   Duplicates:  {}", result.duplicates);
    println!(
        "   Ranking:     {}",
        result.ranking.to_string().bright_yellow()
    );
    println!(
        "   Preference:  #{} of {}",
        result.rank, result.total_words
    );

    println!("\n🔤 {}", "Letter frequency:".bright_cyan().bold());
    let max = result
        .letter_frequency
        .first()
        .map_or(0.0, |&(_, count)| f64::from(count));
    for &(letter, count) in &result.letter_frequency {
        let bar = create_progress_bar(f64::from(count), max, 30);
        let marker = if result.word.as_bytes().contains(&letter) {
            (letter as char).to_string().bright_green().bold()
        } else {
            (letter as char).to_string().normal()
        };
        println!("   {marker}: {} {count:6}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!(
        "   Exhausted:        {}",
        result.exhausted.to_string().red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.worst_words.is_empty() {
        println!("\n🐢 {}", "Hardest targets:".bright_cyan().bold());
        for (word, guesses) in &result.worst_words {
            println!("   {} ({guesses} guesses)", word.to_uppercase().bright_white());
        }
    }

    if !result.exhausted_words.is_empty() {
        println!("\n❌ {}", "Not found:".bright_red().bold());
        for word in &result.exhausted_words {
            println!("   {}", word.to_uppercase());
        }
    }
}

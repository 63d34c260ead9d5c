//! Wordle Ranker - CLI
//!
//! Plays Wordle against a hidden target using letter-frequency ranking.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use log::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_ranker::{
    commands::{analyze_word, play_random, run_benchmark, solve_word},
    config::{DEFAULT_WORD_LENGTH, DictionarySource, RunConfig},
    output::{ConsoleReporter, print_analysis_result, print_benchmark_result},
    solver::GameError,
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_ranker",
    about = "Automated Wordle player using constraint narrowing and letter-frequency ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Word length for the game
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Seed for target selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase logging (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a random dictionary word (default)
    Play,

    /// Play against a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show feedback marks and candidate counts for every guess
        #[arg(long)]
        details: bool,
    },

    /// Play against every dictionary word and summarize
    Benchmark {
        /// Only use the first N dictionary words as targets
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show how the guess selector scores a word
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = RunConfig::new(cli.dictionary, cli.length, cli.seed);
    let dictionary = load_dictionary(&config.dictionary, config.game.word_length)
        .with_context(|| match &config.dictionary {
            DictionarySource::File(path) => {
                format!("failed to read dictionary {}", path.display())
            }
            DictionarySource::Embedded => "failed to load embedded dictionary".to_string(),
        })?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let outcome = match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Solve { word, details } => {
            run_solve_command(&config, &dictionary, &word, details)
        }
        Commands::Benchmark { limit } => run_benchmark_command(&config, &dictionary, limit),
        Commands::Analyze { word } => run_analyze_command(&config, &dictionary, &word),
    };

    match outcome {
        // Not a failure: there is simply nothing to play
        Err(GameError::EmptyDictionary { length }) => {
            println!("No words found with length {length}");
            Ok(())
        }
        other => other.context("could not start the game"),
    }
}

fn run_play_command(config: &RunConfig, dictionary: &[String]) -> Result<(), GameError> {
    let mut reporter = ConsoleReporter::new(false);

    if let Some(seed) = config.seed {
        let mut rng = StdRng::seed_from_u64(seed);
        play_random(&config.game, dictionary, &mut rng, &mut reporter)?;
    } else {
        play_random(&config.game, dictionary, &mut rand::rng(), &mut reporter)?;
    }
    Ok(())
}

fn run_solve_command(
    config: &RunConfig,
    dictionary: &[String],
    word: &str,
    details: bool,
) -> Result<(), GameError> {
    let mut reporter = ConsoleReporter::new(details);
    solve_word(&config.game, dictionary, word, &mut reporter)?;
    Ok(())
}

fn run_benchmark_command(
    config: &RunConfig,
    dictionary: &[String],
    limit: Option<usize>,
) -> Result<(), GameError> {
    let targets = &dictionary[..limit.unwrap_or(dictionary.len()).min(dictionary.len())];
    println!("🎯 Testing {} words...", targets.len());

    let progress = ProgressBar::new(targets.len() as u64);
    let result = run_benchmark(&config.game, dictionary, targets, &progress)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_analyze_command(
    config: &RunConfig,
    dictionary: &[String],
    word: &str,
) -> Result<(), GameError> {
    let result = analyze_word(word, &config.game, dictionary)?;
    print_analysis_result(&result);
    Ok(())
}

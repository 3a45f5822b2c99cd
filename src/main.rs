//! Adversarial Wordle - CLI
//!
//! TUI and line-based game plus replay, analysis and benchmark tools.

use adversarial_wordle::{
    commands::{analyze_guess, replay_guesses, run_benchmark, run_simple},
    config::{GameConfig, GameMode},
    game::Game,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_benchmark_result, print_replay_result},
    wordlists::WordList,
};
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "adversarial_wordle",
    about = "Wordle against an opponent that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: adversarial (default) or classic
    #[arg(short, long, global = true, value_enum, default_value_t = GameMode::Adversarial)]
    mode: GameMode,

    /// Guess limit (classic default: 6, adversarial default: unlimited)
    #[arg(long, global = true)]
    max_guesses: Option<usize>,

    /// Seed for choosing the classic-mode secret
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Log filter, overrides RUST_LOG (e.g. 'debug' or 'adversarial_wordle=trace')
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Play a fixed sequence of guesses and show each response
    Replay {
        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Show how a guess splits the dictionary
    Analyze {
        /// Word to analyze
        guess: String,
    },

    /// Play full games against the adversary using the hint
    Benchmark {
        /// Number of games (each opens with a different word)
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn env_filter(level: Option<&str>) -> EnvFilter {
    level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    )
}

fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("adversarial_wordle.log")
}

/// Set up logging; the TUI owns the terminal, so its logs go to a file
fn init_tracing(level: Option<&str>, tui: bool) {
    let filter = env_filter(level);

    if !tui {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
        return;
    }

    let path = log_file_path();
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        // No logs rather than a corrupted screen
        Err(_) => tracing_subscriber::registry().with(filter).init(),
    }
}

/// Load the dictionary named by the -w flag
fn load_wordlist(source: &str) -> Result<WordList> {
    let list = match source {
        "builtin" => WordList::embedded()?,
        path => WordList::from_file(path)?,
    };
    Ok(list)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    init_tracing(cli.log_level.as_deref(), matches!(command, Commands::Play));

    if cli.max_guesses == Some(0) {
        bail!("--max-guesses must be at least 1");
    }

    let dictionary = load_wordlist(&cli.wordlist)?;
    let config = GameConfig::new(cli.mode)
        .with_max_guesses(cli.max_guesses)
        .with_seed(cli.seed);

    match command {
        Commands::Play => run_tui(App::new(Game::new(&dictionary, config))),
        Commands::Simple => {
            let mut game = Game::new(&dictionary, config);
            run_simple(&mut game)?;
            Ok(())
        }
        Commands::Replay { guesses } => {
            let mut game = Game::new(&dictionary, config);
            let result = replay_guesses(&mut game, guesses)?;
            print_replay_result(&result);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_guess(guess, &dictionary, dictionary.words())?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} games...");
            let mut game = Game::new(&dictionary, config);
            let result = run_benchmark(&mut game, *count)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

//! Hangman - CLI
//!
//! Guess the word letter by letter before the gallows is complete.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SessionConfig, list_words, run_session},
    console::StdConsole,
    core::{DEFAULT_MAX_ATTEMPTS, LeaderboardMode, WordEntry},
    wordlists::{
        DEFAULT_WORDS,
        loader::{entries_from_pairs, load_from_file},
    },
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with hints, session statistics and a leaderboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file with one 'word|hint' per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive session (default)
    Play {
        /// Wrong guesses allowed per round
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_ATTEMPTS,
              value_parser = clap::value_parser!(u32).range(1..))]
        max_attempts: u32,

        /// Seed for word selection, for reproducible sessions
        #[arg(short, long)]
        seed: Option<u64>,

        /// Keep one leaderboard row per player instead of one per round
        #[arg(long)]
        merge_players: bool,
    },

    /// List the words of the active word list
    Words,
}

/// Load the word list based on the -w flag
fn load_words(path: Option<&str>) -> Result<Vec<WordEntry>> {
    match path {
        None => Ok(entries_from_pairs(DEFAULT_WORDS)),
        Some(path) => {
            let words = load_from_file(Path::new(path))
                .with_context(|| format!("Failed to read word list {path}"))?;
            if words.is_empty() {
                bail!("Word list {path} has no valid entries");
            }
            info!("Loaded {} words from {path}", words.len());
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let words = load_words(cli.words.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        max_attempts: DEFAULT_MAX_ATTEMPTS,
        seed: None,
        merge_players: false,
    });

    match command {
        Commands::Play {
            max_attempts,
            seed,
            merge_players,
        } => run_play_command(&words, max_attempts, seed, merge_players),
        Commands::Words => {
            let mut console = StdConsole::stdio();
            list_words(&mut console, &words).context("Failed to write word list")
        }
    }
}

fn run_play_command(
    words: &[WordEntry],
    max_attempts: u32,
    seed: Option<u64>,
    merge_players: bool,
) -> Result<()> {
    let config = SessionConfig {
        max_attempts,
        leaderboard_mode: if merge_players {
            LeaderboardMode::PerPlayer
        } else {
            LeaderboardMode::Snapshot
        },
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut console = StdConsole::stdio();
    run_session(&mut console, &mut rng, words, &config)?;
    Ok(())
}

//! Interactive game session
//!
//! Drives repeated rounds over a [`Console`], folding each finished round into
//! a [`SessionContext`] and printing the summaries at the end.

use crate::console::Console;
use crate::core::{
    DEFAULT_MAX_ATTEMPTS, GuessKind, LeaderboardMode, Outcome, RoundReport, RoundState,
    SessionContext, WordEntry, choose_word,
};
use crate::output::formatters::rule;
use crate::output::{
    print_feedback, print_leaderboard, print_loss, print_round_state, print_statistics,
    print_win,
};
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::Rng;
use std::borrow::Cow;
use std::time::Instant;

const CUSTOM_LIST_PROMPT: &str = "Do you want to add a custom word list? (yes/no): ";
const CUSTOM_WORD_PROMPT: &str = "Enter a word (or 'done' to finish): ";
const CUSTOM_HINT_PROMPT: &str = "Enter a hint for this word: ";
const NAME_PROMPT: &str = "Enter your name: ";
const GUESS_PROMPT: &str =
    "Guess the word or type 'hint' for a hint (you can use the hint only once): ";
const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (yes/no): ";
const BANNER_WIDTH: usize = 21;

/// Ends custom word entry
pub const DONE_KEYWORD: &str = "done";

/// Settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: u32,
    pub leaderboard_mode: LeaderboardMode,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            leaderboard_mode: LeaderboardMode::Snapshot,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a whole session: word list choice, rounds until the player stops, summaries
///
/// Returns the final statistics and leaderboard.
///
/// # Errors
///
/// Returns an error if:
/// - Input runs out before the session is over
/// - Neither the custom nor the default word list has any words
/// - Writing to the console fails
pub fn run_session<C, R>(
    console: &mut C,
    rng: &mut R,
    default_words: &[WordEntry],
    config: &SessionConfig,
) -> Result<SessionContext>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
{
    if default_words.is_empty() {
        bail!("Default word list is empty");
    }

    let words = select_word_list(console, default_words)?;
    info!("Session started with {} words", words.len());

    let mut context = SessionContext::new(config.leaderboard_mode);

    loop {
        let name = read_name(console)?;
        console.write_line(&format!("Welcome {name}"))?;
        console.write_line(&rule(BANNER_WIDTH))?;
        console.write_line(&format!(
            "Try to guess the word in less than {} attempts",
            config.max_attempts
        ))?;

        let entry = choose_word(&words, rng).context("No words available to play")?;
        let report = play_round(console, entry, config.max_attempts)?;
        context.record_round(&name, &report);

        if !ask_play_again(console)? {
            break;
        }
    }

    print_statistics(console, &context.stats)?;
    print_leaderboard(console, &context.leaderboard.ranked())?;

    Ok(context)
}

/// Play one round to the end
///
/// # Errors
/// Returns an error if input runs out mid-round or the console fails.
pub fn play_round<C: Console + ?Sized>(
    console: &mut C,
    entry: &WordEntry,
    max_attempts: u32,
) -> Result<RoundReport> {
    debug!("Round started: {} letters", entry.word().chars().count());
    let start = Instant::now();
    let mut round = RoundState::new(entry, max_attempts);

    let outcome = loop {
        if let Some(outcome) = round.outcome() {
            break outcome;
        }

        print_round_state(console, &round)?;
        let input = read_input(console, GUESS_PROMPT)?;
        let guess = GuessKind::classify(&input);
        let feedback = round.apply_guess(&guess);
        debug!("{guess:?} -> {feedback:?}");
        print_feedback(console, &feedback)?;
    };

    let elapsed = start.elapsed();
    match outcome {
        Outcome::Win => print_win(console, &round)?,
        Outcome::Loss => print_loss(console, &round)?,
    }
    info!(
        "Round finished: {outcome:?} after {} wrong attempts in {:.2}s",
        round.wrong_attempts(),
        elapsed.as_secs_f64()
    );

    Ok(RoundReport {
        outcome,
        secret: round.secret().text().to_string(),
        wrong_attempts: round.wrong_attempts(),
        elapsed,
    })
}

/// Ask for a custom list; fall back to the defaults when none is given
fn select_word_list<'a, C: Console + ?Sized>(
    console: &mut C,
    default_words: &'a [WordEntry],
) -> Result<Cow<'a, [WordEntry]>> {
    let answer = read_input(console, CUSTOM_LIST_PROMPT)?;
    if answer.trim().to_lowercase() != "yes" {
        return Ok(Cow::Borrowed(default_words));
    }

    let custom = collect_custom_words(console)?;
    if custom.is_empty() {
        console.write_line("No custom words entered, using the default word list.")?;
        return Ok(Cow::Borrowed(default_words));
    }

    Ok(Cow::Owned(custom))
}

/// Collect word/hint pairs until the done keyword
///
/// # Errors
/// Returns an error if input runs out or the console fails.
pub fn collect_custom_words<C: Console + ?Sized>(console: &mut C) -> Result<Vec<WordEntry>> {
    let mut words = Vec::new();

    loop {
        let word = read_input(console, CUSTOM_WORD_PROMPT)?.trim().to_lowercase();
        if word == DONE_KEYWORD {
            break;
        }

        let hint = read_input(console, CUSTOM_HINT_PROMPT)?.to_lowercase();
        match WordEntry::new(&word, &hint) {
            Ok(entry) => words.push(entry),
            Err(e) => console.write_line(&format!("{e}. Word not added."))?,
        }
    }

    debug!("Collected {} custom words", words.len());
    Ok(words)
}

fn read_name<C: Console + ?Sized>(console: &mut C) -> Result<String> {
    loop {
        let name = read_input(console, NAME_PROMPT)?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        console.write_line("Please enter a name.")?;
    }
}

fn ask_play_again<C: Console + ?Sized>(console: &mut C) -> Result<bool> {
    loop {
        match read_input(console, PLAY_AGAIN_PROMPT)?
            .trim()
            .to_lowercase()
            .as_str()
        {
            "yes" => return Ok(true),
            "no" => {
                console.write_line("Thanks for playing! Goodbye.")?;
                return Ok(false);
            }
            _ => console.write_line("Please answer 'yes' or 'no'.")?,
        }
    }
}

fn read_input<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String> {
    console
        .read_line(prompt)
        .context("Failed to read input")?
        .context("Input closed before the session finished")
}

//! Core domain types for hangman
//!
//! Round state, guess classification and session statistics. Nothing in this
//! module touches the terminal, so every rule can be tested directly.

mod guess;
mod round;
mod stats;
mod word;

pub use guess::{GuessKind, HINT_KEYWORD};
pub use round::{
    DEFAULT_MAX_ATTEMPTS, EmptyListError, Feedback, Outcome, RoundReport, RoundState,
    RoundStatus, choose_word,
};
pub use stats::{
    Leaderboard, LeaderboardEntry, LeaderboardMode, SessionContext, SessionStats,
    compute_average, rank_leaderboard,
};
pub use word::{Secret, WordEntry, WordError};

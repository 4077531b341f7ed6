//! Hangman
//!
//! Terminal hangman with a one-shot hint, session statistics and a leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GuessKind, RoundState, RoundStatus, WordEntry};
//!
//! let entry = WordEntry::new("cat", "A small pet").unwrap();
//! let mut round = RoundState::new(&entry, 10);
//!
//! for input in ["x", "c", "a", "t"] {
//!     round.apply_guess(&GuessKind::classify(input));
//! }
//! assert_eq!(round.status(), RoundStatus::Won);
//! assert_eq!(round.wrong_attempts(), 1);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Line-based input/output boundary
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Terminal output formatting
//!
//! The gallows diagram plus display utilities for rounds and session summaries.

pub mod diagram;
pub mod display;
pub mod formatters;

pub use display::{
    print_feedback, print_leaderboard, print_loss, print_round_state, print_statistics,
    print_win,
};

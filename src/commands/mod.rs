//! Command implementations

pub mod play;
pub mod words;

pub use play::{SessionConfig, collect_custom_words, play_round, run_session};
pub use words::list_words;

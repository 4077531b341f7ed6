//! Formatting utilities for terminal output

/// Placeholder for a letter not guessed yet
pub const BLANK: char = '_';

/// Format the revealed letters, space separated
#[must_use]
pub fn format_reveal(revealed: &[Option<char>]) -> String {
    revealed
        .iter()
        .map(|slot| slot.unwrap_or(BLANK).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the guess history as a comma separated list
#[must_use]
pub fn format_guessed(guessed: &[String]) -> String {
    guessed.join(", ")
}

/// Format seconds with two decimals
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.2} seconds")
}

/// Horizontal rule of a given width
#[must_use]
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constants.
//!
//! A word list file holds one `word|hint` pair per line. Blank lines and lines
//! starting with `#` are ignored.

use crate::core::WordEntry;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Separator between a word and its hint
pub const SEPARATOR: char = '|';

/// Load entries from a file
///
/// Returns the valid entries, skipping (and logging) malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

/// Parse `word|hint` lines
#[must_use]
pub fn parse_entries(content: &str) -> Vec<WordEntry> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let Some((word, hint)) = trimmed.split_once(SEPARATOR) else {
                warn!("Skipping line {}: missing '{SEPARATOR}' separator", index + 1);
                return None;
            };

            WordEntry::new(word, hint)
                .inspect_err(|e| warn!("Skipping line {}: {e}", index + 1))
                .ok()
        })
        .collect()
}

/// Convert embedded pairs to entries
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::entries_from_pairs;
/// use hangman::wordlists::DEFAULT_WORDS;
///
/// let words = entries_from_pairs(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn entries_from_pairs(pairs: &[(&str, &str)]) -> Vec<WordEntry> {
    pairs
        .iter()
        .filter_map(|&(word, hint)| WordEntry::new(word, hint).ok())
        .collect()
}

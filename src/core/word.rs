//! Word entries and the secret word of a round
//!
//! A `WordEntry` pairs a word with its hint. A `Secret` is the word being guessed,
//! indexed by letter so a guess can reveal every matching position at once.

use rustc_hash::FxHashMap;
use std::fmt;

/// A word to guess together with its hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hint: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAlphabetic(String),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAlphabetic(word) => {
                write!(f, "Word '{word}' must contain only letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl WordEntry {
    /// Create a new entry
    ///
    /// The word is trimmed and lower-cased; the hint is only trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything but letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Apple", "A fruit").unwrap();
    /// assert_eq!(entry.word(), "apple");
    ///
    /// assert!(WordEntry::new("", "nothing").is_err());
    /// assert!(WordEntry::new("r2d2", "a droid").is_err());
    /// ```
    pub fn new(word: &str, hint: &str) -> Result<Self, WordError> {
        let word = word.trim().to_lowercase();

        if word.is_empty() {
            return Err(WordError::Empty);
        }

        if !word.chars().all(char::is_alphabetic) {
            return Err(WordError::NonAlphabetic(word));
        }

        Ok(Self {
            word,
            hint: hint.trim().to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.hint)
    }
}

/// The word being guessed in a round
///
/// Keeps the letters in order plus a map of letter positions for repeated letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    text: String,
    letters: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

impl Secret {
    #[must_use]
    pub fn new(entry: &WordEntry) -> Self {
        let text = entry.word().to_string();
        let letters: Vec<char> = text.chars().collect();

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            letters,
            letter_positions,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

//! Classification of raw player input

/// Keyword that requests the round's hint
pub const HINT_KEYWORD: &str = "hint";

/// What a line of player input means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessKind {
    /// The hint keyword
    Hint,
    /// A single letter
    Letter(char),
    /// Two or more letters, treated as a guess at the whole word
    Word(String),
    /// Anything else: digits, punctuation, spaces, empty input
    Invalid,
}

impl GuessKind {
    /// Classify a line of input
    ///
    /// Input is lower-cased before it is interpreted. Only a trailing line
    /// terminator is stripped, so padded input such as `" c "` is invalid.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessKind;
    ///
    /// assert_eq!(GuessKind::classify("HINT"), GuessKind::Hint);
    /// assert_eq!(GuessKind::classify("a"), GuessKind::Letter('a'));
    /// assert_eq!(GuessKind::classify("Cat"), GuessKind::Word("cat".to_string()));
    /// assert_eq!(GuessKind::classify("c4t"), GuessKind::Invalid);
    /// ```
    #[must_use]
    pub fn classify(input: &str) -> Self {
        let guess = input.trim_end_matches(['\r', '\n']).to_lowercase();

        if guess == HINT_KEYWORD {
            return Self::Hint;
        }

        if guess.is_empty() || !guess.chars().all(char::is_alphabetic) {
            return Self::Invalid;
        }

        let mut chars = guess.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::Letter(letter),
            _ => Self::Word(guess),
        }
    }
}

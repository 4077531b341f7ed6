//! State of a single round
//!
//! `RoundState` is a pure state machine: every guess goes through
//! [`RoundState::apply_guess`], which mutates the state and reports what happened
//! as a [`Feedback`] value. Printing that feedback is the caller's job.

use super::guess::GuessKind;
use super::word::{Secret, WordEntry};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::time::Duration;

/// Wrong guesses allowed before the round is lost
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Error returned when a word has to be picked from an empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyListError;

impl fmt::Display for EmptyListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot choose a word from an empty word list")
    }
}

impl std::error::Error for EmptyListError {}

/// Pick a word uniformly at random
///
/// # Errors
/// Returns `EmptyListError` if `words` is empty.
pub fn choose_word<'a, R: Rng + ?Sized>(
    words: &'a [WordEntry],
    rng: &mut R,
) -> Result<&'a WordEntry, EmptyListError> {
    words.choose(rng).ok_or(EmptyListError)
}

/// Whether a round is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Final result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// What a guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// First hint request; carries the hint text
    Hint(String),
    HintAlreadyUsed,
    /// The whole word was guessed at once
    Solved,
    /// A letter matched this many positions
    Hit { revealed: usize },
    /// The guess matched nothing
    Miss { remaining: u32 },
    Invalid,
    /// The round had already finished; nothing changed
    RoundOver,
}

/// Summary of a finished round, handed to the session
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub outcome: Outcome,
    pub secret: String,
    pub wrong_attempts: u32,
    pub elapsed: Duration,
}

/// Mutable state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    secret: Secret,
    hint: String,
    revealed: Vec<Option<char>>,
    wrong_attempts: u32,
    max_attempts: u32,
    guessed: Vec<String>,
    hint_used: bool,
}

impl RoundState {
    /// Start a round: all positions blank, no wrong attempts, hint unused
    ///
    /// `max_attempts` below 1 is raised to 1.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GuessKind, RoundState, RoundStatus, WordEntry};
    ///
    /// let entry = WordEntry::new("cat", "A pet").unwrap();
    /// let mut round = RoundState::new(&entry, 10);
    ///
    /// round.apply_guess(&GuessKind::classify("cat"));
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// ```
    #[must_use]
    pub fn new(entry: &WordEntry, max_attempts: u32) -> Self {
        let secret = Secret::new(entry);
        let revealed = vec![None; secret.len()];

        Self {
            secret,
            hint: entry.hint().to_string(),
            revealed,
            wrong_attempts: 0,
            max_attempts: max_attempts.max(1),
            guessed: Vec::new(),
            hint_used: false,
        }
    }

    /// Apply one classified guess
    pub fn apply_guess(&mut self, guess: &GuessKind) -> Feedback {
        if self.status() != RoundStatus::InProgress {
            return Feedback::RoundOver;
        }

        match guess {
            GuessKind::Hint => self.request_hint(),
            GuessKind::Invalid => Feedback::Invalid,
            GuessKind::Word(word) => {
                self.guessed.push(word.clone());
                if word == self.secret.text() {
                    self.reveal_all();
                    Feedback::Solved
                } else {
                    self.miss()
                }
            }
            GuessKind::Letter(letter) => {
                self.guessed.push(letter.to_string());
                // A one-letter secret is matched as a whole word first
                if self.secret.letters() == [*letter] {
                    self.reveal_all();
                    return Feedback::Solved;
                }

                let positions = self.secret.positions_of(*letter);
                if positions.is_empty() {
                    return self.miss();
                }
                for &i in positions {
                    self.revealed[i] = Some(*letter);
                }
                Feedback::Hit {
                    revealed: positions.len(),
                }
            }
        }
    }

    fn request_hint(&mut self) -> Feedback {
        if self.hint_used {
            Feedback::HintAlreadyUsed
        } else {
            self.hint_used = true;
            Feedback::Hint(self.hint.clone())
        }
    }

    fn miss(&mut self) -> Feedback {
        self.wrong_attempts += 1;
        Feedback::Miss {
            remaining: self.remaining_attempts(),
        }
    }

    fn reveal_all(&mut self) {
        for (slot, &letter) in self.revealed.iter_mut().zip(self.secret.letters()) {
            *slot = Some(letter);
        }
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.revealed.iter().all(Option::is_some) {
            RoundStatus::Won
        } else if self.wrong_attempts >= self.max_attempts {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// The final outcome, or `None` while the round is running
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some(Outcome::Win),
            RoundStatus::Lost => Some(Outcome::Loss),
        }
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    #[inline]
    #[must_use]
    pub const fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.wrong_attempts)
    }

    /// Every letter and word guessed so far, in order, repeats included
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }
}

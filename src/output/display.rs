//! Display functions for rounds and session summaries

use super::diagram::hangman_stage;
use super::formatters::{format_guessed, format_reveal, format_seconds};
use crate::console::Console;
use crate::core::{Feedback, LeaderboardEntry, RoundState, SessionStats};
use colored::Colorize;
use std::io;

/// Print the gallows, the word so far and the guess history
///
/// # Errors
/// Returns any I/O error from the console.
pub fn print_round_state<C: Console + ?Sized>(
    console: &mut C,
    round: &RoundState,
) -> io::Result<()> {
    console.write_line(hangman_stage(round.wrong_attempts()))?;
    console.write_line(&format!("Word: {}", format_reveal(round.revealed())))?;
    if !round.guessed().is_empty() {
        console.write_line(&format!("Guessed: {}", format_guessed(round.guessed())))?;
    }
    Ok(())
}

/// Print the message for a guess
///
/// `Solved`, `Hit` and `RoundOver` print nothing; the round result is shown
/// once the round ends.
///
/// # Errors
/// Returns any I/O error from the console.
pub fn print_feedback<C: Console + ?Sized>(
    console: &mut C,
    feedback: &Feedback,
) -> io::Result<()> {
    match feedback {
        Feedback::Hint(hint) => {
            console.write_line(&format!("{} {hint}", "Hint:".bright_cyan().bold()))
        }
        Feedback::HintAlreadyUsed => {
            console.write_line(&"You have already used your hint!".yellow().to_string())
        }
        Feedback::Miss { remaining } => console.write_line(
            &format!("Wrong! You have {remaining} attempts left.")
                .red()
                .to_string(),
        ),
        Feedback::Invalid => console.write_line(
            &"Invalid input. Please guess a word or type 'hint'."
                .yellow()
                .to_string(),
        ),
        Feedback::Solved | Feedback::Hit { .. } | Feedback::RoundOver => Ok(()),
    }
}

/// Print the win message
///
/// # Errors
/// Returns any I/O error from the console.
pub fn print_win<C: Console + ?Sized>(console: &mut C, round: &RoundState) -> io::Result<()> {
    console.write_line(
        &format!("Congratulations! You guessed the word: {}", round.secret())
            .green()
            .bold()
            .to_string(),
    )
}

/// Print the final gallows and the loss message
///
/// # Errors
/// Returns any I/O error from the console.
pub fn print_loss<C: Console + ?Sized>(console: &mut C, round: &RoundState) -> io::Result<()> {
    console.write_line(hangman_stage(round.wrong_attempts()))?;
    console.write_line(
        &format!("Game Over! The word was: {}", round.secret())
            .red()
            .bold()
            .to_string(),
    )
}

/// Print the end-of-session statistics block
///
/// # Errors
/// Returns any I/O error from the console.
pub fn print_statistics<C: Console + ?Sized>(
    console: &mut C,
    stats: &SessionStats,
) -> io::Result<()> {
    console.write_line("")?;
    console.write_line(&"Statistics:".bright_cyan().bold().to_string())?;
    console.write_line(&format!("Games Played: {}", stats.games_played))?;
    console.write_line(&format!("Games Won: {}", stats.games_won))?;
    console.write_line(&format!("Games Lost: {}", stats.games_lost))?;
    console.write_line(&format!(
        "Average Time: {}",
        format_seconds(stats.average_time())
    ))
}

/// Print ranked leaderboard rows, numbered from 1
///
/// # Errors
/// Returns any I/O error from the console.
pub fn print_leaderboard<C: Console + ?Sized>(
    console: &mut C,
    ranked: &[&LeaderboardEntry],
) -> io::Result<()> {
    console.write_line("")?;
    console.write_line(&"Leaderboard:".bright_cyan().bold().to_string())?;
    for (rank, entry) in ranked.iter().enumerate() {
        console.write_line(&leaderboard_line(rank + 1, entry))?;
    }
    Ok(())
}

/// One leaderboard row
#[must_use]
pub fn leaderboard_line(rank: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "{rank}. {} - Games Won: {}, Games Played: {}, Average Time: {}",
        entry.player_name,
        entry.games_won,
        entry.games_played,
        format_seconds(entry.average_time())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::core::{GuessKind, WordEntry};

    fn round(word: &str) -> RoundState {
        RoundState::new(&WordEntry::new(word, "a hint").unwrap(), 10)
    }

    #[test]
    fn round_state_shows_reveal_and_history() {
        let mut round = round("cat");
        round.apply_guess(&GuessKind::Letter('x'));
        round.apply_guess(&GuessKind::Letter('a'));

        let mut console = ScriptedConsole::default();
        print_round_state(&mut console, &round).unwrap();

        let output = console.output();
        assert_eq!(output[0], hangman_stage(1));
        assert_eq!(output[1], "Word: _ a _");
        assert_eq!(output[2], "Guessed: x, a");
    }

    #[test]
    fn round_state_hides_empty_history() {
        let mut console = ScriptedConsole::default();
        print_round_state(&mut console, &round("cat")).unwrap();
        assert_eq!(console.output().len(), 2);
    }

    #[test]
    fn miss_reports_remaining() {
        let mut console = ScriptedConsole::default();
        print_feedback(&mut console, &Feedback::Miss { remaining: 4 }).unwrap();
        assert!(console.transcript().contains("Wrong! You have 4 attempts left."));
    }

    #[test]
    fn silent_feedback() {
        let mut console = ScriptedConsole::default();
        print_feedback(&mut console, &Feedback::Hit { revealed: 2 }).unwrap();
        print_feedback(&mut console, &Feedback::Solved).unwrap();
        assert!(console.output().is_empty());
    }

    #[test]
    fn statistics_with_no_games() {
        let mut console = ScriptedConsole::default();
        print_statistics(&mut console, &SessionStats::default()).unwrap();

        let transcript = console.transcript();
        assert!(transcript.contains("Games Played: 0"));
        assert!(transcript.contains("Average Time: 0.00 seconds"));
    }

    #[test]
    fn leaderboard_row_format() {
        let entry = LeaderboardEntry {
            player_name: "ann".to_string(),
            games_played: 4,
            games_won: 3,
            total_time_seconds: 10.0,
        };
        assert_eq!(
            leaderboard_line(1, &entry),
            "1. ann - Games Won: 3, Games Played: 4, Average Time: 2.50 seconds"
        );
    }

    #[test]
    fn leaderboard_numbers_rows() {
        let entry = |name: &str| LeaderboardEntry {
            player_name: name.to_string(),
            games_played: 1,
            games_won: 1,
            total_time_seconds: 1.0,
        };
        let (a, b) = (entry("a"), entry("b"));

        let mut console = ScriptedConsole::default();
        print_leaderboard(&mut console, &[&a, &b]).unwrap();

        let transcript = console.transcript();
        assert!(transcript.contains("1. a - "));
        assert!(transcript.contains("2. b - "));
    }
}

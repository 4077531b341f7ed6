//! Session statistics and the leaderboard
//!
//! Everything here lives for one process run; nothing is persisted.

use super::round::{Outcome, RoundReport};
use std::time::Duration;

/// Running totals across every round of the session
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionStats {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub total_time_seconds: f64,
}

impl SessionStats {
    /// Fold one finished round into the totals
    pub fn record_outcome(&mut self, outcome: Outcome, elapsed: Duration) {
        self.games_played += 1;
        match outcome {
            Outcome::Win => self.games_won += 1,
            Outcome::Loss => self.games_lost += 1,
        }
        self.total_time_seconds += elapsed.as_secs_f64();
    }

    #[must_use]
    pub fn average_time(&self) -> f64 {
        compute_average(self.total_time_seconds, self.games_played)
    }
}

/// Average seconds per game, 0 when no game was played
#[must_use]
pub fn compute_average(total_time_seconds: f64, games_played: u32) -> f64 {
    if games_played == 0 {
        0.0
    } else {
        total_time_seconds / f64::from(games_played)
    }
}

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub games_played: u32,
    pub games_won: u32,
    pub total_time_seconds: f64,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn average_time(&self) -> f64 {
        compute_average(self.total_time_seconds, self.games_played)
    }
}

/// How rounds are turned into leaderboard rows
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardMode {
    /// After every round, append a row holding the whole session's totals so far
    #[default]
    Snapshot,
    /// Keep one row per distinct player name with that player's own totals
    PerPlayer,
}

/// Leaderboard rows in the order they were recorded
#[derive(Debug, Default, Clone)]
pub struct Leaderboard {
    mode: LeaderboardMode,
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new(mode: LeaderboardMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> LeaderboardMode {
        self.mode
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Append a snapshot of the cumulative session statistics under `name`
    pub fn append_entry(&mut self, name: &str, stats: &SessionStats) {
        self.entries.push(LeaderboardEntry {
            player_name: name.to_string(),
            games_played: stats.games_played,
            games_won: stats.games_won,
            total_time_seconds: stats.total_time_seconds,
        });
    }

    /// Add one round to the row of `name`, creating the row on first sight
    pub fn merge_round(&mut self, name: &str, outcome: Outcome, elapsed: Duration) {
        let index = match self.entries.iter().position(|e| e.player_name == name) {
            Some(index) => index,
            None => {
                self.entries.push(LeaderboardEntry {
                    player_name: name.to_string(),
                    games_played: 0,
                    games_won: 0,
                    total_time_seconds: 0.0,
                });
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[index];
        entry.games_played += 1;
        if outcome == Outcome::Win {
            entry.games_won += 1;
        }
        entry.total_time_seconds += elapsed.as_secs_f64();
    }

    /// Rows ranked by games won
    #[must_use]
    pub fn ranked(&self) -> Vec<&LeaderboardEntry> {
        rank_leaderboard(&self.entries)
    }
}

/// Sort by games won, most first; equal scores keep their recorded order
///
/// # Examples
/// ```
/// use hangman::core::{LeaderboardEntry, rank_leaderboard};
///
/// let entry = |name: &str, won| LeaderboardEntry {
///     player_name: name.to_string(),
///     games_played: 5,
///     games_won: won,
///     total_time_seconds: 60.0,
/// };
/// let entries = [entry("A", 3), entry("B", 3), entry("C", 5)];
///
/// let names: Vec<_> = rank_leaderboard(&entries)
///     .iter()
///     .map(|e| e.player_name.as_str())
///     .collect();
/// assert_eq!(names, ["C", "A", "B"]);
/// ```
#[must_use]
pub fn rank_leaderboard(entries: &[LeaderboardEntry]) -> Vec<&LeaderboardEntry> {
    let mut ranked: Vec<&LeaderboardEntry> = entries.iter().collect();
    // sort_by_key is stable
    ranked.sort_by_key(|e| std::cmp::Reverse(e.games_won));
    ranked
}

/// Statistics and leaderboard carried from round to round
#[derive(Debug, Default, Clone)]
pub struct SessionContext {
    pub stats: SessionStats,
    pub leaderboard: Leaderboard,
}

impl SessionContext {
    #[must_use]
    pub fn new(mode: LeaderboardMode) -> Self {
        Self {
            stats: SessionStats::default(),
            leaderboard: Leaderboard::new(mode),
        }
    }

    /// Record a finished round played by `name`
    pub fn record_round(&mut self, name: &str, report: &RoundReport) {
        self.stats.record_outcome(report.outcome, report.elapsed);

        match self.leaderboard.mode() {
            LeaderboardMode::Snapshot => self.leaderboard.append_entry(name, &self.stats),
            LeaderboardMode::PerPlayer => {
                self.leaderboard
                    .merge_round(name, report.outcome, report.elapsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, won: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            player_name: name.to_string(),
            games_played: 5,
            games_won: won,
            total_time_seconds: 10.0,
        }
    }

    fn report(outcome: Outcome, secs: u64) -> RoundReport {
        RoundReport {
            outcome,
            secret: "cat".to_string(),
            wrong_attempts: 0,
            elapsed: Duration::from_secs(secs),
        }
    }

    fn names<'a>(ranked: &[&'a LeaderboardEntry]) -> Vec<&'a str> {
        ranked.iter().map(|e| e.player_name.as_str()).collect()
    }

    #[test]
    fn record_win() {
        let mut stats = SessionStats::default();
        stats.record_outcome(Outcome::Win, Duration::from_millis(1500));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_lost, 0);
        assert!((stats.total_time_seconds - 1.5).abs() < 1e-9);
    }

    #[test]
    fn record_loss() {
        let mut stats = SessionStats::default();
        stats.record_outcome(Outcome::Loss, Duration::from_secs(2));
        stats.record_outcome(Outcome::Loss, Duration::from_secs(4));
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.games_lost, 2);
        assert!((stats.average_time() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn average_guards_zero_games() {
        assert!(compute_average(0.0, 0).abs() < f64::EPSILON);
        assert!(compute_average(12.0, 0).abs() < f64::EPSILON);
        assert!((compute_average(12.0, 4) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn rank_is_stable() {
        let entries = vec![entry("A", 3), entry("B", 3), entry("C", 5)];
        assert_eq!(names(&rank_leaderboard(&entries)), ["C", "A", "B"]);
    }

    #[test]
    fn rank_empty() {
        assert!(rank_leaderboard(&[]).is_empty());
    }

    #[test]
    fn snapshot_mode_appends_cumulative_rows() {
        let mut ctx = SessionContext::new(LeaderboardMode::Snapshot);
        ctx.record_round("ann", &report(Outcome::Win, 10));
        ctx.record_round("ann", &report(Outcome::Loss, 20));
        ctx.record_round("bob", &report(Outcome::Win, 30));

        let rows = ctx.leaderboard.entries();
        assert_eq!(rows.len(), 3);
        assert_eq!((rows[0].games_played, rows[0].games_won), (1, 1));
        assert_eq!((rows[1].games_played, rows[1].games_won), (2, 1));
        // bob's row carries ann's rounds too
        assert_eq!(rows[2].player_name, "bob");
        assert_eq!((rows[2].games_played, rows[2].games_won), (3, 2));
        assert!((rows[2].total_time_seconds - 60.0).abs() < 1e-9);

        assert_eq!(names(&ctx.leaderboard.ranked()), ["bob", "ann", "ann"]);
    }

    #[test]
    fn per_player_mode_merges_by_name() {
        let mut ctx = SessionContext::new(LeaderboardMode::PerPlayer);
        ctx.record_round("ann", &report(Outcome::Win, 10));
        ctx.record_round("bob", &report(Outcome::Win, 30));
        ctx.record_round("ann", &report(Outcome::Win, 20));
        ctx.record_round("bob", &report(Outcome::Loss, 5));

        let rows = ctx.leaderboard.entries();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_name, "ann");
        assert_eq!((rows[0].games_played, rows[0].games_won), (2, 2));
        assert!((rows[0].average_time() - 15.0).abs() < 1e-9);
        assert_eq!((rows[1].games_played, rows[1].games_won), (2, 1));

        assert_eq!(ctx.stats.games_played, 4);
        assert_eq!(ctx.stats.games_won, 3);
        assert_eq!(ctx.stats.games_lost, 1);
    }
}

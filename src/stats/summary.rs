//! Win rate and guess distribution over recorded games

use super::StoredResult;
use std::collections::BTreeMap;

/// Aggregate view of a set of results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSummary {
    pub played: usize,
    pub won: usize,
    /// Guess count -> number of games won in that many guesses
    pub distribution: BTreeMap<usize, usize>,
}

impl StatsSummary {
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_clue_solver::session::GameMode;
    /// use wordle_clue_solver::stats::{StatsSummary, StoredResult};
    ///
    /// let game = |solved, guesses| StoredResult {
    ///     date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
    ///     mode: GameMode::Auto,
    ///     answer: "crane".to_string(),
    ///     solved,
    ///     guesses,
    /// };
    /// let summary = StatsSummary::from_results(&[game(true, 3), game(true, 4), game(false, 6)]);
    /// assert_eq!(summary.played, 3);
    /// assert_eq!(summary.won, 2);
    /// assert!((summary.win_rate() - 66.67).abs() < 0.01);
    /// ```
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a StoredResult>) -> Self {
        results
            .into_iter()
            .fold(Self::default(), |mut summary, result| {
                summary.played += 1;
                if result.solved {
                    summary.won += 1;
                    *summary.distribution.entry(result.guesses).or_insert(0) += 1;
                }
                summary
            })
    }

    #[must_use]
    pub const fn lost(&self) -> usize {
        self.played - self.won
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        self.won as f64 / self.played as f64 * 100.0
    }

    /// Mean guesses over won games
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.won == 0 {
            return None;
        }
        let total: usize = self.distribution.iter().map(|(g, n)| g * n).sum();
        Some(total as f64 / self.won as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GameMode;
    use chrono::NaiveDate;

    fn game(solved: bool, guesses: usize) -> StoredResult {
        StoredResult {
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            mode: GameMode::Auto,
            answer: "slate".to_string(),
            solved,
            guesses,
        }
    }

    #[test]
    fn empty_summary() {
        let summary = StatsSummary::from_results(std::iter::empty());
        assert_eq!(summary.played, 0);
        assert!(summary.win_rate().abs() < f64::EPSILON);
        assert_eq!(summary.average_guesses(), None);
    }

    #[test]
    fn distribution_counts_only_wins() {
        let results = [game(true, 3), game(true, 3), game(true, 5), game(false, 6)];
        let summary = StatsSummary::from_results(&results);

        assert_eq!(summary.played, 4);
        assert_eq!(summary.won, 3);
        assert_eq!(summary.lost(), 1);
        assert_eq!(summary.distribution.get(&3), Some(&2));
        assert_eq!(summary.distribution.get(&6), None);
        assert!((summary.win_rate() - 75.0).abs() < f64::EPSILON);
        let avg = summary.average_guesses().unwrap();
        assert!((avg - 11.0 / 3.0).abs() < 1e-9);
    }
}

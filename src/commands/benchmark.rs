//! Benchmark command
//!
//! Plays many back-to-back games against secrets drawn from the dictionary.

use crate::config::SessionConfig;
use crate::core::Word;
use crate::output::formatters::progress_style;
use crate::session::{GameMode, GameResult, GameSession, GuessSource, LocalBoard};
use crate::stats::{StatsSummary, StoredResult};
use crate::wordlists::CandidateStore;
use indicatif::ProgressBar;
use log::debug;
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub results: Vec<GameResult>,
    pub summary: StatsSummary,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` secrets uniformly from the dictionary, with replacement
pub fn draw_secrets<R: Rng + ?Sized>(
    dictionary: &CandidateStore,
    count: usize,
    rng: &mut R,
) -> Vec<Word> {
    (0..count)
        .filter_map(|_| dictionary.choose(rng).cloned())
        .collect()
}

/// Play one game per secret, in parallel
///
/// Every game gets its own session, so no clue knowledge leaks between
/// them. Manual mode has no one to type guesses and plays as auto.
#[allow(clippy::cast_precision_loss)]
pub fn run_benchmark(
    dictionary: &CandidateStore,
    config: &SessionConfig,
    mode: GameMode,
    secrets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(progress_style());

    let results: Vec<GameResult> = secrets
        .par_iter()
        .filter_map(|secret| {
            let mut session = GameSession::new(dictionary, config.clone());
            let mut board =
                LocalBoard::new(secret.clone()).with_max_attempts(config.max_attempts);
            let source = match mode {
                GameMode::Random => GuessSource::RandomFirst,
                GameMode::Auto | GameMode::Manual => GuessSource::Ranked,
            };

            // Results are collected from the return value; the sink is unused
            let outcome = session.play(&mut board, source, &mut Vec::new());
            pb.inc(1);
            match outcome {
                Ok(result) => {
                    pb.set_message(secret.text().to_uppercase());
                    Some(result)
                }
                Err(aborted) => {
                    debug!("Benchmark game for {secret} aborted: {aborted}");
                    None
                }
            }
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let stored: Vec<StoredResult> = results.iter().map(StoredResult::from_game).collect();
    let summary = StatsSummary::from_results(&stored);

    BenchmarkResult {
        games_per_second: results.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        results,
        summary,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{DictionarySource, WORDS_COUNT};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn embedded() -> CandidateStore {
        CandidateStore::load(&DictionarySource::Embedded).unwrap()
    }

    #[test]
    fn draws_requested_number_of_secrets() {
        let dictionary = embedded();
        let mut rng = StdRng::seed_from_u64(7);
        let secrets = draw_secrets(&dictionary, 25, &mut rng);

        assert_eq!(secrets.len(), 25);
        assert!(secrets.iter().all(|s| dictionary.contains(s)));
        assert_eq!(dictionary.len(), WORDS_COUNT);
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = embedded();
        let mut rng = StdRng::seed_from_u64(11);
        let secrets = draw_secrets(&dictionary, 20, &mut rng);

        let result = run_benchmark(
            &dictionary,
            &SessionConfig::default(),
            GameMode::Auto,
            &secrets,
            false,
        );

        assert_eq!(result.results.len(), 20);
        assert_eq!(result.summary.played, 20);
        assert!(result.results.iter().all(|r| r.attempts <= 6));
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let dictionary = embedded();
        let mut rng = StdRng::seed_from_u64(3);
        let secrets = draw_secrets(&dictionary, 15, &mut rng);

        let result = run_benchmark(
            &dictionary,
            &SessionConfig::default(),
            GameMode::Random,
            &secrets,
            false,
        );

        let distribution_sum: usize = result.summary.distribution.values().sum();
        assert_eq!(distribution_sum, result.summary.won);
        assert!(result.results.iter().all(|r| r.mode == GameMode::Random));
        for &guess_count in result.summary.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let dictionary = embedded();
        let result = run_benchmark(
            &dictionary,
            &SessionConfig::default(),
            GameMode::Auto,
            &[],
            false,
        );

        assert!(result.results.is_empty());
        assert_eq!(result.summary.played, 0);
    }
}

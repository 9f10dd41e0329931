//! Play command
//!
//! One game against the local rules engine.

use super::play_session;
use crate::config::SessionConfig;
use crate::core::Word;
use crate::error::EngineError;
use crate::session::{GameMode, GameResult, LocalBoard};
use crate::stats::ResultSink;
use crate::wordlists::CandidateStore;
use log::warn;

/// Play one game with `answer` as the secret, or a random dictionary word
///
/// Returns `Ok(None)` if the player quit a manual game.
///
/// # Errors
///
/// Returns `EngineError::NoCandidates` if no secret could be drawn.
pub fn run_play(
    dictionary: &CandidateStore,
    config: &SessionConfig,
    mode: GameMode,
    answer: Option<Word>,
    sink: &mut dyn ResultSink,
) -> Result<Option<GameResult>, EngineError> {
    let answer = match answer {
        Some(word) => {
            if !dictionary.contains(&word) {
                warn!("{word} is not in the dictionary; the solver cannot find it");
            }
            word
        }
        None => dictionary
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(EngineError::NoCandidates)?,
    };

    let mut board = LocalBoard::new(answer).with_max_attempts(config.max_attempts);
    Ok(play_session(dictionary, config, &mut board, mode, sink))
}

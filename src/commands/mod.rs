//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod stats;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, draw_secrets, run_benchmark};
pub use play::run_play;
pub use stats::run_stats;

use crate::config::SessionConfig;
use crate::session::{GameBoard, GameMode, GameResult, GameSession, GuessSource, TerminalPrompt};
use crate::stats::ResultSink;
use crate::wordlists::CandidateStore;
use log::info;

/// Play one session on `board`, typing guesses at the terminal in manual mode
///
/// Returns `None` when the player quits; nothing is recorded then.
pub(crate) fn play_session<B: GameBoard + ?Sized>(
    dictionary: &CandidateStore,
    config: &SessionConfig,
    board: &mut B,
    mode: GameMode,
    sink: &mut dyn ResultSink,
) -> Option<GameResult> {
    let mut session = GameSession::new(dictionary, config.clone());
    let mut prompt = TerminalPrompt::stdio();
    let source = match mode {
        GameMode::Auto => GuessSource::Ranked,
        GameMode::Random => GuessSource::RandomFirst,
        GameMode::Manual => GuessSource::Manual(&mut prompt),
    };

    match session.play(board, source, sink) {
        Ok(result) => Some(result),
        Err(aborted) => {
            info!("{aborted}");
            None
        }
    }
}

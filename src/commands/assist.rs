//! Assist command
//!
//! Solve a game played elsewhere: the player types each guess into the real
//! puzzle and relays the colours back.

use super::play_session;
use crate::config::SessionConfig;
use crate::session::{GameMode, GameResult, TerminalBoard};
use crate::stats::ResultSink;
use crate::wordlists::CandidateStore;

/// Run one relayed game on the terminal
///
/// Returns `None` if the player quit.
pub fn run_assist(
    dictionary: &CandidateStore,
    config: &SessionConfig,
    mode: GameMode,
    sink: &mut dyn ResultSink,
) -> Option<GameResult> {
    println!("After each guess, enter the feedback pattern:");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/x/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right, 'quit' to stop\n");

    let mut board = TerminalBoard::stdio();
    play_session(dictionary, config, &mut board, mode, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Outcome;
    use std::io::Cursor;
    use std::time::Duration;

    fn dictionary() -> CandidateStore {
        CandidateStore::parse("crane slate irate stare").unwrap()
    }

    fn config() -> SessionConfig {
        SessionConfig::default().with_feedback_timeout(Duration::from_secs(1))
    }

    #[test]
    fn relayed_game_is_recorded() {
        let dictionary = dictionary();
        // irate ranks first; slate scores it "--GGG"
        let mut board = TerminalBoard::new(Cursor::new("--ggg\nwin\n"), Vec::new());
        let mut results = Vec::new();

        let result = play_session(
            &dictionary,
            &config(),
            &mut board,
            GameMode::Auto,
            &mut results,
        )
        .unwrap();

        assert_eq!(result.outcome, Outcome::Solved);
        assert_eq!(result.attempts, 2);
        assert_eq!(result.answer_text(), "slate");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn quitting_records_nothing() {
        let dictionary = dictionary();
        let mut board = TerminalBoard::new(Cursor::new("-----\nquit\n"), Vec::new());
        let mut results = Vec::new();

        let result = play_session(
            &dictionary,
            &config(),
            &mut board,
            GameMode::Auto,
            &mut results,
        );

        assert!(result.is_none());
        assert!(results.is_empty());
    }
}

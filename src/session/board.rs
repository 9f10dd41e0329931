//! The game board a session plays against
//!
//! Whatever actually hosts the puzzle (a web page, a person typing colours,
//! a local rules engine) sits behind `GameBoard`. The session only submits
//! words, waits for the revealed tiles and asks for the answer at the end.

use crate::core::{Feedback, Word};
use crate::error::BoardError;
use std::thread;
use std::time::{Duration, Instant};

/// Guess submission and feedback capability
pub trait GameBoard {
    /// Enter a guess on the board
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the guess could not be submitted.
    fn submit(&mut self, guess: &Word) -> Result<(), BoardError>;

    /// Check whether the tiles of `attempt` (0-based) have been revealed
    ///
    /// Returns `Ok(None)` while they are still pending.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the board cannot be read.
    fn poll_feedback(&mut self, attempt: usize) -> Result<Option<Feedback>, BoardError>;

    /// The secret word, once the game is over
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the board will not reveal it.
    fn reveal_answer(&mut self) -> Result<Word, BoardError>;

    /// Poll until the tiles of `attempt` are revealed or `timeout` elapses
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Timeout` when the deadline passes, or any error
    /// raised while polling.
    fn await_feedback(
        &mut self,
        attempt: usize,
        timeout: Duration,
        interval: Duration,
    ) -> Result<Feedback, BoardError> {
        let start = Instant::now();
        loop {
            if let Some(feedback) = self.poll_feedback(attempt)? {
                return Ok(feedback);
            }
            let waited = start.elapsed();
            if waited >= timeout {
                return Err(BoardError::Timeout { attempt, waited });
            }
            thread::sleep(interval.min(timeout - waited));
        }
    }
}

//! Local rules engine
//!
//! A `GameBoard` that knows the secret word and scores guesses itself.

use super::GameBoard;
use crate::config::MAX_ATTEMPTS;
use crate::core::{Feedback, Word};
use crate::error::BoardError;

/// Board hosting a game with a known answer
#[derive(Debug, Clone)]
pub struct LocalBoard {
    answer: Word,
    max_attempts: usize,
    rows: Vec<Feedback>,
}

impl LocalBoard {
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            max_attempts: MAX_ATTEMPTS,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Rows revealed so far
    #[must_use]
    pub fn rows(&self) -> &[Feedback] {
        &self.rows
    }

    fn is_over(&self) -> bool {
        self.rows.last().is_some_and(Feedback::is_perfect) || self.rows.len() >= self.max_attempts
    }
}

impl GameBoard for LocalBoard {
    fn submit(&mut self, guess: &Word) -> Result<(), BoardError> {
        if self.is_over() {
            return Err(BoardError::Disconnected(format!(
                "game already over after {} guesses",
                self.rows.len()
            )));
        }
        self.rows.push(Feedback::calculate(guess, &self.answer));
        Ok(())
    }

    fn poll_feedback(&mut self, attempt: usize) -> Result<Option<Feedback>, BoardError> {
        Ok(self.rows.get(attempt).copied())
    }

    fn reveal_answer(&mut self) -> Result<Word, BoardError> {
        Ok(self.answer.clone())
    }
}

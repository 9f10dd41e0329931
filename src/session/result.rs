//! Game modes and the record produced when a session ends

use crate::core::{Feedback, Word};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// How guesses are chosen during a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Every guess from the ranker
    Auto,
    /// Random dictionary word first, ranker afterwards
    Random,
    /// Guesses typed by the player
    Manual,
}

impl GameMode {
    /// Stable name used on the command line and in the results store
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Random => "rand",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "rand" | "random" => Ok(Self::Random),
            "manual" => Ok(Self::Manual),
            other => Err(format!(
                "Unknown game mode '{other}' (expected auto, rand or manual)"
            )),
        }
    }
}

/// Why a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every position confirmed
    Solved,
    /// Attempt limit reached without solving
    Exhausted,
    /// The clues ruled out every dictionary word
    NoCandidates,
    /// The board failed; the game is recorded as a loss
    Crashed { reason: String },
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Record of one finished session
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub date: NaiveDate,
    pub mode: GameMode,
    /// The secret word, when known
    pub answer: Option<Word>,
    pub solved: bool,
    pub attempts: usize,
    pub outcome: Outcome,
    /// Every guess played with the feedback it received
    pub history: Vec<(Word, Feedback)>,
}

impl GameResult {
    #[must_use]
    pub fn answer_text(&self) -> &str {
        self.answer.as_ref().map_or("", Word::text)
    }
}

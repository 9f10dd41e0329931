//! Error types for the solver engine and its collaborators.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the engine itself.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The dictionary could not be read or parsed, or held no usable words.
    #[error("Dictionary unavailable ({source_name}): {reason}")]
    DictionaryUnavailable { source_name: String, reason: String },

    /// The elimination pipeline left nothing to guess.
    #[error("No candidates remain for the accumulated clues")]
    NoCandidates,

    /// Fault surfaced by the guess submission / feedback collaborator.
    #[error("Game board failure: {0}")]
    Board(#[from] BoardError),
}

/// Errors surfaced by a `GameBoard` implementation.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Tiles for the attempt were not revealed before the deadline.
    #[error("Timed out after {waited:?} waiting for feedback on attempt {attempt}")]
    Timeout { attempt: usize, waited: Duration },

    /// The board returned feedback that does not fit the guess or the game.
    #[error("Unexpected feedback: {0}")]
    UnexpectedFeedback(String),

    /// The board went away (closed page, exhausted game, lost connection).
    #[error("Board disconnected: {0}")]
    Disconnected(String),

    /// The caller asked to abandon the session.
    #[error("Session interrupted by the user")]
    Interrupted,

    #[error("I/O error talking to the board")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the results store.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Failed to access stats file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed stats row {line} in {path}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// A session abandoned by the caller; nothing is recorded for it.
#[derive(Debug, Error)]
#[error("Session aborted after {attempts} attempts")]
pub struct SessionAborted {
    pub attempts: usize,
}

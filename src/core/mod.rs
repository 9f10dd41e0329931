//! Core domain types for Wordle
//!
//! Pure value types with no I/O: words and the per-tile clue feedback.

mod clue;
mod word;

pub use clue::{Clue, Feedback, Tile};
pub use word::{WORD_LENGTH, Word, WordError};

//! The guess-constraint engine
//!
//! Synchronous and free of I/O: the ledger accumulates clues, the pipeline
//! narrows the dictionary with them and the ranker picks the next guess.

mod ledger;
pub mod pipeline;
mod ranker;

pub use ledger::{ClueLedger, LetterSet, Run};
pub use pipeline::{EliminationPipeline, StageCounts};
pub use ranker::{ENGLISH_LETTER_FREQUENCY, GuessRanker, Ranked};

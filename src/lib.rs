//! Wordle Clue Solver
//!
//! A Wordle solver that accumulates per-position clues, narrows a dictionary
//! with a three-stage elimination pipeline and picks each guess by English
//! letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_clue_solver::core::{Feedback, Word};
//! use wordle_clue_solver::solver::{ClueLedger, EliminationPipeline, GuessRanker};
//! use wordle_clue_solver::wordlists::CandidateStore;
//!
//! let dictionary = CandidateStore::parse("crane slate irate stare").unwrap();
//! let mut ledger = ClueLedger::new();
//!
//! // Tiles revealed for IRATE when the answer is SLATE
//! let guess = Word::new("irate").unwrap();
//! ledger.ingest(&Feedback::from_pattern(&guess, "--GGG").unwrap());
//!
//! let candidates = EliminationPipeline::run(dictionary.words(), &ledger);
//! let best = GuessRanker::default().rank(&candidates, &ledger).unwrap();
//! assert_eq!(best.word.text(), "slate");
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Clue bookkeeping, elimination and ranking
pub mod solver;

// Game sessions and boards
pub mod session;

// Results store
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

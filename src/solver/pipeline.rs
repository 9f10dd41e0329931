//! Candidate elimination
//!
//! Three filters applied in a fixed order, each producing a new sequence that
//! keeps the relative order of the surviving words:
//! 1. Position-absence: drop words with an absent letter at the position it was marked
//! 2. Correct runs: each run of confirmed letters must appear verbatim at its span
//! 3. Wrong-position: drop words with a present letter where it was seen, and
//!    require every present letter somewhere in the word

use super::ClueLedger;
use crate::core::Word;
use log::debug;

/// Survivor count after each stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageCounts {
    pub input: usize,
    pub after_absent: usize,
    pub after_correct: usize,
    pub after_present: usize,
}

/// Stage 1: discard words holding a letter at a position where it was marked absent
///
/// Position-scoped: a letter absent at position 2 does not remove words that
/// hold it elsewhere.
#[must_use]
pub fn drop_absent(candidates: &[Word], ledger: &ClueLedger) -> Vec<Word> {
    candidates
        .iter()
        .filter(|word| {
            !word
                .chars()
                .iter()
                .enumerate()
                .any(|(position, &letter)| ledger.absent(position).contains(letter))
        })
        .cloned()
        .collect()
}

/// Stage 2: keep words whose letters match every run of confirmed positions
#[must_use]
pub fn match_correct_runs(candidates: &[Word], ledger: &ClueLedger) -> Vec<Word> {
    let runs = ledger.correct_runs();
    if runs.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|word| {
            runs.iter()
                .all(|run| word.chars()[run.start..run.end()] == run.letters[..])
        })
        .cloned()
        .collect()
}

/// Stage 3: apply "present" clues
///
/// A word is dropped if it holds a present letter at a position where that
/// letter was seen, or if it lacks any letter marked present anywhere.
#[must_use]
pub fn drop_misplaced(candidates: &[Word], ledger: &ClueLedger) -> Vec<Word> {
    let required = ledger.present_union();

    candidates
        .iter()
        .filter(|word| {
            let misplaced = word
                .chars()
                .iter()
                .enumerate()
                .any(|(position, &letter)| ledger.present(position).contains(letter));
            !misplaced && required.iter().all(|&letter| word.has_letter(letter))
        })
        .cloned()
        .collect()
}

/// Runs the three stages in order
pub struct EliminationPipeline;

impl EliminationPipeline {
    /// Narrow `candidates` to the words consistent with `ledger`
    ///
    /// Never fails: an empty result is returned as-is for the caller to handle.
    ///
    /// # Examples
    /// ```
    /// use wordle_clue_solver::core::{Feedback, Word};
    /// use wordle_clue_solver::solver::{ClueLedger, EliminationPipeline};
    ///
    /// let words: Vec<Word> = ["crane", "slate", "irate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut ledger = ClueLedger::new();
    /// ledger.ingest(&Feedback::calculate(&words[0], &words[1]));
    ///
    /// let survivors = EliminationPipeline::run(&words, &ledger);
    /// assert_eq!(survivors, vec![words[1].clone()]);
    /// ```
    #[must_use]
    pub fn run(candidates: &[Word], ledger: &ClueLedger) -> Vec<Word> {
        Self::run_traced(candidates, ledger).0
    }

    /// Like `run`, also reporting the survivor count after each stage
    #[must_use]
    pub fn run_traced(candidates: &[Word], ledger: &ClueLedger) -> (Vec<Word>, StageCounts) {
        let after_absent = drop_absent(candidates, ledger);
        let after_correct = match_correct_runs(&after_absent, ledger);
        let after_present = drop_misplaced(&after_correct, ledger);

        let counts = StageCounts {
            input: candidates.len(),
            after_absent: after_absent.len(),
            after_correct: after_correct.len(),
            after_present: after_present.len(),
        };
        debug!(
            "Pipeline {} -> {} (absent) -> {} (correct) -> {} (present)",
            counts.input, counts.after_absent, counts.after_correct, counts.after_present
        );

        (after_present, counts)
    }
}

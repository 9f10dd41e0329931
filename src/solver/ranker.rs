//! Letter-frequency guess ranking
//!
//! Scores each candidate by the summed English frequency of its distinct
//! letters, ignoring letters already marked absent somewhere. Static and
//! cheap; makes no attempt at information-theoretic optimality.

use super::ClueLedger;
use crate::core::Word;
use crate::error::EngineError;
use rustc_hash::FxHashSet;

/// Relative frequency (percent) of each letter in English text, `a` to `z`
pub const ENGLISH_LETTER_FREQUENCY: [f64; 26] = [
    8.12, // a
    1.49, // b
    2.71, // c
    4.32, // d
    12.0, // e
    2.30, // f
    2.03, // g
    5.92, // h
    7.31, // i
    0.10, // j
    0.69, // k
    3.98, // l
    2.61, // m
    6.95, // n
    7.68, // o
    1.82, // p
    0.11, // q
    6.02, // r
    6.28, // s
    9.10, // t
    2.88, // u
    1.11, // v
    2.09, // w
    0.17, // x
    2.11, // y
    0.07, // z
];

/// The chosen guess and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Picks the next guess from narrowed candidates
#[derive(Debug, Clone)]
pub struct GuessRanker {
    weights: [f64; 26],
}

impl GuessRanker {
    #[must_use]
    pub const fn new(weights: [f64; 26]) -> Self {
        Self { weights }
    }

    /// Score one word: distinct letters only, excluded letters count zero
    #[must_use]
    pub fn score(&self, word: &Word, excluded: &FxHashSet<u8>) -> f64 {
        // Fixed summation order so anagrams score bit-identically
        let mut letters: Vec<u8> = word.distinct_letters().into_iter().collect();
        letters.sort_unstable();

        letters
            .into_iter()
            .filter(|letter| !excluded.contains(letter))
            .map(|letter| self.weights[usize::from(letter - b'a')])
            .sum()
    }

    /// Select the highest scoring candidate
    ///
    /// Letters marked absent at any position score zero. Ties keep the earliest
    /// candidate, so the result depends only on the inputs.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoCandidates` when `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_clue_solver::core::Word;
    /// use wordle_clue_solver::solver::{ClueLedger, GuessRanker};
    ///
    /// let words = vec![Word::new("fuzzy").unwrap(), Word::new("irate").unwrap()];
    /// let best = GuessRanker::default().rank(&words, &ClueLedger::new()).unwrap();
    /// assert_eq!(best.word.text(), "irate");
    /// ```
    pub fn rank<'a>(
        &self,
        candidates: &'a [Word],
        ledger: &ClueLedger,
    ) -> Result<Ranked<'a>, EngineError> {
        let excluded = ledger.absent_union();
        let mut scored = candidates.iter().map(|word| Ranked {
            word,
            score: self.score(word, &excluded),
        });

        let first = scored.next().ok_or(EngineError::NoCandidates)?;
        Ok(scored.fold(first, |best, next| {
            if next.score > best.score { next } else { best }
        }))
    }
}

impl Default for GuessRanker {
    fn default() -> Self {
        Self::new(ENGLISH_LETTER_FREQUENCY)
    }
}

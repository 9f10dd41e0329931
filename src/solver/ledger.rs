//! Accumulated clue knowledge
//!
//! The ledger keeps, for every position, the letters observed under each clue
//! state across all attempts of one session. It is the only mutable knowledge
//! the engine has; the pipeline and ranker only read it.
//!
//! Absence is recorded per position, never word-wide: a letter reported absent
//! at position 2 says nothing about the other positions.

use crate::core::{Clue, Feedback, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Small insertion-ordered set of letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet(Vec<u8>);

impl LetterSet {
    /// Insert a letter, returning false if it was already present
    pub fn insert(&mut self, letter: u8) -> bool {
        if self.0.contains(&letter) {
            return false;
        }
        self.0.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The letter recorded first
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<u8> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

/// A maximal span of consecutive positions with a confirmed letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub letters: Vec<u8>,
}

impl Run {
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.letters.len()
    }
}

/// Per-position clue knowledge for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueLedger {
    correct: [LetterSet; WORD_LENGTH],
    absent: [LetterSet; WORD_LENGTH],
    present: [LetterSet; WORD_LENGTH],
}

impl ClueLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything (session reset)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record one clue for a letter at a position
    ///
    /// Idempotent: returns false when the same letter was already recorded at
    /// that position under the same clue.
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn record(&mut self, position: usize, letter: u8, clue: Clue) -> bool {
        let letter = letter.to_ascii_lowercase();
        let slot = match clue {
            Clue::Correct => &mut self.correct[position],
            Clue::Absent => &mut self.absent[position],
            Clue::Present => &mut self.present[position],
        };
        slot.insert(letter)
    }

    /// Record every tile of a guess' feedback, returning how many clues were new
    ///
    /// # Examples
    /// ```
    /// use wordle_clue_solver::core::{Feedback, Word};
    /// use wordle_clue_solver::solver::ClueLedger;
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let mut ledger = ClueLedger::new();
    /// assert_eq!(ledger.ingest(&Feedback::from_pattern(&guess, "G----").unwrap()), 5);
    /// assert_eq!(ledger.ingest(&Feedback::from_pattern(&guess, "G----").unwrap()), 0);
    /// ```
    pub fn ingest(&mut self, feedback: &Feedback) -> usize {
        feedback
            .tiles()
            .iter()
            .enumerate()
            .filter(|(position, tile)| self.record(*position, tile.letter, tile.clue))
            .count()
    }

    #[must_use]
    pub fn correct(&self, position: usize) -> &LetterSet {
        &self.correct[position]
    }

    #[must_use]
    pub fn absent(&self, position: usize) -> &LetterSet {
        &self.absent[position]
    }

    #[must_use]
    pub fn present(&self, position: usize) -> &LetterSet {
        &self.present[position]
    }

    /// Every letter marked absent at any position
    #[must_use]
    pub fn absent_union(&self) -> FxHashSet<u8> {
        self.absent.iter().flat_map(LetterSet::iter).collect()
    }

    /// Every letter marked present at any position
    #[must_use]
    pub fn present_union(&self) -> FxHashSet<u8> {
        self.present.iter().flat_map(LetterSet::iter).collect()
    }

    /// Group confirmed positions into maximal contiguous runs
    ///
    /// Positions {1, 2, 4} confirmed give runs `1..3` and `4..5`. When a position
    /// holds more than one confirmed letter the first recorded one is used.
    #[must_use]
    pub fn correct_runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut current: Option<Run> = None;

        for (position, letters) in self.correct.iter().enumerate() {
            match letters.first() {
                Some(letter) => match current.as_mut() {
                    Some(run) => run.letters.push(letter),
                    None => {
                        current = Some(Run {
                            start: position,
                            letters: vec![letter],
                        });
                    }
                },
                None => runs.extend(current.take()),
            }
        }
        runs.extend(current);
        runs
    }

    /// True when every position holds exactly one confirmed letter
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct.iter().all(|letters| letters.len() == 1)
    }

    /// The word spelled by the confirmed letters, once solved
    #[must_use]
    pub fn solved_word(&self) -> Option<Word> {
        if !self.is_solved() {
            return None;
        }
        let text: String = self
            .correct
            .iter()
            .filter_map(LetterSet::first)
            .map(char::from)
            .collect();
        Word::new(text).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, pattern: &str) -> Feedback {
        Feedback::from_pattern(&Word::new(guess).unwrap(), pattern).unwrap()
    }

    #[test]
    fn record_is_idempotent() {
        let mut once = ClueLedger::new();
        assert!(once.record(0, b'a', Clue::Correct));

        let mut twice = once.clone();
        assert!(!twice.record(0, b'a', Clue::Correct));
        assert_eq!(once, twice);
    }

    #[test]
    fn record_normalizes_case() {
        let mut ledger = ClueLedger::new();
        ledger.record(3, b'Q', Clue::Absent);
        assert!(ledger.absent(3).contains(b'q'));
    }

    #[test]
    fn record_dispatches_by_clue() {
        let mut ledger = ClueLedger::new();
        ledger.record(1, b'r', Clue::Correct);
        ledger.record(2, b'a', Clue::Present);
        ledger.record(3, b'n', Clue::Absent);

        assert!(ledger.correct(1).contains(b'r'));
        assert!(ledger.present(2).contains(b'a'));
        assert!(ledger.absent(3).contains(b'n'));
        assert!(ledger.absent(1).is_empty());
    }

    #[test]
    fn ingest_counts_new_clues() {
        let mut ledger = ClueLedger::new();
        assert_eq!(ledger.ingest(&feedback("crane", "GY---")), 5);
        assert_eq!(ledger.ingest(&feedback("crane", "GY---")), 0);
        assert_eq!(ledger.ingest(&feedback("cloth", "G----")), 4);
    }

    #[test]
    fn absence_stays_position_scoped() {
        let mut ledger = ClueLedger::new();
        ledger.ingest(&feedback("speed", "G-G--"));

        // The second E is absent only at position 3
        assert!(ledger.absent(3).contains(b'e'));
        assert!(!ledger.absent(2).contains(b'e'));
        assert!(ledger.absent_union().contains(&b'e'));
    }

    #[test]
    fn unions_collect_all_positions() {
        let mut ledger = ClueLedger::new();
        ledger.ingest(&feedback("crane", "-Y-Y-"));
        ledger.ingest(&feedback("north", "Y----"));

        let present = ledger.present_union();
        assert_eq!(present.len(), 2);
        assert!(present.contains(&b'r'));
        assert!(present.contains(&b'n'));
    }

    #[test]
    fn correct_runs_split_on_gaps() {
        let mut ledger = ClueLedger::new();
        ledger.record(1, b'l', Clue::Correct);
        ledger.record(2, b'a', Clue::Correct);
        ledger.record(4, b'e', Clue::Correct);

        let runs = ledger.correct_runs();
        assert_eq!(
            runs,
            vec![
                Run {
                    start: 1,
                    letters: b"la".to_vec()
                },
                Run {
                    start: 4,
                    letters: b"e".to_vec()
                },
            ]
        );
        assert_eq!(runs[0].end(), 3);
    }

    #[test]
    fn correct_runs_empty_ledger() {
        assert!(ClueLedger::new().correct_runs().is_empty());
    }

    #[test]
    fn solved_requires_every_position() {
        let mut ledger = ClueLedger::new();
        ledger.ingest(&feedback("crane", "GGGG-"));
        assert!(!ledger.is_solved());
        assert_eq!(ledger.solved_word(), None);

        ledger.record(4, b'e', Clue::Correct);
        assert!(ledger.is_solved());
        assert_eq!(ledger.solved_word(), Some(Word::new("crane").unwrap()));
    }

    #[test]
    fn solved_rejects_conflicting_letters() {
        let mut ledger = ClueLedger::new();
        ledger.ingest(&feedback("crane", "GGGGG"));
        ledger.record(0, b'b', Clue::Correct);
        assert!(!ledger.is_solved());
    }

    #[test]
    fn clear_resets_everything() {
        let mut ledger = ClueLedger::new();
        ledger.ingest(&feedback("crane", "GY---"));
        ledger.clear();
        assert_eq!(ledger, ClueLedger::new());
    }
}

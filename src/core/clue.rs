//! Per-letter clue feedback
//!
//! After every guess the game colours each tile:
//! - Correct (green): letter in the right position
//! - Present (yellow): letter in the word, wrong position
//! - Absent (gray): letter not in the word (as far as this tile is concerned)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Clue state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clue {
    Correct,
    Present,
    Absent,
}

impl Clue {
    /// Parse a tile marker
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'X'/'x'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One revealed tile: the letter shown and its clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: u8,
    pub clue: Clue,
}

/// The five tiles returned for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Tile; WORD_LENGTH]);

impl Feedback {
    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LENGTH]) -> Self {
        Self(tiles)
    }

    /// Pair a guess with one clue per position
    #[must_use]
    pub fn from_clues(guess: &Word, clues: [Clue; WORD_LENGTH]) -> Self {
        let mut tiles = [Tile {
            letter: 0,
            clue: Clue::Absent,
        }; WORD_LENGTH];
        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = Tile {
                letter: guess.char_at(i),
                clue: clues[i],
            };
        }
        Self(tiles)
    }

    /// Parse a pattern string like "GY-GY" or "🟩🟨⬜🟩🟨" for a guess
    ///
    /// Returns `None` unless the pattern has exactly five valid markers.
    ///
    /// # Examples
    /// ```
    /// use wordle_clue_solver::core::{Clue, Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::from_pattern(&guess, "gy-x_").unwrap();
    /// assert_eq!(feedback.tiles()[0].clue, Clue::Correct);
    /// assert_eq!(feedback.tiles()[1].clue, Clue::Present);
    /// ```
    #[must_use]
    pub fn from_pattern(guess: &Word, pattern: &str) -> Option<Self> {
        let clues: Vec<Clue> = pattern
            .trim()
            .chars()
            .map(Clue::from_char)
            .collect::<Option<_>>()?;
        let clues: [Clue; WORD_LENGTH] = clues.try_into().ok()?;
        Some(Self::from_clues(guess, clues))
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Standard Wordle rules, including duplicate letters:
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_clue_solver::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut clues = [Clue::Absent; WORD_LENGTH];
        let mut available = [0u8; 26];

        for (i, &letter) in answer.chars().iter().enumerate() {
            if guess.char_at(i) == letter {
                clues[i] = Clue::Correct;
            } else {
                available[usize::from(letter - b'a')] += 1;
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if clues[i] == Clue::Correct {
                continue;
            }
            let slot = &mut available[usize::from(letter - b'a')];
            if *slot > 0 {
                clues[i] = Clue::Present;
                *slot -= 1;
            }
        }

        Self::from_clues(guess, clues)
    }

    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// True when every tile is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|tile| tile.clue == Clue::Correct)
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tile| tile.clue.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            let marker = match tile.clue {
                Clue::Correct => 'G',
                Clue::Present => 'Y',
                Clue::Absent => '-',
            };
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn calculate_all_absent() {
        let feedback = Feedback::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(feedback.to_string(), "-----");
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn calculate_all_correct() {
        let feedback = Feedback::calculate(&word("crane"), &word("crane"));
        assert!(feedback.is_perfect());
    }

    #[test]
    fn calculate_duplicate_letters_yellow() {
        // SPEED vs ERASE: S yellow, P gray, E yellow, E yellow, D gray
        let feedback = Feedback::calculate(&word("speed"), &word("erase"));
        assert_eq!(feedback.to_string(), "Y-YY-");
    }

    #[test]
    fn calculate_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: R yellow, O yellow, B gray, O green, T gray
        let feedback = Feedback::calculate(&word("robot"), &word("floor"));
        assert_eq!(feedback.to_string(), "YY-G-");
    }

    #[test]
    fn calculate_extra_duplicate_is_absent() {
        // Only one L in PLANT, so the second L of LLAMA gets no clue
        let feedback = Feedback::calculate(&word("llama"), &word("plant"));
        assert_eq!(feedback.to_string(), "-GG--");
    }

    #[test]
    fn tiles_carry_guess_letters() {
        let feedback = Feedback::calculate(&word("crane"), &word("slate"));
        let letters: Vec<u8> = feedback.tiles().iter().map(|t| t.letter).collect();
        assert_eq!(letters, b"crane");
    }

    #[test]
    fn from_pattern_valid_markers() {
        let guess = word("crane");
        let p1 = Feedback::from_pattern(&guess, "GYG--").unwrap();
        let p2 = Feedback::from_pattern(&guess, "🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::from_pattern(&guess, " gygxx ").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
    }

    #[test]
    fn from_pattern_invalid() {
        let guess = word("crane");
        assert!(Feedback::from_pattern(&guess, "GYGGYG").is_none());
        assert!(Feedback::from_pattern(&guess, "GYG").is_none());
        assert!(Feedback::from_pattern(&guess, "GAGGY").is_none());
        assert!(Feedback::from_pattern(&guess, "").is_none());
    }

    #[test]
    fn emoji_rendering() {
        let feedback = Feedback::from_pattern(&word("crane"), "GY---").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜⬜");
    }
}

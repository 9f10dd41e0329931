//! Terminal collaborators
//!
//! A person plays the real puzzle elsewhere and relays it here: the board
//! prints each guess and reads back the colours, the prompt reads typed
//! guesses for manual mode.

use super::{GameBoard, GuessPrompt};
use crate::core::{Clue, Feedback, WORD_LENGTH, Word};
use crate::error::BoardError;
use std::io::{self, BufRead, Write};

/// Line-oriented input shared by the board and the prompt
///
/// Implemented for `io::Stdin` directly (not its lock) so both collaborators
/// can read from the terminal during the same game.
pub trait LineReader {
    /// Read one line into `buf`, returning the number of bytes read (0 at EOF)
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Print `prompt`, then read one trimmed line
///
/// EOF and the quit commands both map to `BoardError::Interrupted`.
fn ask<R: LineReader, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, BoardError> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BoardError::Interrupted);
    }
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "quit" | "q" | "exit" => Err(BoardError::Interrupted),
        _ => Ok(line),
    }
}

/// Board relayed by a person typing feedback patterns
pub struct TerminalBoard<R, W> {
    input: R,
    output: W,
    last_guess: Option<Word>,
}

impl<R: LineReader, W: Write> TerminalBoard<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            last_guess: None,
        }
    }

    /// Give back the writer, mostly for inspecting output in tests
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TerminalBoard<io::Stdin, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineReader, W: Write> GameBoard for TerminalBoard<R, W> {
    fn submit(&mut self, guess: &Word) -> Result<(), BoardError> {
        writeln!(self.output, "\nPlay: {}", guess.text().to_uppercase())?;
        self.last_guess = Some(guess.clone());
        Ok(())
    }

    fn poll_feedback(&mut self, attempt: usize) -> Result<Option<Feedback>, BoardError> {
        let guess = self.last_guess.clone().ok_or_else(|| {
            BoardError::UnexpectedFeedback(format!(
                "no guess submitted for attempt {}",
                attempt + 1
            ))
        })?;

        loop {
            let line = ask(
                &mut self.input,
                &mut self.output,
                "Feedback (G/Y/-, 'win', or 'quit')",
            )?;
            if matches!(line.as_str(), "win" | "correct" | "solved") {
                return Ok(Some(Feedback::from_clues(&guess, [Clue::Correct; WORD_LENGTH])));
            }
            if let Some(feedback) = Feedback::from_pattern(&guess, &line) {
                return Ok(Some(feedback));
            }
            writeln!(
                self.output,
                "Invalid pattern! Use five of G/Y/- (or 🟩🟨⬜), e.g. G-Y--"
            )?;
        }
    }

    fn reveal_answer(&mut self) -> Result<Word, BoardError> {
        loop {
            let line = ask(
                &mut self.input,
                &mut self.output,
                "What was the answer? (blank to skip)",
            )?;
            if line.is_empty() {
                return Err(BoardError::Disconnected("answer not given".to_string()));
            }
            match Word::new(line) {
                Ok(word) => return Ok(word),
                Err(e) => writeln!(self.output, "Invalid word: {e}")?,
            }
        }
    }
}

/// Reads guesses typed by the player, offering the ranker's suggestion
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: LineReader, W: Write> TerminalPrompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompt<io::Stdin, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineReader, W: Write> GuessPrompt for TerminalPrompt<R, W> {
    fn next_guess(
        &mut self,
        attempt: usize,
        suggestion: Option<&Word>,
    ) -> Result<Word, BoardError> {
        let prompt = match suggestion {
            Some(word) => format!(
                "Guess {} (enter for {})",
                attempt + 1,
                word.text().to_uppercase()
            ),
            None => format!("Guess {}", attempt + 1),
        };

        loop {
            let line = ask(&mut self.input, &mut self.output, &prompt)?;
            if line.is_empty() {
                if let Some(word) = suggestion {
                    return Ok(word.clone());
                }
                continue;
            }
            match Word::new(line) {
                Ok(word) => return Ok(word),
                Err(e) => writeln!(self.output, "Invalid word: {e}")?,
            }
        }
    }

    fn rejected(&mut self, guess: &Word) {
        // Best effort; a broken terminal surfaces on the next read
        let _ = writeln!(
            self.output,
            "{} is not in the word list",
            guess.text().to_uppercase()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn board(script: &str) -> TerminalBoard<Cursor<String>, Vec<u8>> {
        TerminalBoard::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn reads_pattern_for_last_guess() {
        let mut board = board("--g-g\n");
        board.submit(&word("crane")).unwrap();
        let feedback = board.poll_feedback(0).unwrap().unwrap();
        assert_eq!(feedback, Feedback::calculate(&word("crane"), &word("slate")));
    }

    #[test]
    fn retries_invalid_patterns() {
        let mut board = board("nope\nGGGG\n🟩⬜⬜⬜🟨\n");
        board.submit(&word("slate")).unwrap();
        let feedback = board.poll_feedback(0).unwrap().unwrap();
        assert_eq!(feedback.to_string(), "G---Y");

        let output = String::from_utf8(board.into_output()).unwrap();
        assert_eq!(output.matches("Invalid pattern").count(), 2);
    }

    #[test]
    fn win_shortcut_is_all_correct() {
        let mut board = board("win\n");
        board.submit(&word("slate")).unwrap();
        assert!(board.poll_feedback(0).unwrap().unwrap().is_perfect());
    }

    #[test]
    fn quit_and_eof_interrupt() {
        let mut quitting = board("quit\n");
        quitting.submit(&word("slate")).unwrap();
        assert!(matches!(
            quitting.poll_feedback(0),
            Err(BoardError::Interrupted)
        ));

        let mut closed = board("");
        closed.submit(&word("slate")).unwrap();
        assert!(matches!(closed.poll_feedback(0), Err(BoardError::Interrupted)));
    }

    #[test]
    fn feedback_without_guess_is_unexpected() {
        let mut board = board("ggggg\n");
        assert!(matches!(
            board.poll_feedback(0),
            Err(BoardError::UnexpectedFeedback(_))
        ));
    }

    #[test]
    fn reveal_reads_answer_or_skips() {
        let mut answered = board("12345\nSlate\n");
        assert_eq!(answered.reveal_answer().unwrap(), word("slate"));

        let mut skipped = board("\n");
        assert!(matches!(
            skipped.reveal_answer(),
            Err(BoardError::Disconnected(_))
        ));
    }

    #[test]
    fn prompt_accepts_suggestion_on_blank() {
        let mut prompt = TerminalPrompt::new(Cursor::new("\ncrane\n"), Vec::new());
        let suggestion = word("irate");
        assert_eq!(prompt.next_guess(0, Some(&suggestion)).unwrap(), suggestion);
        assert_eq!(prompt.next_guess(1, Some(&suggestion)).unwrap(), word("crane"));
    }

    #[test]
    fn prompt_retries_invalid_words() {
        let mut prompt = TerminalPrompt::new(Cursor::new("toolong\nq\n"), Vec::new());
        assert!(matches!(
            prompt.next_guess(0, None),
            Err(BoardError::Interrupted)
        ));
    }
}

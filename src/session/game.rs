//! Bounded-attempt game session
//!
//! One session owns its clue ledger and candidate list exclusively and walks
//! `Init -> AwaitingGuess -> AwaitingFeedback -> ... -> Solved | Exhausted`.
//! Faults from the board end the game as a recorded loss instead of an error;
//! only an interrupt from the caller abandons it without a record.

use super::{GameBoard, GameMode, GameResult, Outcome};
use crate::config::SessionConfig;
use crate::core::{Feedback, Word};
use crate::error::{BoardError, EngineError, SessionAborted};
use crate::solver::{ClueLedger, EliminationPipeline, GuessRanker};
use crate::stats::ResultSink;
use crate::wordlists::CandidateStore;
use chrono::Local;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    AwaitingGuess,
    AwaitingFeedback,
    Solved,
    Exhausted,
    /// Ended early without solving (no candidates left, or the board failed)
    Halted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Halted)
    }
}

/// Supplies guesses typed by a player
pub trait GuessPrompt {
    /// Ask for the guess of `attempt` (0-based), offering the ranker's pick
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Interrupted` when the player quits.
    fn next_guess(&mut self, attempt: usize, suggestion: Option<&Word>)
    -> Result<Word, BoardError>;

    /// Told when a guess is refused because it is not in the dictionary
    fn rejected(&mut self, _guess: &Word) {}
}

/// How `AwaitingGuess` picks its word
pub enum GuessSource<'p> {
    Ranked,
    RandomFirst,
    Manual(&'p mut dyn GuessPrompt),
}

impl GuessSource<'_> {
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        match self {
            Self::Ranked => GameMode::Auto,
            Self::RandomFirst => GameMode::Random,
            Self::Manual(_) => GameMode::Manual,
        }
    }
}

/// A single play-through from reset to solved or exhausted
pub struct GameSession<'d> {
    dictionary: &'d CandidateStore,
    config: SessionConfig,
    ranker: GuessRanker,
    rng: StdRng,
    ledger: ClueLedger,
    candidates: Vec<Word>,
    history: Vec<(Word, Feedback)>,
    attempts: usize,
    state: SessionState,
}

impl<'d> GameSession<'d> {
    #[must_use]
    pub fn new(dictionary: &'d CandidateStore, config: SessionConfig) -> Self {
        Self {
            dictionary,
            config,
            ranker: GuessRanker::default(),
            rng: StdRng::from_os_rng(),
            ledger: ClueLedger::new(),
            candidates: dictionary.words().to_vec(),
            history: Vec::new(),
            attempts: 0,
            state: SessionState::Init,
        }
    }

    /// Fix the random first guess for reproducible games
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn ledger(&self) -> &ClueLedger {
        &self.ledger
    }

    /// Candidates left after the most recent narrowing
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Play one game on `board` and hand the result to `sink`
    ///
    /// The session is reset first, so one `GameSession` can play several games
    /// back to back without sharing knowledge between them.
    ///
    /// # Errors
    ///
    /// Returns `SessionAborted` when the board or prompt reports an interrupt;
    /// nothing is recorded in that case. Every other failure is folded into the
    /// returned `GameResult`.
    ///
    /// # Examples
    /// ```
    /// use wordle_clue_solver::config::SessionConfig;
    /// use wordle_clue_solver::core::Word;
    /// use wordle_clue_solver::session::{GameSession, GuessSource, LocalBoard};
    /// use wordle_clue_solver::wordlists::CandidateStore;
    ///
    /// let dictionary = CandidateStore::parse("crane slate irate").unwrap();
    /// let mut board = LocalBoard::new(Word::new("slate").unwrap());
    /// let mut results = Vec::new();
    ///
    /// let mut session = GameSession::new(&dictionary, SessionConfig::default());
    /// let result = session.play(&mut board, GuessSource::Ranked, &mut results).unwrap();
    /// assert!(result.solved);
    /// assert_eq!(results.len(), 1);
    /// ```
    pub fn play<B: GameBoard + ?Sized>(
        &mut self,
        board: &mut B,
        mut source: GuessSource<'_>,
        sink: &mut dyn ResultSink,
    ) -> Result<GameResult, SessionAborted> {
        let mode = source.mode();
        self.reset();
        info!("Starting {mode} game with {} candidates", self.candidates.len());

        let outcome = match self.run_attempts(board, &mut source) {
            Ok(outcome) => outcome,
            Err(EngineError::Board(BoardError::Interrupted)) => return Err(self.abort()),
            Err(EngineError::NoCandidates) => {
                warn!("No candidates remain after {} attempts", self.attempts);
                self.transition(SessionState::Halted);
                Outcome::NoCandidates
            }
            Err(e) => {
                warn!("Game crashed after {} attempts: {e}", self.attempts);
                self.transition(SessionState::Halted);
                Outcome::Crashed {
                    reason: e.to_string(),
                }
            }
        };

        let (answer, outcome) = match outcome {
            Outcome::Solved => (self.ledger.solved_word(), Outcome::Solved),
            Outcome::Crashed { reason } => (None, Outcome::Crashed { reason }),
            unsolved => match board.reveal_answer() {
                Ok(answer) => (Some(answer), unsolved),
                Err(BoardError::Interrupted) => return Err(self.abort()),
                Err(e) => {
                    warn!("Board did not reveal the answer: {e}");
                    self.transition(SessionState::Halted);
                    (
                        None,
                        Outcome::Crashed {
                            reason: e.to_string(),
                        },
                    )
                }
            },
        };

        let result = GameResult {
            date: Local::now().date_naive(),
            mode,
            answer,
            solved: outcome.is_solved(),
            attempts: self.attempts,
            outcome,
            history: self.history.clone(),
        };

        if let Err(e) = sink.record(&result) {
            warn!("Failed to record game result: {e}");
        }
        Ok(result)
    }

    fn reset(&mut self) {
        self.transition(SessionState::Init);
        self.ledger.clear();
        self.candidates = self.dictionary.words().to_vec();
        self.history.clear();
        self.attempts = 0;
        self.transition(SessionState::AwaitingGuess);
    }

    fn abort(&mut self) -> SessionAborted {
        info!("Session interrupted after {} attempts", self.attempts);
        let aborted = SessionAborted {
            attempts: self.attempts,
        };
        self.ledger.clear();
        self.history.clear();
        self.transition(SessionState::Halted);
        aborted
    }

    fn run_attempts<B: GameBoard + ?Sized>(
        &mut self,
        board: &mut B,
        source: &mut GuessSource<'_>,
    ) -> Result<Outcome, EngineError> {
        loop {
            let guess = self.next_guess(source)?;
            info!("Attempt {}: guessing {guess}", self.attempts + 1);
            board.submit(&guess)?;
            self.transition(SessionState::AwaitingFeedback);

            let feedback = board.await_feedback(
                self.attempts,
                self.config.feedback_timeout,
                self.config.poll_interval,
            )?;
            let spelled = feedback.tiles().iter().map(|t| t.letter.to_ascii_lowercase());
            if spelled.ne(guess.chars().iter().copied()) {
                return Err(BoardError::UnexpectedFeedback(format!(
                    "tiles do not spell {guess} on attempt {}",
                    self.attempts + 1
                ))
                .into());
            }

            let new_clues = self.ledger.ingest(&feedback);
            debug!("Feedback {feedback} added {new_clues} new clues");
            self.history.push((guess, feedback));
            self.attempts += 1;

            if self.ledger.is_solved() {
                self.transition(SessionState::Solved);
                return Ok(Outcome::Solved);
            }
            if self.attempts >= self.config.max_attempts {
                self.transition(SessionState::Exhausted);
                return Ok(Outcome::Exhausted);
            }
            self.transition(SessionState::AwaitingGuess);
        }
    }

    /// Narrow the candidates with the current ledger, then pick a guess
    fn next_guess(&mut self, source: &mut GuessSource<'_>) -> Result<Word, EngineError> {
        self.candidates = EliminationPipeline::run(&self.candidates, &self.ledger);
        debug!("{} candidates remain", self.candidates.len());

        match source {
            GuessSource::Ranked => self.ranked_guess(),
            GuessSource::RandomFirst if self.attempts == 0 => self
                .dictionary
                .choose(&mut self.rng)
                .cloned()
                .ok_or(EngineError::NoCandidates),
            GuessSource::RandomFirst => self.ranked_guess(),
            GuessSource::Manual(prompt) => {
                // No hint once the candidates run out
                let suggestion = self.ranked_guess().ok();
                loop {
                    let guess = prompt.next_guess(self.attempts, suggestion.as_ref())?;
                    if self.dictionary.contains(&guess) {
                        return Ok(guess);
                    }
                    debug!("Rejected manual guess {guess}: not in dictionary");
                    prompt.rejected(&guess);
                }
            }
        }
    }

    fn ranked_guess(&self) -> Result<Word, EngineError> {
        let ranked = self.ranker.rank(&self.candidates, &self.ledger)?;
        debug!("Ranked {} highest at {:.2}", ranked.word, ranked.score);
        Ok(ranked.word.clone())
    }

    fn transition(&mut self, next: SessionState) {
        debug!("Session state {:?} -> {next:?}", self.state);
        self.state = next;
    }
}

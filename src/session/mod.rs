//! Game sessions and the boards they play against

mod board;
mod game;
mod local;
mod result;
pub mod terminal;

pub use board::GameBoard;
pub use game::{GameSession, GuessPrompt, GuessSource, SessionState};
pub use local::LocalBoard;
pub use result::{GameMode, GameResult, Outcome};
pub use terminal::{LineReader, TerminalBoard, TerminalPrompt};

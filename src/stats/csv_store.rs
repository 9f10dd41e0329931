//! Semicolon-delimited results file
//!
//! One header line `date;game_mode;answer;solved;guesses`, then one row per
//! recorded game, e.g. `2024-05-14;auto;crane;true;4`.

use super::ResultSink;
use crate::error::StatsError;
use crate::session::{GameMode, GameResult};
use chrono::NaiveDate;
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "date;game_mode;answer;solved;guesses";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DELIMITER: char = ';';

/// One row of the results file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredResult {
    pub date: NaiveDate,
    pub mode: GameMode,
    pub answer: String,
    pub solved: bool,
    pub guesses: usize,
}

impl StoredResult {
    #[must_use]
    pub fn from_game(result: &GameResult) -> Self {
        Self {
            date: result.date,
            mode: result.mode,
            answer: result.answer_text().to_string(),
            solved: result.solved,
            guesses: result.attempts,
        }
    }

    /// Crashes before the first attempt leave nothing worth keeping
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.answer.is_empty() && self.guesses > 0
    }

    fn to_row(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.date.format(DATE_FORMAT),
            self.mode,
            self.answer,
            self.solved,
            self.guesses
        )
    }

    fn parse_row(row: &str) -> Result<Self, String> {
        let fields: Vec<&str> = row.split(DELIMITER).map(str::trim).collect();
        let [date, mode, answer, solved, guesses] = fields.as_slice() else {
            return Err(format!("expected 5 fields, found {}", fields.len()));
        };

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| format!("bad date '{date}': {e}"))?;
        let mode = mode.parse::<GameMode>()?;
        let solved = match solved.to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            other => return Err(format!("bad solved flag '{other}'")),
        };
        let guesses = guesses
            .parse::<usize>()
            .map_err(|e| format!("bad guess count '{guesses}': {e}"))?;

        Ok(Self {
            date,
            mode,
            answer: (*answer).to_string(),
            solved,
            guesses,
        })
    }
}

/// Results file on disk
#[derive(Debug, Clone)]
pub struct CsvStatsStore {
    path: PathBuf,
}

impl CsvStatsStore {
    /// Open the store, creating parent directories and the header if missing
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Io` if the directory or file cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StatsError> {
        let path = path.into();
        let io_err = |source: std::io::Error| StatsError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        if !path.exists() {
            debug!("Creating stats file {}", path.display());
            fs::write(&path, format!("{HEADER}\n")).map_err(io_err)?;
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, returning false when the row is rejected as invalid
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Io` if the file cannot be written.
    pub fn append(&self, row: &StoredResult) -> Result<bool, StatsError> {
        if !row.is_valid() {
            info!("Result not saved: game crashed before any attempt");
            return Ok(false);
        }

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        writeln!(file, "{}", row.to_row()).map_err(|source| self.io_error(source))?;
        Ok(true)
    }

    /// Read every recorded row
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Io` if the file cannot be read and
    /// `StatsError::Malformed` for the first row that does not parse.
    pub fn load(&self) -> Result<Vec<StoredResult>, StatsError> {
        let content = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;

        content
            .lines()
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                StoredResult::parse_row(line).map_err(|reason| StatsError::Malformed {
                    path: self.path.clone(),
                    line: idx + 1,
                    reason,
                })
            })
            .collect()
    }

    /// Answer recorded for `date`, or for the first row when no date is given
    ///
    /// # Errors
    ///
    /// Propagates errors from [`CsvStatsStore::load`].
    pub fn answer_for(&self, date: Option<NaiveDate>) -> Result<Option<String>, StatsError> {
        let rows = self.load()?;
        let found = match date {
            Some(date) => rows.into_iter().find(|row| row.date == date),
            None => rows.into_iter().next(),
        };
        Ok(found.map(|row| row.answer))
    }

    fn io_error(&self, source: std::io::Error) -> StatsError {
        StatsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ResultSink for CsvStatsStore {
    fn record(&mut self, result: &GameResult) -> Result<(), StatsError> {
        self.append(&StoredResult::from_game(result)).map(|_| ())
    }
}

//! Persisting and summarising finished games

mod csv_store;
mod summary;

pub use csv_store::{CsvStatsStore, HEADER, StoredResult};
pub use summary::StatsSummary;

use crate::error::StatsError;
use crate::session::GameResult;

/// Receives every finished (not aborted) game exactly once
pub trait ResultSink {
    /// # Errors
    ///
    /// Returns `StatsError` if the result cannot be stored.
    fn record(&mut self, result: &GameResult) -> Result<(), StatsError>;
}

/// Collects results in memory
impl ResultSink for Vec<GameResult> {
    fn record(&mut self, result: &GameResult) -> Result<(), StatsError> {
        self.push(result.clone());
        Ok(())
    }
}

//! Stats command
//!
//! Win rate and guess distribution from the results store, or the answer
//! recorded for a given day.

use crate::error::StatsError;
use crate::output::{print_recorded_answer, print_stats_summary};
use crate::stats::{CsvStatsStore, StatsSummary};
use chrono::NaiveDate;

/// Print the summary, or the recorded answer when `answer_on` is set
///
/// # Errors
///
/// Returns `StatsError` if the store cannot be read.
pub fn run_stats(store: &CsvStatsStore, answer_on: Option<NaiveDate>) -> Result<(), StatsError> {
    if let Some(date) = answer_on {
        let answer = store.answer_for(Some(date))?;
        print_recorded_answer(Some(date), answer.as_deref());
        return Ok(());
    }

    let rows = store.load()?;
    print_stats_summary(&StatsSummary::from_results(&rows));
    Ok(())
}

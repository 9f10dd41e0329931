//! Session configuration and default file locations

use std::path::PathBuf;
use std::time::Duration;

/// Attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

const DEFAULT_FEEDBACK_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
const APP_DIR: &str = "wordle_clue_solver";
const STATS_FILE: &str = "stats.csv";

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: usize,
    /// Upper bound on waiting for one row of tiles to be revealed
    pub feedback_timeout: Duration,
    /// Delay between feedback polls while tiles are still pending
    pub poll_interval: Duration,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            feedback_timeout: DEFAULT_FEEDBACK_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    #[must_use]
    pub const fn with_feedback_timeout(mut self, timeout: Duration) -> Self {
        self.feedback_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where results are appended when no `--stats` path is given
///
/// `<data dir>/wordle_clue_solver/stats.csv`, or `./stats.csv` when the platform
/// has no data directory.
#[must_use]
pub fn default_stats_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(STATS_FILE),
        |dir| dir.join(APP_DIR).join(STATS_FILE),
    )
}

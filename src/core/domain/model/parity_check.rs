//! Parity check progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of the most recent (or current) parity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParityCheckStatus {
    NeverRun,
    Running,
    Paused,
    Completed,
    Cancelled,
    Failed,
}

impl ParityCheckStatus {
    pub const ALL: [ParityCheckStatus; 6] = [
        ParityCheckStatus::NeverRun,
        ParityCheckStatus::Running,
        ParityCheckStatus::Paused,
        ParityCheckStatus::Completed,
        ParityCheckStatus::Cancelled,
        ParityCheckStatus::Failed,
    ];

    /// Returns the wire value of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ParityCheckStatus::NeverRun => "NEVER_RUN",
            ParityCheckStatus::Running => "RUNNING",
            ParityCheckStatus::Paused => "PAUSED",
            ParityCheckStatus::Completed => "COMPLETED",
            ParityCheckStatus::Cancelled => "CANCELLED",
            ParityCheckStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ParityCheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parity check state of the array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParityCheck {
    pub status: ParityCheckStatus,
    /// Progress percentage (0-100).
    pub progress: Option<u32>,
    /// Sync errors found so far.
    pub errors: Option<u64>,
    /// Current speed as reported (MB/s).
    pub speed: Option<String>,
    /// Elapsed time in seconds.
    pub duration: Option<u64>,
    /// Whether the check writes corrections to parity.
    pub correcting: Option<bool>,
    pub running: bool,
    pub paused: bool,
}

//! Array state and capacity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the Unraid array, including the invalid configurations that
/// prevent it from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrayState {
    Started,
    Stopped,
    NewArray,
    /// A disk is being rebuilt.
    ReconDisk,
    DisableDisk,
    SwapDsbl,
    InvalidExpansion,
    ParityNotBiggest,
    TooManyMissingDisks,
    NewDiskTooSmall,
    NoDataDisks,
}

impl ArrayState {
    pub const ALL: [ArrayState; 11] = [
        ArrayState::Started,
        ArrayState::Stopped,
        ArrayState::NewArray,
        ArrayState::ReconDisk,
        ArrayState::DisableDisk,
        ArrayState::SwapDsbl,
        ArrayState::InvalidExpansion,
        ArrayState::ParityNotBiggest,
        ArrayState::TooManyMissingDisks,
        ArrayState::NewDiskTooSmall,
        ArrayState::NoDataDisks,
    ];

    /// Returns the wire value of the state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrayState::Started => "STARTED",
            ArrayState::Stopped => "STOPPED",
            ArrayState::NewArray => "NEW_ARRAY",
            ArrayState::ReconDisk => "RECON_DISK",
            ArrayState::DisableDisk => "DISABLE_DISK",
            ArrayState::SwapDsbl => "SWAP_DSBL",
            ArrayState::InvalidExpansion => "INVALID_EXPANSION",
            ArrayState::ParityNotBiggest => "PARITY_NOT_BIGGEST",
            ArrayState::TooManyMissingDisks => "TOO_MANY_MISSING_DISKS",
            ArrayState::NewDiskTooSmall => "NEW_DISK_TOO_SMALL",
            ArrayState::NoDataDisks => "NO_DATA_DISKS",
        }
    }
}

impl fmt::Display for ArrayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate array state and capacity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Array {
    pub state: ArrayState,
    /// Free capacity in kilobytes.
    pub capacity_free: u64,
    /// Used capacity in kilobytes.
    pub capacity_used: u64,
    /// Total capacity in kilobytes.
    pub capacity_total: u64,
}

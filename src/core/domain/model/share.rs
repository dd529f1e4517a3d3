//! User shares.

use serde::{Deserialize, Serialize};

/// A named user share.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Share {
    pub name: String,
    /// Free space in bytes.
    pub free: u64,
    /// Used space in bytes.
    pub used: u64,
    /// Total size in bytes.
    pub size: u64,
    /// Allocation method (e.g. "highwater", "fillup", "mostfree").
    pub allocator: String,
    /// Minimum free space floor, as configured on the server.
    pub floor: String,
}

//! Identity of the Unraid host.

use serde::{Deserialize, Serialize};

/// Basic identity and version information of the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerInfo {
    /// URL the server advertises for its local web UI.
    pub localurl: String,
    /// Server display name (e.g. "Tower").
    pub name: String,
    /// Unraid OS version string (e.g. "7.1.2").
    pub unraid_version: String,
}

use serde::Serialize;
use std::fmt;

/// An opaque entity identifier in the server's `PrefixedID` format.
///
/// The format (typically `<server-id>:<local-id>`) is owned by the server,
/// which is also the one to reject a malformed value, so nothing is checked
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PrefixedId(String);

impl PrefixedId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PrefixedId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PrefixedId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PrefixedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! The GraphQL-over-HTTP envelope.
//!
//! The server wraps every answer in `{ "data": ..., "errors": [...] }`. The
//! executor unwraps it; schema decoding of `data` happens in the client.

use serde::{Deserialize, Serialize};

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub operation_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a serde_json::Value>,
}

/// Response envelope returned by the GraphQL endpoint.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    /// Path of the field that failed (e.g. `["vm", "start"]`).
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

impl GraphQlError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
        }
    }
}

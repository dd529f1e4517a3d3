//! The seam between the mapping client and whatever actually reaches the server.

use crate::core::domain::{error::UnraidResult, query::Operation};
use async_trait::async_trait;

/// Executes a single GraphQL operation and returns its `data` payload.
///
/// Implementations own transport, authentication and connection lifecycle.
/// They must return the raw `data` object on success and surface transport
/// failures and GraphQL `errors` as [`crate::UnraidError`]; schema decoding is
/// done by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(
        &self,
        operation: &Operation,
        variables: Option<serde_json::Value>,
    ) -> UnraidResult<serde_json::Value>;
}

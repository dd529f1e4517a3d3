use std::backtrace::Backtrace;
use thiserror::Error;

// Alias so `thiserror` does not auto-detect the field as a backtrace and emit
// the nightly-only `Error::provide` implementation. Same type as `Backtrace`.
type CapturedBacktrace = Backtrace;

use crate::core::infrastructure::graphql_response::GraphQlError;

/// The main error type for Unraid API operations.
///
/// Every failure raised by the client ends up here: transport problems,
/// rejected credentials, GraphQL-level errors reported by the server, and
/// responses that do not match the expected schema.
#[derive(Error, Debug)]
pub enum UnraidError {
    /// Represents errors that occur while talking to the server
    ///
    /// # Fields
    /// * `0` - A description of what went wrong with the request
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents a rejected API key
    ///
    /// # Fields
    /// * `0` - A description of the authentication failure
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The server answered, but reported GraphQL errors instead of data
    #[error("GraphQL error: {}", format_graphql_errors(.0))]
    GraphQl(Vec<GraphQlError>),

    /// Represents validation failures with detailed context
    ///
    /// # Fields
    /// * `source` - The underlying validation error
    /// * `backtrace` - Stack trace where the error occurred
    #[error("Validation error: {source}")]
    Validation {
        source: ValidationError,
        backtrace: CapturedBacktrace,
    },
}

impl From<ValidationError> for UnraidError {
    fn from(error: ValidationError) -> Self {
        UnraidError::Validation {
            source: error,
            backtrace: Backtrace::capture(),
        }
    }
}

fn format_graphql_errors(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Specialized error type for validation failures.
///
/// This covers both locally supplied values (URLs, keys, identifiers) and
/// response payloads that do not fit the schema of the query that was sent.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),

    /// A response payload did not match the expected schema
    ///
    /// # Fields
    /// * `operation` - The GraphQL operation whose response was rejected
    /// * `message` - The decoder's description (missing field, wrong type, unknown variant)
    #[error("Response to '{operation}' does not match schema: {message}")]
    Schema { operation: String, message: String },
}

/// Type alias for Results that may fail with an UnraidError
pub type UnraidResult<T> = Result<T, UnraidError>;

use crate::core::domain::error::ValidationError;
use std::fmt;

/// An Unraid API key, sent in the `x-api-key` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a validated API key.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_api_key(&value)?;
        Ok(Self(value))
    }

    /// Creates a new API key without validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keys end up in logs through `Debug` on the client config otherwise.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

/// Validates an API key string.
pub(crate) fn validate_api_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::Field {
            field: "api_key".to_string(),
            message: "API key cannot be empty".to_string(),
        });
    }
    if key.chars().any(char::is_whitespace) {
        return Err(ValidationError::Format(
            "API key cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}

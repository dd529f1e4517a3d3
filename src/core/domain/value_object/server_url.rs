use crate::core::domain::error::ValidationError;
use url::Url;

const GRAPHQL_PATH: &str = "graphql";

/// Constraints applied to the base URL of an Unraid server
///
/// - RFC 3986 (URI Generic Syntax)
/// - RFC 7230 length limit
/// - HTTP(S) only, with an explicit host
#[derive(Debug, Clone)]
pub(crate) struct ServerUrlConfig {
    allowed_schemes: &'static [&'static str],
    max_length: usize,
}

impl ServerUrlConfig {
    pub(crate) fn validate_url(&self, url: &str) -> Result<Url, ValidationError> {
        if url.is_empty() {
            return Err(ValidationError::Field {
                field: "url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        }

        if url.len() > self.max_length {
            return Err(ValidationError::Format(format!(
                "URL exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        let parsed = Url::parse(url)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

        if !self.allowed_schemes.iter().any(|s| *s == parsed.scheme()) {
            return Err(ValidationError::ConstraintViolation(format!(
                "Invalid scheme. Must be one of: {}",
                self.allowed_schemes.join(", ")
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::Field {
                field: "url".to_string(),
                message: "URL must include a host".to_string(),
            });
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ValidationError::ConstraintViolation(
                "URL cannot carry a query string or fragment".to_string(),
            ));
        }

        Ok(parsed)
    }
}

impl Default for ServerUrlConfig {
    fn default() -> Self {
        Self {
            allowed_schemes: &["http", "https"],
            max_length: 2083, // RFC 7230 standard
        }
    }
}

/// Represents a validated Unraid server URL
///
/// Accepts either the server root (`http://tower.local`) or the GraphQL
/// endpoint itself (`http://tower.local/graphql`); both resolve to the same
/// endpoint.
///
/// # Examples
///
/// ```
/// use unraid_graphql::ServerUrl;
///
/// let url = ServerUrl::new("https://tower.local:8443").unwrap();
/// assert_eq!(url.graphql_endpoint(), "https://tower.local:8443/graphql");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl {
    value: Url,
}

impl ServerUrl {
    /// Parses and validates a server URL.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = validate_url(value.as_ref())?;
        Ok(Self { value })
    }

    /// Returns the URL as given (normalised by the parser).
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the absolute URL of the GraphQL endpoint.
    #[must_use]
    pub fn graphql_endpoint(&self) -> String {
        let base = self.value.as_str().trim_end_matches('/');
        if base.ends_with(&format!("/{}", GRAPHQL_PATH)) {
            base.to_string()
        } else {
            format!("{}/{}", base, GRAPHQL_PATH)
        }
    }
}

/// Validates a URL string with the default configuration.
pub(crate) fn validate_url(url: &str) -> Result<Url, ValidationError> {
    ServerUrlConfig::default().validate_url(url)
}

//! HTTP executor that posts operations to the server's GraphQL endpoint.

use crate::core::{
    domain::{
        error::{UnraidError, UnraidResult, ValidationError},
        model::client_config::{ClientConfig, RateLimitConfig},
        query::Operation,
        value_object::{ApiKey, ServerUrl},
    },
    infrastructure::{
        executor::QueryExecutor,
        graphql_response::{GraphQlError, GraphQlRequest, GraphQlResponse},
    },
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-api-key";

/// [`QueryExecutor`] backed by `reqwest`.
///
/// Every request carries the API key in the `x-api-key` header. Requests are
/// optionally throttled by a client-side rate limiter. There is no retry: a
/// failed request is reported to the caller as-is.
#[derive(Debug)]
pub struct HttpExecutor {
    http_client: Client,
    endpoint: String,
    api_key: ApiKey,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl HttpExecutor {
    /// Creates a new `HttpExecutor` for the given server.
    ///
    /// # Errors
    /// Returns `UnraidError::Validation` for a zero rate limit and
    /// `UnraidError::Connection` if the HTTP client cannot be built.
    pub fn new(url: ServerUrl, api_key: ApiKey, config: ClientConfig) -> UnraidResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| UnraidError::Connection(e.to_string()))?;

        let rate_limiter = config
            .rate_limit
            .map(build_rate_limiter)
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            http_client,
            endpoint: url.graphql_endpoint(),
            api_key,
            rate_limiter,
        })
    }

    /// Returns the absolute URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(
        &self,
        operation: &Operation,
        variables: Option<&serde_json::Value>,
    ) -> UnraidResult<reqwest::Response> {
        let body = GraphQlRequest {
            query: operation.document,
            operation_name: operation.name,
            variables,
        };

        self.http_client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| UnraidError::Connection(format!("HTTP request failed: {}", e)))
    }
}

#[async_trait]
impl QueryExecutor for HttpExecutor {
    async fn execute(
        &self,
        operation: &Operation,
        variables: Option<serde_json::Value>,
    ) -> UnraidResult<serde_json::Value> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        debug!(operation = operation.name, endpoint = %self.endpoint, "sending GraphQL operation");
        let response = self.send(operation, variables.as_ref()).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(operation = operation.name, %status, "API key rejected");
            return Err(UnraidError::Authentication(format!(
                "API key rejected ({})",
                status
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| UnraidError::Connection(format!("Failed to read response: {}", e)))?;

        // Validation failures on the server side come back as 400 with a
        // regular GraphQL errors body.
        let envelope = serde_json::from_str::<GraphQlResponse>(&text);

        if !status.is_success() {
            warn!(operation = operation.name, %status, "GraphQL request failed");
            return match envelope {
                Ok(GraphQlResponse {
                    errors: Some(errors),
                    ..
                }) if !errors.is_empty() => Err(UnraidError::GraphQl(errors)),
                _ => Err(UnraidError::Connection(format!(
                    "API error ({}): {}",
                    status, text
                ))),
            };
        }

        let envelope = envelope.map_err(|e| {
            UnraidError::Connection(format!("Failed to parse response: {}", e))
        })?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            warn!(
                operation = operation.name,
                count = errors.len(),
                "server returned GraphQL errors"
            );
            return Err(UnraidError::GraphQl(errors));
        }

        match envelope.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(UnraidError::GraphQl(vec![GraphQlError::new(format!(
                "response to '{}' contained no data",
                operation.name
            ))])),
        }
    }
}

fn build_rate_limiter(config: RateLimitConfig) -> UnraidResult<DefaultDirectRateLimiter> {
    let per_second = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
        ValidationError::Field {
            field: "requests_per_second".to_string(),
            message: "Rate limit must be greater than zero".to_string(),
        }
    })?;
    let burst = NonZeroU32::new(config.burst_size).ok_or_else(|| ValidationError::Field {
        field: "burst_size".to_string(),
        message: "Burst size must be greater than zero".to_string(),
    })?;

    Ok(DefaultDirectRateLimiter::direct(
        Quota::per_second(per_second).allow_burst(burst),
    ))
}
